// src/templates/placeholder.rs
//! `{token}` placeholder scanning and substitution for content templates

use rand::Rng;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Years,
    Percentage,
    Amount,
    Days,
    Number,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::Years,
        Placeholder::Percentage,
        Placeholder::Amount,
        Placeholder::Days,
        Placeholder::Number,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Years => "years",
            Placeholder::Percentage => "percentage",
            Placeholder::Amount => "amount",
            Placeholder::Days => "days",
            Placeholder::Number => "number",
        }
    }

    /// Inclusive range a numeric placeholder is drawn from. `Years` is caller-provided.
    pub fn range(self) -> Option<RangeInclusive<u32>> {
        match self {
            Placeholder::Years => None,
            Placeholder::Percentage => Some(10..=39),
            Placeholder::Amount => Some(100..=599),
            Placeholder::Days => Some(2..=6),
            Placeholder::Number => Some(5..=14),
        }
    }

    /// Draw a rendered value for a numeric placeholder
    pub fn random_value<R: Rng + ?Sized>(self, rng: &mut R) -> Option<String> {
        let value = rng.gen_range(self.range()?);
        Some(match self {
            Placeholder::Amount => format!("{}K", value),
            _ => value.to_string(),
        })
    }
}

/// Every `{...}` token in `template`, known or not
pub fn tokens(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                found.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    found
}

/// Tokens in `template` that have no substitution rule
pub fn unknown_tokens(template: &str) -> Vec<&str> {
    tokens(template)
        .into_iter()
        .filter(|t| Placeholder::from_token(t).is_none())
        .collect()
}

/// Replace each known placeholder occurrence with `value_for(placeholder)`.
/// Every occurrence is resolved separately. Unknown tokens are left untouched.
pub fn fill<F>(template: &str, mut value_for: F) -> String
where
    F: FnMut(Placeholder) -> String,
{
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };

        let token = &after[..end];
        match Placeholder::from_token(token) {
            Some(placeholder) => result.push_str(&value_for(placeholder)),
            None => result.push_str(&rest[start..start + end + 2]),
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tokens() {
        assert_eq!(
            tokens("Cut costs by {percentage}% in {days} days"),
            vec!["percentage", "days"]
        );
        assert!(tokens("no placeholders").is_empty());
        assert!(tokens("dangling {brace").is_empty());
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(unknown_tokens("{years} and {salary}"), vec!["salary"]);
        assert!(unknown_tokens("{amount} over {number} quarters").is_empty());
    }

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let filled = fill("{years} then {years}", |_| "3-5".to_string());
        assert_eq!(filled, "3-5 then 3-5");
    }

    #[test]
    fn test_fill_keeps_unknown_and_dangling() {
        let filled = fill("{salary} for {years} {open", |_| "X".to_string());
        assert_eq!(filled, "{salary} for X {open");
    }

    #[test]
    fn test_fill_resolves_each_occurrence_separately() {
        let mut counter = 0;
        let filled = fill("{number}/{number}", |_| {
            counter += 1;
            counter.to_string()
        });
        assert_eq!(filled, "1/2");
    }

    #[test]
    fn test_random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pct: u32 = Placeholder::Percentage
                .random_value(&mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((10..=39).contains(&pct));

            let amount = Placeholder::Amount.random_value(&mut rng).unwrap();
            let digits: u32 = amount.strip_suffix('K').unwrap().parse().unwrap();
            assert!((100..=599).contains(&digits));

            let days: u32 = Placeholder::Days.random_value(&mut rng).unwrap().parse().unwrap();
            assert!((2..=6).contains(&days));

            let number: u32 = Placeholder::Number
                .random_value(&mut rng)
                .unwrap()
                .parse()
                .unwrap();
            assert!((5..=14).contains(&number));
        }
        assert_eq!(Placeholder::Years.random_value(&mut rng), None);
    }
}
