// src/listing/value.rs
//! Typed field values exposed by listable items

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

use crate::utils::contains_ci;

/// Borrowed view of one field on an item
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Date(NaiveDateTime),
    Text(&'a str),
    Tags(&'a [String]),
}

impl<'a> FieldValue<'a> {
    pub fn date(date: NaiveDate) -> Self {
        FieldValue::Date(date.and_time(NaiveTime::MIN))
    }

    /// Free-text match. Only text and tag fields are searchable; `needle` must be lowercase.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => contains_ci(text, needle),
            FieldValue::Tags(tags) => tags.iter().any(|t| contains_ci(t, needle)),
            FieldValue::Number(_) | FieldValue::Date(_) => false,
        }
    }

    /// Exact facet equality, interpreting `facet` in the field's own type
    pub fn equals_facet(&self, facet: &str) -> bool {
        match self {
            FieldValue::Text(text) => *text == facet,
            FieldValue::Tags(tags) => tags.iter().any(|t| t == facet),
            FieldValue::Number(n) => facet
                .trim()
                .parse::<f64>()
                .map_or(false, |f| f == *n),
            FieldValue::Date(d) => parse_date(facet.trim()).map_or(false, |f| f == *d),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Tags(_) => 3,
        }
    }

    /// Total order used for sorting. Values of different kinds order by kind.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Tags(a), FieldValue::Tags(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// Compare optional field values; an absent field is the smallest value
pub fn compare_optional(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.compare(b),
    }
}

/// Parse the date and date-time shapes accepted in data files and facet values.
/// Naive values are read as UTC; values with an offset are converted to UTC, so
/// both shapes compare on the same timeline.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Owned field value, as stored by generic records
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
    Tags(Vec<String>),
}

impl Value {
    pub fn as_field(&self) -> FieldValue<'_> {
        match self {
            Value::Number(n) => FieldValue::Number(*n),
            Value::Date(d) => FieldValue::Date(*d),
            Value::Text(s) => FieldValue::Text(s),
            Value::Tags(t) => FieldValue::Tags(t),
        }
    }

    /// Type a raw cell: number, then date, then text. Blank cells are absent.
    /// Zero-padded digits such as postal codes stay text.
    pub fn infer(raw: &str) -> Option<Value> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if has_leading_zero(trimmed) {
            return Some(Value::Text(raw.to_string()));
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Some(Value::Number(n));
            }
        }
        if let Some(d) = parse_date(trimmed) {
            return Some(Value::Date(d));
        }
        Some(Value::Text(raw.to_string()))
    }

    /// Type a JSON value. Nulls and nested objects are absent.
    pub fn from_json(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null | serde_json::Value::Object(_) => None,
            serde_json::Value::Bool(b) => Some(Value::Text(b.to_string())),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
            serde_json::Value::String(s) => {
                if s.trim().is_empty() {
                    return None;
                }
                Some(match parse_date(s.trim()) {
                    Some(d) => Value::Date(d),
                    None => Value::Text(s.clone()),
                })
            }
            serde_json::Value::Array(items) => Some(Value::Tags(
                items
                    .iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(s) => Some(s.clone()),
                        serde_json::Value::Null => None,
                        other => Some(other.to_string()),
                    })
                    .collect(),
            )),
        }
    }
}

fn has_leading_zero(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let mut chars = digits.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Largest magnitude at which every integer is exact in an `f64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Date(d) => d.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Tags(t) => t.serialize(serializer),
        }
    }
}
