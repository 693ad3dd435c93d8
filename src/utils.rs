// src/utils.rs

/// Normalize an industry key for catalog lookups
pub fn normalize_industry(industry: &str) -> String {
    industry.trim().to_lowercase()
}

/// Normalize user-supplied search text. Blank input means "no search".
pub fn normalize_search(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive substring test; `needle` must already be lowercase
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
