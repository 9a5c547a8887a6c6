//! Free-text search used by the list pages.

/// Case-insensitive substring match. An empty query matches everything;
/// whitespace is significant.
#[must_use]
pub fn matches(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// True when any of the given fields matches the query.
#[must_use]
pub fn matches_any(fields: &[&str], query: &str) -> bool {
    fields.iter().any(|field| matches(field, query))
}
