//! Value coercion helpers.
//!
//! Raw attribute values are coerced leniently: malformed input yields
//! "absent" rather than an error, so a bad width never fails a whole
//! extraction.

/// Parse a raw attribute value as a positive pixel count.
///
/// Returns `None` for non-numeric, zero, negative or empty input.
#[must_use]
pub fn coerce_int(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Split a comma-delimited keyword list, preserving order.
///
/// Entries are trimmed and empty entries dropped.
#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize raw document text before tag-tree construction.
///
/// Strips leading/trailing whitespace and control noise, and removes
/// interior non-whitespace control characters.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c.is_control())
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect()
}
