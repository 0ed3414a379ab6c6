//! URL utility functions.
//!
//! Resolution of raw attribute values into absolute URLs. A value only
//! counts as already-absolute when it carries an `http`/`https` scheme and
//! parses with a host; anything else is joined against the page URL.

use url::Url;

/// Check if a string is an absolute `http`/`https` URL.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => url.host().is_some(),
        Err(_) => false,
    }
}

/// Resolve a raw attribute value to an absolute URL string.
///
/// Absolute values are returned unchanged. Special non-fetchable schemes
/// (`data:`, `javascript:`, `mailto:`, `tel:`) are preserved as-is.
/// Everything else is joined against `base`; if joining fails the raw
/// value is returned unchanged.
#[must_use]
pub fn resolve_url(raw: &str, base: &Url) -> String {
    let raw = raw.trim();

    if raw.is_empty() {
        return String::new();
    }

    if raw.starts_with("data:")
        || raw.starts_with("javascript:")
        || raw.starts_with("mailto:")
        || raw.starts_with("tel:")
    {
        return raw.to_string();
    }

    if is_absolute_url(raw) {
        return raw.to_string();
    }

    match base.join(raw) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => raw.to_string(),
    }
}
