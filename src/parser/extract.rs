//! Extract-or-default accessors
//!
//! Each accessor looks up the first element matching a selector inside a
//! fragment and returns its text or an attribute. A missing element or
//! attribute yields an empty string, never an error, so callers can read
//! every field of a listing without guarding each access.

use crate::query::normalize_text;
use scraper::{ElementRef, Selector};

/// Returns the whitespace-normalized text of the first match, or ""
pub fn text_or_default(fragment: ElementRef<'_>, selector: &Selector) -> String {
    fragment
        .select(selector)
        .next()
        .map(|element| normalize_text(&element.text().collect::<String>()))
        .unwrap_or_default()
}

/// Returns the trimmed value of `attr` on the first match, or ""
pub fn attr_or_default(fragment: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    fragment
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
