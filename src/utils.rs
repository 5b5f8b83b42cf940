//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static WORD_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("word separator pattern is valid"));

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a heading into a camel-case identifier.
///
/// Words are separated by spaces, hyphens and underscores. The first word is
/// kept as written, every following word is capitalized.
///
/// # Examples
///
/// ```
/// use scrapi::utils::camel_case;
///
/// assert_eq!(camel_case(""), "");
/// assert_eq!(camel_case("invoice-line"), "invoiceLine");
/// assert_eq!(camel_case("Invoice_Line Item"), "InvoiceLineItem");
/// ```
pub fn camel_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut words = WORD_SEPARATOR_RE.split(text).filter(|w| !w.is_empty());
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out = first.to_string();
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
