//! Scanning of positional `%N` placeholders in message text.
//!
//! Qt substitutes `%1`..`%99` (and the locale-aware `%L1` variants)
//! positionally when formatting a localized string. A translation must
//! keep exactly the placeholders of its source, or arguments end up in
//! the wrong slots at render time. `%%` is a literal percent sign and is
//! never a placeholder.

use std::sync::OnceLock;

use regex::Regex;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The %% alternative consumes literal percent signs so that "%%1"
    // is not read as a placeholder.
    RE.get_or_init(|| Regex::new(r"%%|%L?([0-9]{1,2})").unwrap())
}

/// Placeholder numbers in order of appearance.
pub fn scan(text: &str) -> Vec<u8> {
    placeholder_re()
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Whether two texts use the same placeholders the same number of times.
///
/// Order of appearance is allowed to differ: numbered placeholders exist
/// precisely so translations can reorder arguments.
pub fn same_placeholders(source: &str, translation: &str) -> bool {
    let mut a = scan(source);
    let mut b = scan(translation);
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Human-readable list for diagnostics, e.g. `%1, %2, %3`.
pub fn describe(numbers: &[u8]) -> String {
    if numbers.is_empty() {
        return "none".to_string();
    }
    numbers
        .iter()
        .map(|n| format!("%{}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
