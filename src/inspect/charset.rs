//! Accepted filename characters
//!
//! Single source of truth for which characters may appear in a filename.

use std::collections::BTreeSet;

/// Punctuation accepted in a filename, in addition to ASCII letters, digits and space.
pub const ACCEPTED_SYMBOLS: &[char] = &[
    '.', ',', '_', '+', '-', '=', ';', '!', '^', '~', '(', ')', '[', ']', '\'', '@', '&', '#',
    '%', '$', '\\', '/',
];

/// Returns true if `c` may appear in a filename.
pub fn is_accepted(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || ACCEPTED_SYMBOLS.contains(&c)
}

/// Collects the distinct characters of `filename` that are not accepted.
pub fn illegal_characters(filename: &str) -> BTreeSet<char> {
    filename.chars().filter(|c| !is_accepted(*c)).collect()
}
