//! Per-line rules: annotation skip, stripping and token splitting.
//!
//! A hex dump line looks like `BE EF 00 01`. Lines carrying an address or
//! label (`00: AA BB`, `> HCI Event: LE Meta Event`) contain a colon and
//! are dropped before any splitting happens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Token separator: one literal space. Runs of spaces produce empty tokens.
static TOKEN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(" ").unwrap());

/// Returns true if the raw line is an annotation and must be skipped.
///
/// The check runs on the line as read, before stripping.
pub fn is_annotation(line: &str) -> bool {
    line.contains(':')
}

fn is_strip_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\0')
}

/// Remove leading and trailing ASCII whitespace and NUL bytes.
///
/// Unicode whitespace is left alone so that non-ASCII token content passes
/// through untouched.
pub fn strip_line(line: &str) -> &str {
    line.trim_matches(is_strip_char)
}

/// Split a stripped line on single spaces.
///
/// An empty line yields one empty token, and `"AA  BB"` yields
/// `["AA", "", "BB"]`. Tabs are not separators.
pub fn split_tokens(stripped: &str) -> Vec<&str> {
    TOKEN_SEPARATOR.split(stripped).collect()
}
