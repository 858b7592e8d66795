//! Output record: one C-style array initializer line.

use std::fmt;

/// Default marker prepended to every token.
pub const HEX_PREFIX: &str = "0x";

/// A formatted line, e.g. `{ 0xBE, 0xEF, 0x00 };`.
///
/// Tokens are stored already prefixed, in input order. `Display` renders
/// the record without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    tokens: Vec<String>,
}

impl OutputRecord {
    /// Build a record by prepending `prefix` to each token.
    ///
    /// Token content is copied verbatim: no case change, no validation.
    pub fn from_tokens<'a, I>(tokens: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|token| format!("{prefix}{token}"))
            .collect();
        Self { tokens }
    }

    /// The prefixed tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens in the record.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the record has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {} }};", self.tokens.join(", "))
    }
}
