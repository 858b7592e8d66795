//! # scan-format
//!
//! Turns hex dump lines into C-style byte array initializers.
//!
//! Captured advertisement payloads are usually dumped as rows of hex bytes,
//! interleaved with annotation lines such as `00: ...` offsets or headers.
//! This crate drops every line containing a colon and rewrites the rest for
//! pasting into test sources.
//!
//! ## Overview
//!
//! Each remaining line goes through the same steps:
//! - **Strip**: leading and trailing whitespace is removed
//! - **Split**: the line is split on single spaces
//! - **Prefix**: every token gets a `0x` marker
//! - **Emit**: tokens are joined as `{ 0xAA, 0xBB };`
//!
//! Lines are processed one at a time, so input size is not bounded by memory.
//!
//! ## Example
//!
//! ```
//! use scan_format::{FormatOptions, format_text};
//!
//! let input = "00: BE EF\nBE EF 00 01\n";
//! let (output, summary) = format_text(input, FormatOptions::default()).unwrap();
//!
//! assert_eq!(output, "{ 0xBE, 0xEF, 0x00, 0x01 };\n");
//! assert_eq!(summary.lines_skipped, 1);
//! ```

pub mod error;
pub mod formatter;
pub mod line;
pub mod record;

pub use error::{FormatError, Result};
pub use formatter::{FormatOptions, FormatSummary, LineFormatter, Strictness, format_text};
pub use line::{is_annotation, split_tokens, strip_line};
pub use record::{HEX_PREFIX, OutputRecord};
