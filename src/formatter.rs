//! Line-at-a-time formatter.
//!
//! Each input line is read, classified, formatted and written before the
//! next line is read, so the input never has to fit in memory. The only
//! state carried across lines is the [`FormatSummary`] counter.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, trace};

use crate::error::{FormatError, Result};
use crate::line::{is_annotation, split_tokens, strip_line};
use crate::record::{HEX_PREFIX, OutputRecord};

/// How empty tokens are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Keep empty tokens: a blank line becomes `{ 0x };` and a double
    /// space becomes a bare `0x` entry.
    #[default]
    Preserve,
    /// Drop empty tokens, and skip lines that are left with none.
    Strict,
}

/// Formatting options. `Default` gives the reference behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub strictness: Strictness,
    pub prefix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Preserve,
            prefix: HEX_PREFIX.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            ..Self::default()
        }
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub lines_read: usize,
    pub records_written: usize,
    pub lines_skipped: usize,
}

impl fmt::Display for FormatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} lines -> {} records ({} skipped)",
            self.lines_read, self.records_written, self.lines_skipped
        )
    }
}

/// Turns hex-dump lines into array initializer records.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    options: FormatOptions,
}

impl LineFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format one raw line, or `None` if the line is skipped.
    pub fn format_line(&self, raw: &str) -> Option<OutputRecord> {
        if is_annotation(raw) {
            return None;
        }

        let tokens = split_tokens(strip_line(raw));
        match self.options.strictness {
            Strictness::Preserve => Some(OutputRecord::from_tokens(tokens, &self.options.prefix)),
            Strictness::Strict => {
                let record = OutputRecord::from_tokens(
                    tokens.into_iter().filter(|token| !token.is_empty()),
                    &self.options.prefix,
                );
                (!record.is_empty()).then_some(record)
            }
        }
    }

    /// Open `path` and format it into `writer`.
    ///
    /// Fails with [`FormatError::FileAccess`] before writing anything if the
    /// path is missing, unreadable or a directory. The file handle is closed
    /// when this returns, on success or error.
    pub fn format_file<P, W>(&self, path: P, writer: W) -> Result<FormatSummary>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let path = path.as_ref();
        let file = open_input(path)?;
        debug!("Reading {}", path.display());
        self.run(BufReader::new(file), writer, path)
    }

    /// Format every line of `reader` into `writer`.
    pub fn format_stream<R, W>(&self, reader: R, writer: W) -> Result<FormatSummary>
    where
        R: BufRead,
        W: Write,
    {
        self.run(reader, writer, Path::new("<input>"))
    }

    fn run<R, W>(&self, mut reader: R, mut writer: W, origin: &Path) -> Result<FormatSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = FormatSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| FormatError::Read {
                    path: origin.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            let line = String::from_utf8_lossy(&buf);
            match self.format_line(&line) {
                Some(record) => {
                    writeln!(writer, "{record}").map_err(FormatError::Write)?;
                    summary.records_written += 1;
                }
                None => {
                    trace!("Skipping line {}", summary.lines_read);
                    summary.lines_skipped += 1;
                }
            }
        }

        writer.flush().map_err(FormatError::Write)?;
        Ok(summary)
    }
}

fn open_input(path: &Path) -> Result<File> {
    let access_error = |source| FormatError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access_error)?;
    let metadata = file.metadata().map_err(access_error)?;
    if metadata.is_dir() {
        return Err(access_error(io::Error::other("is a directory")));
    }
    Ok(file)
}

/// Format in-memory text with the given options.
///
/// Returns `(output_text, summary)`. Output lines end with `\n`.
pub fn format_text(input: &str, options: FormatOptions) -> Result<(String, FormatSummary)> {
    let mut output = Vec::new();
    let summary = LineFormatter::new(options).format_stream(input.as_bytes(), &mut output)?;
    Ok((String::from_utf8_lossy(&output).into_owned(), summary))
}
