//! CLI tool to format a hex dump file into C array initializers.
//!
//! Usage:
//!   format-scans <scan.dump>
//!   format-scans --strict <scan.dump>
//!
//! The argument list is echoed first, then one `{ 0x.., 0x.. };` line is
//! written to stdout for every input line without a colon.

use clap::Parser;
use log::{LevelFilter, info};
use scan_format::{FormatError, FormatOptions, LineFormatter, Result};
use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

/// Format hex dump lines as C-style byte array initializers.
///
/// Lines containing ':' are skipped. Every other line is split on single
/// spaces and each token is prefixed with 0x.
#[derive(Parser)]
#[command(name = "format-scans")]
struct Cli {
    /// Input file with one row of hex bytes per line
    path: PathBuf,

    /// Drop empty tokens and skip lines left without any
    #[arg(long)]
    strict: bool,

    /// Log progress and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Echo the arguments (without the program name) as a list, e.g. `["scan.dump"]`.
fn echo_args<W: Write>(writer: &mut W) -> Result<()> {
    let echoed: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    writeln!(writer, "{echoed:?}").map_err(FormatError::Write)?;
    writer.flush().map_err(FormatError::Write)
}

fn main() {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    // Flushed before parsing so the echo survives a usage error exit.
    if let Err(e) = echo_args(&mut writer) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = if cli.strict {
        FormatOptions::strict()
    } else {
        FormatOptions::default()
    };

    match LineFormatter::new(options).format_file(&cli.path, writer) {
        Ok(summary) => info!("{summary}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
