//! # lvlog - log stdin through a leveled logger
//!
//! Reads standard input line by line and writes every line through an
//! `lvlog` logger, so shell scripts get the same headers, labels and colors as
//! Rust programs:
//!
//! ```text
//! $ make 2>&1 | lvlog --severity warn --label --color --prefix "build: "
//! build: 2024/03/09 14:02:11 [WARN ] warning: unused variable `x`
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Install the diagnostics subscriber (`RUST_LOG` controls it)
//! 2. Load the logger configuration (`--config` file, or the platform default)
//! 3. Apply `LVLOG_LEVEL`, then command line overrides
//! 4. Copy stdin to the logger until EOF

use clap::Parser;
use lvlog::diagnostics::init_diagnostics;
use lvlog::{Flags, Logger, LoggerConfig, Severity};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Debug, Parser)]
#[command(name = "lvlog", version, about = "Write stdin lines through a leveled logger")]
struct Args {
    /// Severity of every line read from stdin (error, warn, info, debug)
    #[arg(long, default_value = "info", value_parser = parse_line_severity)]
    severity: Severity,

    /// Threshold of the logger; lines above it are dropped
    #[arg(long)]
    level: Option<Severity>,

    /// Logger configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text written at the start of every line
    #[arg(long)]
    prefix: Option<String>,

    /// Add the bracketed severity label
    #[arg(long)]
    label: bool,

    /// Colorize the label and message
    #[arg(long)]
    color: bool,

    /// Print timestamps in UTC
    #[arg(long)]
    utc: bool,
}

/// Fatal and panic would end the pipe on the first line.
fn parse_line_severity(value: &str) -> Result<Severity, String> {
    match value.parse::<Severity>() {
        Ok(Severity::Fatal | Severity::Panic) => {
            Err("fatal and panic severities cannot be used for piped lines".to_string())
        }
        Ok(severity) => Ok(severity),
        Err(e) => Err(e.to_string()),
    }
}

fn build_logger(args: &Args) -> Result<Logger, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => LoggerConfig::load_from(path)?,
        None => LoggerConfig::load(),
    }
    .with_env_overrides()?;

    if let Some(level) = args.level {
        config.level = level;
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if args.label {
        config.flags |= Flags::LABEL;
    }
    if args.color {
        config.flags |= Flags::LABEL | Flags::COLOR;
    }
    if args.utc {
        config.flags |= Flags::UTC;
    }

    debug!(?config, "building logger");
    Ok(config.build()?)
}

/// Copies stdin to the logger until EOF.
///
/// Lines are read as raw bytes; invalid UTF-8 is replaced rather than ending
/// the pipe.
fn run(args: &Args, logger: &Logger) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        match args.severity {
            Severity::Error => logger.error(&[&line]),
            Severity::Warn => logger.warn(&[&line]),
            Severity::Info => logger.info(&[&line]),
            Severity::Debug => logger.debug(&[&line]),
            // Rejected by the argument parser.
            Severity::Fatal | Severity::Panic => unreachable!(),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = init_diagnostics();
    let args = Args::parse();

    let logger = match build_logger(&args) {
        Ok(logger) => logger,
        Err(e) => {
            error!("invalid logger configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to read stdin: {}", e);
            ExitCode::FAILURE
        }
    }
}
