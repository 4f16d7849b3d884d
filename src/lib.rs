//! # lvlog - Leveled, Labeled Line Logger
//!
//! `lvlog` writes plain text log lines, one `write` per line, with optional
//! date/time/caller headers, a bracketed severity label and ANSI colors.
//!
//! ```text
//! 2024/03/09 14:02:11 [WARN ] cache miss ratio above 40%
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  free functions / macros ──► global (one Lazy<Logger> on stderr)
//!                                 │
//!                              Logger ── Mutex ─┬─ threshold (Severity)
//!                                 │             └─ LineWriter (sink, prefix, flags)
//!                              decorate()              │
//!                  [LABEL] + ANSI colors      date/time/file header + '\n'
//! ```
//!
//! ## Severities
//!
//! `Fatal < Panic < Error < Warn < Info < Debug`. A logger writes a message
//! when its threshold is at least the message severity; the default
//! threshold is `Error`. Fatal calls always exit the process with status 1
//! and panic calls always panic with the raw message, even when the line
//! itself is filtered out.
//!
//! ## Quick Start
//!
//! ```no_run
//! use lvlog::{infof, Flags, Logger, Severity};
//!
//! let logger = Logger::new(std::io::stderr(), "", Flags::STD | Flags::LABEL | Flags::COLOR);
//! logger.set_level(Severity::Info);
//! logger.info(&[&"ready"]);
//! infof!(logger => "{} workers started", 4);
//! ```

mod macros;

pub mod config;
pub mod constants;
pub mod decorate;
pub mod diagnostics;
pub mod error;
pub mod flags;
pub mod global;
pub mod line;
pub mod logger;
pub mod severity;

pub use config::{LoggerConfig, OutputConfig};
pub use decorate::decorate;
pub use error::ConfigError;
pub use flags::Flags;
pub use global::{
    debug, debugf, debugln, enabled, error, errorf, errorln, fatal, fatalf, fatalln, flags, info,
    infof, infoln, level, output, panic, panicf, panicln, prefix, print, printf, println,
    set_flags, set_level, set_level_value, set_output, set_prefix, std_logger, warn, warnf,
    warnln,
};
pub use line::LineWriter;
pub use logger::Logger;
pub use severity::{ParseSeverityError, Severity};
