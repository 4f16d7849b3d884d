//! # Process Default Logger
//!
//! One [`Logger`] shared by the whole process, writing to stderr with flags
//! `DATE | TIME` and threshold `Error`. It is created on first use and never
//! torn down. The free functions below delegate to it one-to-one, so code can
//! log without constructing or passing a logger around:
//!
//! ```no_run
//! lvlog::set_level(lvlog::Severity::Info);
//! lvlog::info(&[&"listening on port ", &8080]);
//! lvlog::errorf(format_args!("lost {} connections", 3));
//! ```

use crate::flags::Flags;
use crate::logger::Logger;
use crate::severity::Severity;
use once_cell::sync::Lazy;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::panic::Location;

static STD: Lazy<Logger> = Lazy::new(|| Logger::new(io::stderr(), "", Flags::STD));

/// The process default logger.
pub fn std_logger() -> &'static Logger {
    &STD
}

/// Logs at fatal severity on the default logger, then exits with status 1.
#[track_caller]
pub fn fatal(parts: &[&dyn Display]) -> ! {
    STD.fatal(parts)
}

/// Like [`fatal`], with operands joined by spaces.
#[track_caller]
pub fn fatalln(parts: &[&dyn Display]) -> ! {
    STD.fatalln(parts)
}

/// Like [`fatal`], with a `format_args!` template.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    STD.fatalf(args)
}

/// Logs at panic severity on the default logger, then panics with the raw message.
#[track_caller]
pub fn panic(parts: &[&dyn Display]) -> ! {
    STD.panic(parts)
}

/// Like [`panic`](fn@panic), with operands joined by spaces.
#[track_caller]
pub fn panicln(parts: &[&dyn Display]) -> ! {
    STD.panicln(parts)
}

/// Like [`panic`](fn@panic), with a `format_args!` template.
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    STD.panicf(args)
}

/// Logs at error severity on the default logger.
#[track_caller]
pub fn error(parts: &[&dyn Display]) {
    STD.error(parts);
}

/// Like [`error`], with operands joined by spaces.
#[track_caller]
pub fn errorln(parts: &[&dyn Display]) {
    STD.errorln(parts);
}

/// Like [`error`], with a `format_args!` template.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    STD.errorf(args);
}

/// Logs at warn severity on the default logger.
#[track_caller]
pub fn warn(parts: &[&dyn Display]) {
    STD.warn(parts);
}

/// Like [`warn`], with operands joined by spaces.
#[track_caller]
pub fn warnln(parts: &[&dyn Display]) {
    STD.warnln(parts);
}

/// Like [`warn`], with a `format_args!` template.
#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    STD.warnf(args);
}

/// Logs at info severity on the default logger.
#[track_caller]
pub fn info(parts: &[&dyn Display]) {
    STD.info(parts);
}

/// Like [`info`], with operands joined by spaces.
#[track_caller]
pub fn infoln(parts: &[&dyn Display]) {
    STD.infoln(parts);
}

/// Like [`info`], with a `format_args!` template.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    STD.infof(args);
}

/// Logs at debug severity on the default logger.
#[track_caller]
pub fn debug(parts: &[&dyn Display]) {
    STD.debug(parts);
}

/// Like [`debug`], with operands joined by spaces.
#[track_caller]
pub fn debugln(parts: &[&dyn Display]) {
    STD.debugln(parts);
}

/// Like [`debug`], with a `format_args!` template.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    STD.debugf(args);
}

/// Alias of [`info`].
#[track_caller]
pub fn print(parts: &[&dyn Display]) {
    STD.print(parts);
}

/// Alias of [`infoln`].
#[track_caller]
pub fn println(parts: &[&dyn Display]) {
    STD.println(parts);
}

/// Alias of [`infof`].
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    STD.printf(args);
}

/// Writes `text` as one undecorated line on the default logger. See [`Logger::output`].
#[track_caller]
pub fn output(text: &str) -> io::Result<()> {
    STD.output_at(Location::caller(), text)
}

/// Flags of the default logger.
pub fn flags() -> Flags {
    STD.flags()
}

/// Sets the flags of the default logger.
pub fn set_flags(flags: Flags) {
    STD.set_flags(flags);
}

/// Threshold of the default logger.
pub fn level() -> Severity {
    STD.level()
}

/// Sets the threshold of the default logger.
pub fn set_level(level: Severity) {
    STD.set_level(level);
}

/// See [`Logger::set_level_value`].
pub fn set_level_value(value: u8) {
    STD.set_level_value(value);
}

/// Line prefix of the default logger.
pub fn prefix() -> String {
    STD.prefix()
}

/// Sets the line prefix of the default logger.
pub fn set_prefix(prefix: impl Into<String>) {
    STD.set_prefix(prefix);
}

/// Replaces the sink of the default logger.
pub fn set_output<W>(out: W)
where
    W: Write + Send + 'static,
{
    STD.set_output(out);
}

/// Whether the default logger would write a message at `severity`.
pub fn enabled(severity: Severity) -> bool {
    STD.enabled(severity)
}
