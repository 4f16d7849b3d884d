//! # Logger
//!
//! A [`Logger`] pairs a severity threshold with a [`LineWriter`] behind one
//! mutex. Every entry point follows the same sequence:
//!
//! 1. render the raw message (plain, line or formatted variant);
//! 2. lock, compare the threshold with the message severity;
//! 3. if allowed, decorate with label/color and write one line;
//! 4. unlock.
//!
//! Fatal entry points then exit the process with status 1 and panic entry
//! points panic with the raw message, whether or not the line was written.
//! The lock is always released first, so a recovered panic leaves the logger
//! usable.
//!
//! ## Write faults
//!
//! Severity entry points return `()`. A failed write is reported through
//! `tracing` (target `lvlog::logger`) and otherwise dropped. Use
//! [`Logger::output`] to observe write errors directly.

use crate::constants::FATAL_EXIT_CODE;
use crate::decorate::decorate;
use crate::flags::Flags;
use crate::line::LineWriter;
use crate::severity::Severity;
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// How the raw message is assembled from the caller's arguments.
enum Message<'a> {
    /// Operands concatenated with no separator.
    Plain(&'a [&'a dyn Display]),
    /// Operands separated by single spaces, terminated by a newline.
    Line(&'a [&'a dyn Display]),
    /// Template already bound by `format_args!`.
    Formatted(fmt::Arguments<'a>),
}

impl Message<'_> {
    fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String only fails if a Display impl reports an error.
        let _ = match self {
            Message::Plain(parts) => parts.iter().try_for_each(|part| write!(out, "{part}")),
            Message::Line(parts) => {
                let joined = parts.iter().enumerate().try_for_each(|(i, part)| {
                    if i > 0 {
                        out.push(' ');
                    }
                    write!(out, "{part}")
                });
                out.push('\n');
                joined
            }
            Message::Formatted(args) => out.write_fmt(*args),
        };
        out
    }
}

struct State {
    writer: LineWriter,
    level: Severity,
}

/// Leveled logger writing decorated lines to a sink.
///
/// `Logger` is `Send + Sync`; share it behind a reference, an `Arc` or use the
/// process-wide instance in [`crate::global`].
pub struct Logger {
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger with threshold [`Severity::Error`].
    pub fn new<W>(out: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            state: Mutex::new(State {
                writer: LineWriter::new(out, prefix, flags),
                level: Severity::DEFAULT,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // State is consistent between statements, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a message at `severity` would currently be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.lock().level.allows(severity)
    }

    fn write_at(&self, severity: Severity, location: &Location<'_>, text: &str) {
        let written = {
            let mut state = self.lock();
            if !state.level.allows(severity) {
                return;
            }
            let decorated = decorate(severity, state.writer.flags(), text);
            state.writer.output(location, &decorated)
        };
        // Reported after unlocking: a subscriber may log through this logger.
        if let Err(err) = written {
            warn!(target: "lvlog::logger", %severity, error = %err, "failed to write log line");
        }
    }

    #[track_caller]
    fn emit(&self, severity: Severity, message: Message<'_>) {
        // Skip rendering when filtered; the decision is re-checked under the lock.
        if !self.enabled(severity) {
            return;
        }
        self.write_at(severity, Location::caller(), &message.render());
    }

    #[track_caller]
    fn emit_fatal(&self, message: Message<'_>) -> ! {
        self.write_at(Severity::Fatal, Location::caller(), &message.render());
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    fn emit_panic(&self, message: Message<'_>) -> ! {
        let text = message.render();
        self.write_at(Severity::Panic, Location::caller(), &text);
        std::panic::panic_any(text)
    }

    /// Logs at fatal severity, then always exits the process with status 1.
    #[track_caller]
    pub fn fatal(&self, parts: &[&dyn Display]) -> ! {
        self.emit_fatal(Message::Plain(parts))
    }

    /// Like [`Logger::fatal`], with operands separated by spaces and a
    /// trailing newline.
    #[track_caller]
    pub fn fatalln(&self, parts: &[&dyn Display]) -> ! {
        self.emit_fatal(Message::Line(parts))
    }

    /// Like [`Logger::fatal`], with a `format_args!` template.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_fatal(Message::Formatted(args))
    }

    /// Logs at panic severity, then always panics with the undecorated
    /// message as a `String` payload.
    #[track_caller]
    pub fn panic(&self, parts: &[&dyn Display]) -> ! {
        self.emit_panic(Message::Plain(parts))
    }

    /// Like [`Logger::panic`], with operands separated by spaces and a
    /// trailing newline.
    #[track_caller]
    pub fn panicln(&self, parts: &[&dyn Display]) -> ! {
        self.emit_panic(Message::Line(parts))
    }

    /// Like [`Logger::panic`], with a `format_args!` template.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.emit_panic(Message::Formatted(args))
    }

    /// Logs at error severity; operands are concatenated.
    #[track_caller]
    pub fn error(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Error, Message::Plain(parts));
    }

    /// Logs at error severity; operands are joined by spaces.
    #[track_caller]
    pub fn errorln(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Error, Message::Line(parts));
    }

    /// Logs a formatted message at error severity.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, Message::Formatted(args));
    }

    /// Logs at warn severity; operands are concatenated.
    #[track_caller]
    pub fn warn(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Warn, Message::Plain(parts));
    }

    /// Logs at warn severity; operands are joined by spaces.
    #[track_caller]
    pub fn warnln(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Warn, Message::Line(parts));
    }

    /// Logs a formatted message at warn severity.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, Message::Formatted(args));
    }

    /// Logs at info severity; operands are concatenated.
    #[track_caller]
    pub fn info(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Info, Message::Plain(parts));
    }

    /// Logs at info severity; operands are joined by spaces.
    #[track_caller]
    pub fn infoln(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Info, Message::Line(parts));
    }

    /// Logs a formatted message at info severity.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Message::Formatted(args));
    }

    /// Logs at debug severity; operands are concatenated.
    #[track_caller]
    pub fn debug(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Debug, Message::Plain(parts));
    }

    /// Logs at debug severity; operands are joined by spaces.
    #[track_caller]
    pub fn debugln(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Debug, Message::Line(parts));
    }

    /// Logs a formatted message at debug severity.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, Message::Formatted(args));
    }

    /// Same as [`Logger::info`]; kept for callers used to `print`-style loggers.
    #[track_caller]
    pub fn print(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Info, Message::Plain(parts));
    }

    /// Same as [`Logger::infoln`].
    #[track_caller]
    pub fn println(&self, parts: &[&dyn Display]) {
        self.emit(Severity::Info, Message::Line(parts));
    }

    /// Same as [`Logger::infof`].
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, Message::Formatted(args));
    }

    /// Writes `text` as one line, bypassing the threshold and decoration.
    ///
    /// The reported file location is the caller's. A wrapper that marks its
    /// own function `#[track_caller]` moves the location one frame outward.
    #[track_caller]
    pub fn output(&self, text: &str) -> io::Result<()> {
        self.output_at(Location::caller(), text)
    }

    /// Like [`Logger::output`] with an explicit caller location.
    pub fn output_at(&self, location: &Location<'_>, text: &str) -> io::Result<()> {
        self.lock().writer.output(location, text)
    }

    /// Current header and decoration flags.
    pub fn flags(&self) -> Flags {
        self.lock().writer.flags()
    }

    /// Replaces the flags; takes effect on the next line.
    pub fn set_flags(&self, flags: Flags) {
        self.lock().writer.set_flags(flags);
    }

    /// Current threshold.
    pub fn level(&self) -> Severity {
        self.lock().level
    }

    /// Sets the threshold. Messages more verbose than `level` are dropped.
    pub fn set_level(&self, level: Severity) {
        let previous = std::mem::replace(&mut self.lock().level, level);
        log_level_change(previous, level);
    }

    /// Sets the threshold from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics with `invalid log level` if `value` is greater than 5. An
    /// out-of-range threshold is a caller bug and is never clamped.
    pub fn set_level_value(&self, value: u8) {
        match Severity::from_u8(value) {
            Some(level) => self.set_level(level),
            None => panic!("invalid log level: {value}"),
        }
    }

    /// Text written at the start of every line.
    pub fn prefix(&self) -> String {
        self.lock().writer.prefix().to_string()
    }

    /// Replaces the line prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().writer.set_prefix(prefix);
    }

    /// Replaces the sink for all subsequent lines.
    pub fn set_output<W>(&self, out: W)
    where
        W: Write + Send + 'static,
    {
        self.set_output_boxed(Box::new(out));
    }

    /// Like [`Logger::set_output`] for an already boxed sink.
    pub fn set_output_boxed(&self, out: Box<dyn Write + Send>) {
        self.lock().writer.set_output(out);
    }

    /// Replaces sink, prefix, flags and threshold under a single lock, so no
    /// line is written with a mix of old and new settings.
    pub fn reconfigure(
        &self,
        out: Box<dyn Write + Send>,
        prefix: impl Into<String>,
        flags: Flags,
        level: Severity,
    ) {
        let previous = {
            let mut state = self.lock();
            state.writer.set_output(out);
            state.writer.set_prefix(prefix);
            state.writer.set_flags(flags);
            std::mem::replace(&mut state.level, level)
        };
        log_level_change(previous, level);
    }
}

fn log_level_change(from: Severity, to: Severity) {
    if from != to {
        debug!(target: "lvlog::logger", %from, %to, "log level changed");
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("writer", &state.writer)
            .finish()
    }
}
