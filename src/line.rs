//! # Line Formatter
//!
//! Renders one log line (prefix, optional date/time/caller header, message)
//! and writes it to the sink in a single `write_all`. The severity label and
//! colors are not handled here; callers pass already decorated text.
//!
//! ## Layout
//!
//! ```text
//! <prefix><YYYY/MM/DD ><HH:MM:SS[.uuuuuu] ><file:line: ><text>\n
//! ```
//!
//! A trailing newline is only added when `text` does not already end with one.

use crate::flags::Flags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::panic::Location;

/// Line-oriented writer owning the output sink.
pub struct LineWriter {
    out: Box<dyn Write + Send>,
    prefix: String,
    flags: Flags,
}

impl LineWriter {
    pub fn new<W>(out: W, prefix: impl Into<String>, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            out: Box::new(out),
            prefix: prefix.into(),
            flags,
        }
    }

    /// Replaces the sink. The previous sink is flushed (best effort) and dropped.
    pub fn set_output(&mut self, out: Box<dyn Write + Send>) {
        let _ = self.out.flush();
        self.out = out;
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Formats `text` with the current prefix and flags and writes it as one line.
    ///
    /// `location` is printed when `SHORT_FILE` or `LONG_FILE` is set.
    pub fn output(&mut self, location: &Location<'_>, text: &str) -> io::Result<()> {
        let line = self.format_line(Utc::now(), location, text);
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    /// Builds the full line for a given instant without writing it.
    pub fn format_line(&self, now: DateTime<Utc>, location: &Location<'_>, text: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + text.len() + 48);
        line.push_str(&self.prefix);

        // Writing into a String cannot fail.
        if self.flags.has_timestamp() {
            if self.flags.contains(Flags::UTC) {
                let _ = write_timestamp(&mut line, self.flags, &now);
            } else {
                let _ = write_timestamp(&mut line, self.flags, &now.with_timezone(&Local));
            }
        }

        if self.flags.has_location() {
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            let _ = write!(line, "{}:{}: ", file, location.line());
        }

        line.push_str(text);
        if !text.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

fn write_timestamp<Tz>(line: &mut String, flags: Flags, at: &DateTime<Tz>) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if flags.contains(Flags::DATE) {
        write!(line, "{} ", at.format("%Y/%m/%d"))?;
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        write!(line, "{}", at.format("%H:%M:%S"))?;
        if flags.contains(Flags::MICROSECONDS) {
            write!(line, "{}", at.format(".%6f"))?;
        }
        line.push(' ');
    }
    Ok(())
}

/// Final path element, accepting both separators.
fn short_file(path: &str) -> &str {
    path.rsplit(&['/', '\\'][..]).next().unwrap_or(path)
}
