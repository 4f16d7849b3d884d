//! Severity label and ANSI color decoration of raw messages.

use crate::flags::Flags;
use crate::severity::{color, Severity};
use std::fmt::Write as _;

/// Decorates `message` according to the `LABEL` and `COLOR` bits of `flags`.
///
/// - without `LABEL` the message is returned as is;
/// - with `LABEL`: `[WARN ] message`;
/// - with `LABEL | COLOR`: `ESC[33m[WARN ]ESC[0m ESC[37mmessageESC[0m`
///   (label in the severity color, message in white).
///
/// `COLOR` without `LABEL` has no effect.
///
/// ```
/// use lvlog::{decorate, Flags, Severity};
///
/// assert_eq!(
///     decorate(Severity::Warn, Flags::LABEL | Flags::COLOR, "message"),
///     "\x1b[33m[WARN ]\x1b[0m \x1b[37mmessage\x1b[0m",
/// );
/// ```
pub fn decorate(severity: Severity, flags: Flags, message: &str) -> String {
    if !flags.contains(Flags::LABEL) {
        return message.to_string();
    }

    let label = severity.label();
    // Room for the label, brackets and four escape sequences.
    let mut out = String::with_capacity(message.len() + label.len() + 24);
    if flags.contains(Flags::COLOR) {
        push_escape(&mut out, severity.color());
        out.push('[');
        out.push_str(label);
        out.push(']');
        push_escape(&mut out, color::NONE);
        out.push(' ');
        push_escape(&mut out, color::WHITE);
        out.push_str(message);
        push_escape(&mut out, color::NONE);
    } else {
        out.push('[');
        out.push_str(label);
        out.push_str("] ");
        out.push_str(message);
    }
    out
}

fn push_escape(out: &mut String, code: u8) {
    // Writing into a String cannot fail.
    let _ = write!(out, "\x1b[{code}m");
}
