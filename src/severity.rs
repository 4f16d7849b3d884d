//! # Severity Levels
//!
//! Severities are ordered from least to most verbose:
//!
//! ```text
//! Fatal(0) < Panic(1) < Error(2) < Warn(3) < Info(4) < Debug(5)
//! ```
//!
//! A logger's threshold is itself a severity: a message is written when the
//! threshold is greater than or equal to the message severity. A threshold of
//! `Debug` lets everything through, `Fatal` only fatal messages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI color codes used by the decorator.
pub mod color {
    pub const NONE: u8 = 0;
    pub const RED: u8 = 31;
    pub const GREEN: u8 = 32;
    pub const YELLOW: u8 = 33;
    pub const BLUE: u8 = 36;
    pub const WHITE: u8 = 37;
}

/// Message severity and logger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Severity {
    /// Logged, then the process exits with status 1
    Fatal = 0,
    /// Logged, then the calling thread panics with the message
    Panic = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
}

/// Error returned when a name or number does not denote a severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid log level: {0:?}")]
pub struct ParseSeverityError(pub String);

impl Severity {
    /// All severities, least verbose first.
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Panic,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Threshold of freshly constructed loggers.
    pub const DEFAULT: Severity = Severity::Error;

    /// Fixed-width (5 character) label shown between brackets.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN ",
            Severity::Info => "INFO ",
            Severity::Debug => "DEBUG",
        }
    }

    /// ANSI foreground color of the label.
    pub const fn color(self) -> u8 {
        match self {
            Severity::Fatal | Severity::Panic | Severity::Error => color::RED,
            Severity::Warn => color::YELLOW,
            Severity::Info => color::BLUE,
            Severity::Debug => color::GREEN,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `None` for values above `Debug` (5).
    pub const fn from_u8(value: u8) -> Option<Severity> {
        match value {
            0 => Some(Severity::Fatal),
            1 => Some(Severity::Panic),
            2 => Some(Severity::Error),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Info),
            5 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Whether a logger with threshold `self` lets `message` through.
    pub fn allows(self, message: Severity) -> bool {
        self >= message
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::DEFAULT
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts names in any case (`"warn"`, `"WARNING"`) or a digit `0`-`5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Severity::from_u8(value).ok_or_else(|| ParseSeverityError(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "panic" => Ok(Severity::Panic),
            "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: u8) -> Result<Self, ParseSeverityError> {
        Severity::from_u8(value).ok_or_else(|| ParseSeverityError(value.to_string()))
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.name().to_string()
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_numeric_values() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].as_u8() + 1, pair[1].as_u8());
        }
    }

    #[test]
    fn labels_are_five_characters() {
        for severity in Severity::ALL {
            assert_eq!(severity.label().len(), 5, "{severity}");
        }
    }

    #[test]
    fn parses_names_and_digits() {
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!(" debug ".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("0".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("6".parse::<Severity>().is_err());
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn threshold_allows_less_verbose_severities() {
        assert!(Severity::Info.allows(Severity::Warn));
        assert!(Severity::Info.allows(Severity::Info));
        assert!(!Severity::Info.allows(Severity::Debug));
        assert!(Severity::Fatal.allows(Severity::Fatal));
    }
}
