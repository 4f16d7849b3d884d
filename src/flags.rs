//! Formatting flags shared by the decorator and the line formatter.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bits OR'ed together to control what is printed around each message.
    ///
    /// The order of the header fields is fixed (prefix, date, time, file,
    /// message). For example `DATE | TIME` produces
    ///
    /// ```text
    /// 2009/01/23 01:23:23 message
    /// ```
    ///
    /// while `DATE | TIME | MICROSECONDS | LONG_FILE` produces
    ///
    /// ```text
    /// 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
    /// ```
    ///
    /// `LABEL` and `COLOR` only affect the message itself and are handled by
    /// [`crate::decorate`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flags: u32 {
        /// The date in the local time zone: 2009/01/23
        const DATE = 1 << 0;
        /// The time in the local time zone: 01:23:23
        const TIME = 1 << 1;
        /// Microsecond resolution: 01:23:23.123123. Assumes TIME.
        const MICROSECONDS = 1 << 2;
        /// Full file name and line number: /a/b/c/d.rs:23
        const LONG_FILE = 1 << 3;
        /// Final file name element and line number: d.rs:23. Overrides LONG_FILE.
        const SHORT_FILE = 1 << 4;
        /// With DATE or TIME, use UTC rather than the local time zone.
        const UTC = 1 << 5;
        /// Bracketed severity label: [DEBUG], [ERROR], ...
        const LABEL = 1 << 6;
        /// ANSI colored label and message. Needs LABEL.
        const COLOR = 1 << 7;
        /// Initial flags of the default logger.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Flags {
    /// True when any timestamp component is printed.
    pub fn has_timestamp(self) -> bool {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    /// True when the caller location is printed.
    pub fn has_location(self) -> bool {
        self.intersects(Flags::SHORT_FILE | Flags::LONG_FILE)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_is_date_and_time() {
        assert_eq!(Flags::STD, Flags::DATE | Flags::TIME);
        assert_eq!(Flags::default().bits(), 0b11);
    }

    #[test]
    fn bit_values_are_stable() {
        assert_eq!(Flags::UTC.bits(), 32);
        assert_eq!(Flags::LABEL.bits(), 64);
        assert_eq!(Flags::COLOR.bits(), 128);
    }

    #[test]
    fn parses_text_form() {
        let flags = bitflags::parser::from_str::<Flags>("DATE | TIME | LABEL").unwrap();
        assert_eq!(flags, Flags::STD | Flags::LABEL);
    }
}
