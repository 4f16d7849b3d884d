//! Formatted logging macros.
//!
//! Each macro takes `format!`-style arguments and logs to the process default
//! logger, or to an explicit logger when the arguments start with
//! `logger =>`:
//!
//! ```no_run
//! use lvlog::{warnf, Flags, Logger};
//!
//! warnf!("disk {}% full", 91);
//!
//! let logger = Logger::new(std::io::stdout(), "db: ", Flags::LABEL);
//! warnf!(logger => "slow query took {}ms", 1200);
//! ```

#[macro_export]
macro_rules! fatalf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::fatalf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! panicf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.panicf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::panicf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr => $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}

/// Info-level alias of [`infof!`].
#[macro_export]
macro_rules! printf {
    ($logger:expr => $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global::printf(::std::format_args!($($arg)+))
    };
}
