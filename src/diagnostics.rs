//! # Diagnostics
//!
//! `lvlog` reports its own problems (unreadable configuration, dropped lines
//! after a failed write, threshold changes) through the `tracing` ecosystem,
//! never through the loggers it manages. The library does not install a
//! subscriber; applications that want those events call
//! [`init_diagnostics`] or install their own.
//!
//! ## Environment Configuration
//!
//! Set `RUST_LOG` to control what is shown:
//! - `RUST_LOG=lvlog=debug` - include level changes and config lookups
//! - `RUST_LOG=warn` - only problems

use crate::constants::DEFAULT_DIAGNOSTICS_FILTER;
use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr `tracing` subscriber for the crate's diagnostics.
///
/// Safe to call more than once; only the first call has an effect. If another
/// global subscriber is already installed it is left in place.
pub fn init_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    static INIT: Lazy<()> = Lazy::new(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIAGNOSTICS_FILTER));

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init();
    });

    Lazy::force(&INIT);
    Ok(())
}
