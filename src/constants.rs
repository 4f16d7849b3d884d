//! # Crate Constants
//!
//! Values shared between the library, the configuration layer and the `lvlog`
//! binary.

/// Exit status used by fatal log calls.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Directory created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "lvlog";

/// Configuration file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configured threshold.
pub const LEVEL_ENV_VAR: &str = "LVLOG_LEVEL";

/// `EnvFilter` directives used for the crate's own diagnostics when `RUST_LOG` is unset.
pub const DEFAULT_DIAGNOSTICS_FILTER: &str = "lvlog=info,warn";
