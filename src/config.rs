//! # Logger Configuration
//!
//! Loggers can be built from a small TOML file instead of code:
//!
//! ```toml
//! level = "info"
//! flags = "DATE | TIME | LABEL | COLOR"
//! prefix = "worker: "
//!
//! [output]
//! kind = "file"
//! path = "/var/log/worker.log"
//! append = true
//! ```
//!
//! Every field is optional; missing fields take the values of the process
//! default logger (threshold `error`, flags `DATE | TIME`, no prefix, stderr).
//!
//! ## Storage Location
//!
//! [`LoggerConfig::load`] and [`LoggerConfig::save`] use the platform config
//! directory:
//!
//! - **Windows**: `%APPDATA%\lvlog\config.toml`
//! - **macOS**: `~/Library/Application Support/lvlog/config.toml`
//! - **Linux**: `~/.config/lvlog/config.toml`
//!
//! ## Environment
//!
//! `LVLOG_LEVEL` (a severity name or digit `0`-`5`) overrides `level`; see
//! [`LoggerConfig::with_env_overrides`].

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LEVEL_ENV_VAR};
use crate::error::ConfigError;
use crate::flags::Flags;
use crate::logger::Logger;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Destination of the log lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputConfig {
    #[default]
    Stderr,
    Stdout,
    File {
        path: PathBuf,
        /// Append to an existing file instead of truncating it
        #[serde(default = "default_append")]
        append: bool,
    },
}

fn default_append() -> bool {
    true
}

/// Serializable description of a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold: messages more verbose than this are dropped
    pub level: Severity,

    /// Header and decoration flags, in `"DATE | TIME"` form
    pub flags: Flags,

    /// Text written at the start of every line
    pub prefix: String,

    pub output: OutputConfig,
}

impl Default for LoggerConfig {
    /// Matches the process default logger.
    fn default() -> Self {
        Self {
            level: Severity::DEFAULT,
            flags: Flags::STD,
            prefix: String::new(),
            output: OutputConfig::Stderr,
        }
    }
}

impl LoggerConfig {
    /// Load configuration from the platform config directory.
    ///
    /// Never fails: a missing file yields the defaults, an unreadable or
    /// corrupt file is reported through `tracing` and also yields the defaults.
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Failed to get config path: {}", e);
                return Self::default();
            }
        };

        if !path.exists() {
            debug!("No logger configuration at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load logger configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file, reporting every failure.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to the platform config directory.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write pretty-printed TOML to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| ConfigError::io(path, e))?;

        debug!("Logger configuration saved to: {}", path.display());
        Ok(())
    }

    /// `<config dir>/lvlog/config.toml`
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Apply `LVLOG_LEVEL` from the environment, if set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match std::env::var(LEVEL_ENV_VAR) {
            Ok(value) => self.with_level_override(&value),
            Err(_) => Ok(self),
        }
    }

    /// Replace the threshold with a severity name or digit.
    pub fn with_level_override(mut self, value: &str) -> Result<Self, ConfigError> {
        self.level = value
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(value.to_string()))?;
        Ok(self)
    }

    /// Open the configured destination.
    pub fn open_output(&self) -> Result<Box<dyn Write + Send>, ConfigError> {
        match &self.output {
            OutputConfig::Stderr => Ok(Box::new(io::stderr())),
            OutputConfig::Stdout => Ok(Box::new(io::stdout())),
            OutputConfig::File { path, append } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .append(*append)
                    .truncate(!*append)
                    .open(path)
                    .map_err(|e| ConfigError::io(path, e))?;
                Ok(Box::new(file))
            }
        }
    }

    /// Build a new logger from this configuration.
    pub fn build(&self) -> Result<Logger, ConfigError> {
        let out = self.open_output()?;
        let logger = Logger::new(out, self.prefix.clone(), self.flags);
        logger.set_level(self.level);
        Ok(logger)
    }

    /// Reconfigure an existing logger, e.g. the process default one.
    ///
    /// The sink is opened before anything is changed, so on error the logger
    /// keeps its previous configuration. All settings switch under one lock.
    pub fn apply(&self, logger: &Logger) -> Result<(), ConfigError> {
        let out = self.open_output()?;
        logger.reconfigure(out, self.prefix.clone(), self.flags, self.level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = LoggerConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn file_output_defaults_to_append() {
        let config = LoggerConfig::from_toml_str(
            r#"
            [output]
            kind = "file"
            path = "app.log"
            "#,
        )
        .expect("file output parses");
        assert_eq!(
            config.output,
            OutputConfig::File {
                path: PathBuf::from("app.log"),
                append: true
            }
        );
    }
}
