//! Tracker configuration.
//!
//! Values are layered with figment: built-in defaults, then an optional TOML
//! file, then `LIFELOG_`-prefixed environment variables.
//!
//! ```toml
//! notify_on_transition = false
//! max_records = 500
//! timestamp_format = "%H:%M:%S%.3f"
//! ```

use crate::core::{is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;

pub use error::ConfigError;

/// Prefix for environment overrides, e.g. `LIFELOG_MAX_RECORDS=200`.
pub const ENV_PREFIX: &str = "LIFELOG_";

/// Settings for a log store session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Initial value of the notify-on-transition flag
    pub notify_on_transition: bool,

    /// Retain at most this many records; `None` keeps everything
    pub max_records: Option<usize>,

    /// `strftime` pattern for rendered timestamps
    pub timestamp_format: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            notify_on_transition: true,
            max_records: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Figment with defaults and environment overrides, plus `path` if given.
    ///
    /// A missing file is not an error; figment skips it.
    pub fn figment(path: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(TrackerConfig::default()));
        let figment = match path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment,
        };
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: TrackerConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_records == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_records",
                reason: "must be greater than zero when set".into(),
            });
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "timestamp_format",
                reason: "must not be empty".into(),
            });
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(ConfigError::Invalid {
                field: "timestamp_format",
                reason: format!("'{}' is not a valid strftime pattern", self.timestamp_format),
            });
        }
        Ok(())
    }
}
