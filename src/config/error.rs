//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading tracker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong shape
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}
