//! Presentation errors.

use thiserror::Error;

/// Reasons a transient notification could not be shown.
///
/// These never reach the store; the presenter logs and counts them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Notification surface is busy")]
    Busy,

    #[error("Notification surface unavailable: {0}")]
    Unavailable(String),
}
