//! Event source errors.

use crate::core::LifecycleState;
use thiserror::Error;

/// Errors raised by an event source.
///
/// Registering the same observer twice, or removing one that is already
/// gone, is never an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Event source already has a different observer registered")]
    AlreadyObserved,

    #[error("Component is destroyed and cannot move to {to}")]
    Destroyed { to: LifecycleState },

    #[error("Cannot move component from {from} to {to}")]
    IllegalTarget {
        from: LifecycleState,
        to: LifecycleState,
    },
}
