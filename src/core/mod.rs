//! Core data model for lifecycle logging.
//!
//! This module contains the pure part of the crate:
//! - The closed set of transition kinds and their lifecycle targets
//! - The fixed kind-to-color palette
//! - Immutable log records and the newest-first history
//!
//! Nothing here performs I/O or holds shared state.

mod color;
mod history;
mod kind;
mod lifecycle;
mod record;

pub use color::DisplayColor;
pub use history::RecordHistory;
pub use kind::{color_for_name, TransitionKind, UnknownTransition};
pub use lifecycle::LifecycleState;
pub use record::{is_valid_timestamp_format, LogRecord, DEFAULT_TIMESTAMP_FORMAT};
