//! Lifecycle states reported by an event source.
//!
//! States form a ladder; events move a component one rung at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a component on the lifecycle ladder.
///
/// Variants are declared bottom to top, so the derived ordering matches
/// the ladder: `Destroyed < Initialized < Created < Started < Resumed`.
///
/// # Example
///
/// ```rust
/// use lifelog::core::LifecycleState;
///
/// let state = LifecycleState::Started;
/// assert_eq!(state.name(), "STARTED");
/// assert!(state.is_at_least(LifecycleState::Created));
/// assert!(!state.is_at_least(LifecycleState::Resumed));
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum LifecycleState {
    Destroyed,
    #[default]
    Initialized,
    Created,
    Started,
    Resumed,
}

impl LifecycleState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Destroyed => "DESTROYED",
            Self::Initialized => "INITIALIZED",
            Self::Created => "CREATED",
            Self::Started => "STARTED",
            Self::Resumed => "RESUMED",
        }
    }

    /// True if `self` is `other` or above it on the ladder.
    pub fn is_at_least(&self, other: LifecycleState) -> bool {
        *self >= other
    }

    /// A destroyed component never receives further events.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
