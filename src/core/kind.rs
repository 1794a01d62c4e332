//! Lifecycle transition kinds.
//!
//! The set of events an event source can emit is closed: seven kinds,
//! never extended at runtime.

use super::color::DisplayColor;
use super::lifecycle::LifecycleState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A lifecycle transition emitted by an event source.
///
/// # Example
///
/// ```rust
/// use lifelog::core::{DisplayColor, LifecycleState, TransitionKind};
///
/// let kind: TransitionKind = "ON_RESUME".parse().unwrap();
/// assert_eq!(kind, TransitionKind::Resumed);
/// assert_eq!(kind.color(), DisplayColor::Cyan);
/// assert_eq!(kind.target_state(), Some(LifecycleState::Resumed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TransitionKind {
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
    Any,
}

/// Returned when parsing a name that is not one of the seven kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown transition kind '{0}'")]
pub struct UnknownTransition(pub String);

impl TransitionKind {
    /// Every kind, in declaration order.
    pub const ALL: [TransitionKind; 7] = [
        Self::Created,
        Self::Started,
        Self::Resumed,
        Self::Paused,
        Self::Stopped,
        Self::Destroyed,
        Self::Any,
    ];

    /// Event name as reported by the platform.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "ON_CREATE",
            Self::Started => "ON_START",
            Self::Resumed => "ON_RESUME",
            Self::Paused => "ON_PAUSE",
            Self::Stopped => "ON_STOP",
            Self::Destroyed => "ON_DESTROY",
            Self::Any => "ON_ANY",
        }
    }

    /// Display color for this kind. Total: every kind has exactly one color.
    pub fn color(&self) -> DisplayColor {
        match self {
            Self::Created => DisplayColor::Green,
            Self::Started => DisplayColor::Blue,
            Self::Resumed => DisplayColor::Cyan,
            Self::Paused => DisplayColor::Orange,
            Self::Stopped => DisplayColor::Red,
            Self::Destroyed => DisplayColor::Grey,
            Self::Any => DisplayColor::Purple,
        }
    }

    /// State a component is in right after this event.
    ///
    /// `Any` matches every event and moves nowhere, so it has no target.
    pub fn target_state(&self) -> Option<LifecycleState> {
        match self {
            Self::Created | Self::Stopped => Some(LifecycleState::Created),
            Self::Started | Self::Paused => Some(LifecycleState::Started),
            Self::Resumed => Some(LifecycleState::Resumed),
            Self::Destroyed => Some(LifecycleState::Destroyed),
            Self::Any => None,
        }
    }

    /// Event that moves a component from the state below `state` up into it.
    pub fn up_to(state: LifecycleState) -> Option<Self> {
        match state {
            LifecycleState::Created => Some(Self::Created),
            LifecycleState::Started => Some(Self::Started),
            LifecycleState::Resumed => Some(Self::Resumed),
            LifecycleState::Destroyed | LifecycleState::Initialized => None,
        }
    }

    /// Event that moves a component one step down out of `state`.
    pub fn down_from(state: LifecycleState) -> Option<Self> {
        match state {
            LifecycleState::Created => Some(Self::Destroyed),
            LifecycleState::Started => Some(Self::Stopped),
            LifecycleState::Resumed => Some(Self::Paused),
            LifecycleState::Destroyed | LifecycleState::Initialized => None,
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransitionKind {
    type Err = UnknownTransition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownTransition(s.to_string()))
    }
}

/// Color for an event given by name, falling back to [`DisplayColor::FALLBACK`]
/// when the name is not a known kind.
pub fn color_for_name(name: &str) -> DisplayColor {
    name.parse::<TransitionKind>()
        .map(|kind| kind.color())
        .unwrap_or(DisplayColor::FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_match_platform_events() {
        assert_eq!(TransitionKind::Created.name(), "ON_CREATE");
        assert_eq!(TransitionKind::Started.name(), "ON_START");
        assert_eq!(TransitionKind::Resumed.name(), "ON_RESUME");
        assert_eq!(TransitionKind::Paused.name(), "ON_PAUSE");
        assert_eq!(TransitionKind::Stopped.name(), "ON_STOP");
        assert_eq!(TransitionKind::Destroyed.name(), "ON_DESTROY");
        assert_eq!(TransitionKind::Any.name(), "ON_ANY");
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let colors: HashSet<_> = TransitionKind::ALL.iter().map(|k| k.color()).collect();
        assert_eq!(colors.len(), TransitionKind::ALL.len());
    }

    #[test]
    fn destroyed_is_grey() {
        assert_eq!(TransitionKind::Destroyed.color(), DisplayColor::Grey);
        for kind in TransitionKind::ALL {
            if kind != TransitionKind::Destroyed {
                assert_ne!(kind.color(), DisplayColor::Grey);
            }
        }
    }

    #[test]
    fn parse_accepts_display_names() {
        for kind in TransitionKind::ALL {
            assert_eq!(kind.to_string().parse::<TransitionKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "ON_TELEPORT".parse::<TransitionKind>().unwrap_err();
        assert_eq!(err, UnknownTransition("ON_TELEPORT".to_string()));
        assert_eq!(err.to_string(), "Unknown transition kind 'ON_TELEPORT'");
    }

    #[test]
    fn unknown_name_gets_fallback_color() {
        assert_eq!(color_for_name("ON_START"), DisplayColor::Blue);
        assert_eq!(color_for_name("bogus"), DisplayColor::FALLBACK);
    }

    #[test]
    fn down_events_target_the_state_below() {
        for state in [
            LifecycleState::Created,
            LifecycleState::Started,
            LifecycleState::Resumed,
        ] {
            let up = TransitionKind::up_to(state).unwrap();
            assert_eq!(up.target_state(), Some(state));

            let down = TransitionKind::down_from(state).unwrap();
            assert!(down.target_state().unwrap() < state);
        }
    }

    #[test]
    fn any_has_no_target() {
        assert_eq!(TransitionKind::Any.target_state(), None);
    }
}
