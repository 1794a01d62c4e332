//! Immutable log record for a single observed transition.

use super::color::DisplayColor;
use super::kind::TransitionKind;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Default `strftime` pattern for record timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Record of one observed transition.
///
/// Records are created once and never mutated. The display color is
/// always derived from the kind, so it cannot disagree with it.
///
/// # Example
///
/// ```rust
/// use lifelog::core::{DisplayColor, LogRecord, TransitionKind};
///
/// let record = LogRecord::new(TransitionKind::Paused);
/// assert_eq!(record.kind(), TransitionKind::Paused);
/// assert_eq!(record.color(), DisplayColor::Orange);
/// assert_eq!(record.timestamp_label().len(), 8); // HH:MM:SS
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct LogRecord {
    timestamp: DateTime<Local>,
    kind: TransitionKind,
    color: DisplayColor,
}

/// Serialized form read back into a [`LogRecord`]. A stored `color` is
/// ignored and rederived from the kind.
#[derive(Deserialize)]
struct StoredRecord {
    timestamp: DateTime<Local>,
    kind: TransitionKind,
}

impl From<StoredRecord> for LogRecord {
    fn from(stored: StoredRecord) -> Self {
        Self::at(stored.kind, stored.timestamp)
    }
}

impl LogRecord {
    /// Record `kind` as happening now.
    pub fn new(kind: TransitionKind) -> Self {
        Self::at(kind, Local::now())
    }

    /// Record `kind` at an explicit wall-clock time.
    pub fn at(kind: TransitionKind, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            kind,
            color: kind.color(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn color(&self) -> DisplayColor {
        self.color
    }

    /// Event name, e.g. `ON_START`.
    pub fn event_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Timestamp as `HH:MM:SS`.
    pub fn timestamp_label(&self) -> String {
        self.format_timestamp(DEFAULT_TIMESTAMP_FORMAT)
    }

    /// Timestamp rendered with a `strftime` pattern.
    ///
    /// An unparseable pattern renders with [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn format_timestamp(&self, pattern: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.timestamp.format(pattern)).is_err() {
            out.clear();
            // The default pattern is known to parse.
            let _ = write!(out, "{}", self.timestamp.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        out
    }
}

/// True if every specifier in `pattern` is understood by the formatter.
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
