//! Newest-first record history.
//!
//! Provides immutable tracking of observed transitions over time,
//! following functional programming principles.

use super::kind::TransitionKind;
use super::record::LogRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered history of log records, newest first.
///
/// History is immutable - the `record` method returns a new history
/// with the record prepended.
///
/// # Example
///
/// ```rust
/// use lifelog::core::{LogRecord, RecordHistory, TransitionKind};
///
/// let history = RecordHistory::new()
///     .record(LogRecord::new(TransitionKind::Created))
///     .record(LogRecord::new(TransitionKind::Started));
///
/// let kinds: Vec<_> = history.iter().map(|r| r.kind()).collect();
/// assert_eq!(kinds, vec![TransitionKind::Started, TransitionKind::Created]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct RecordHistory {
    records: Vec<LogRecord>,
    limit: Option<usize>,
}

/// Serialized form read back into a [`RecordHistory`]. The limit is clamped
/// as in [`RecordHistory::with_capacity_limit`] and records past it are
/// dropped, oldest first.
#[derive(Deserialize)]
struct StoredHistory {
    records: Vec<LogRecord>,
    limit: Option<usize>,
}

impl From<StoredHistory> for RecordHistory {
    fn from(stored: StoredHistory) -> Self {
        let limit = stored.limit.map(|limit| limit.max(1));
        let mut records = stored.records;
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        Self { records, limit }
    }
}

impl RecordHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// Once full, recording drops the oldest record. A limit of zero is
    /// treated as one so the newest record is always visible.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a new entry, returning a new history.
    ///
    /// This is a pure function - the existing history is left untouched and
    /// the returned one has `record` at index 0.
    ///
    /// Each call copies the retained records, so recording is O(n) in the
    /// history length. Set a limit to bound it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lifelog::core::{LogRecord, RecordHistory, TransitionKind};
    ///
    /// let history = RecordHistory::new();
    /// let new_history = history.record(LogRecord::new(TransitionKind::Created));
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: LogRecord) -> Self {
        let keep = match self.limit {
            Some(limit) => self.records.len().min(limit.saturating_sub(1)),
            None => self.records.len(),
        };
        let mut records = Vec::with_capacity(keep + 1);
        records.push(record);
        records.extend_from_slice(&self.records[..keep]);
        Self {
            records,
            limit: self.limit,
        }
    }

    /// All records, newest first.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn newest(&self) -> Option<&LogRecord> {
        self.records.first()
    }

    pub fn oldest(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of retained records of the given kind.
    pub fn count_of(&self, kind: TransitionKind) -> usize {
        self.records.iter().filter(|r| r.kind() == kind).count()
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if the history is empty. Wall-clock adjustments that
    /// put the newest record before the oldest also yield `None`.
    pub fn span(&self) -> Option<Duration> {
        let (newest, oldest) = (self.newest()?, self.oldest()?);
        newest
            .timestamp()
            .signed_duration_since(oldest.timestamp())
            .to_std()
            .ok()
    }
}

impl<'a> IntoIterator for &'a RecordHistory {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn new_history_is_empty() {
        let history = RecordHistory::new();
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
        assert!(history.newest().is_none());
        assert!(history.span().is_none());
        assert_eq!(history.limit(), None);
    }

    #[test]
    fn record_prepends() {
        let history = RecordHistory::new()
            .record(LogRecord::new(TransitionKind::Created))
            .record(LogRecord::new(TransitionKind::Started));

        assert_eq!(history.len(), 2);
        assert_eq!(history.newest().unwrap().kind(), TransitionKind::Started);
        assert_eq!(history.oldest().unwrap().kind(), TransitionKind::Created);
    }

    #[test]
    fn record_is_immutable() {
        let history = RecordHistory::new().record(LogRecord::new(TransitionKind::Created));
        let new_history = history.record(LogRecord::new(TransitionKind::Started));

        assert_eq!(history.len(), 1);
        assert_eq!(history.newest().unwrap().kind(), TransitionKind::Created);
        assert_eq!(new_history.len(), 2);
    }

    #[test]
    fn existing_records_are_not_touched() {
        let first = LogRecord::new(TransitionKind::Created);
        let history = RecordHistory::new().record(first.clone());
        let history = history.record(LogRecord::new(TransitionKind::Started));
        assert_eq!(history.records()[1], first);
    }

    #[test]
    fn capacity_limit_drops_oldest() {
        let mut history = RecordHistory::with_capacity_limit(3);
        for kind in [
            TransitionKind::Created,
            TransitionKind::Started,
            TransitionKind::Resumed,
            TransitionKind::Paused,
        ] {
            history = history.record(LogRecord::new(kind));
        }

        let kinds: Vec<_> = history.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TransitionKind::Paused,
                TransitionKind::Resumed,
                TransitionKind::Started
            ]
        );
    }

    #[test]
    fn zero_limit_keeps_newest() {
        let history = RecordHistory::with_capacity_limit(0)
            .record(LogRecord::new(TransitionKind::Created))
            .record(LogRecord::new(TransitionKind::Started));
        assert_eq!(history.len(), 1);
        assert_eq!(history.newest().unwrap().kind(), TransitionKind::Started);
    }

    #[test]
    fn count_of_counts_by_kind() {
        let history = RecordHistory::new()
            .record(LogRecord::new(TransitionKind::Resumed))
            .record(LogRecord::new(TransitionKind::Paused))
            .record(LogRecord::new(TransitionKind::Resumed));
        assert_eq!(history.count_of(TransitionKind::Resumed), 2);
        assert_eq!(history.count_of(TransitionKind::Paused), 1);
        assert_eq!(history.count_of(TransitionKind::Destroyed), 0);
    }

    #[test]
    fn span_calculates_elapsed_time() {
        let start = Local::now();
        let history = RecordHistory::new().record(LogRecord::at(TransitionKind::Created, start));

        assert_eq!(history.span(), Some(Duration::from_secs(0)));

        let later = start + chrono::Duration::milliseconds(250);
        let history = history.record(LogRecord::at(TransitionKind::Started, later));
        assert_eq!(history.span(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn stored_limit_is_clamped_and_enforced() {
        let full = RecordHistory::new()
            .record(LogRecord::new(TransitionKind::Created))
            .record(LogRecord::new(TransitionKind::Started))
            .record(LogRecord::new(TransitionKind::Resumed));
        let json = serde_json::to_string(&full)
            .unwrap()
            .replace("\"limit\":null", "\"limit\":0");

        let loaded: RecordHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.limit(), Some(1));
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.newest().unwrap().kind(), TransitionKind::Resumed);

        let next = loaded.record(LogRecord::new(TransitionKind::Paused));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = RecordHistory::new()
            .record(LogRecord::new(TransitionKind::Created))
            .record(LogRecord::new(TransitionKind::Started));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: RecordHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
