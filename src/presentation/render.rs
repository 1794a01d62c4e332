//! Plain-text rendering of store state.

use crate::core::{DisplayColor, LifecycleState, RecordHistory};
use serde::Serialize;
use std::fmt;

/// One rendered log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub swatch: DisplayColor,
    pub timestamp: String,
    pub event: &'static str,
}

/// Everything a view needs to draw the tracker screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub current_state: LifecycleState,
    pub notify_on_transition: bool,
    /// Newest first
    pub rows: Vec<RenderedRow>,
}

impl Screen {
    pub fn build(
        current_state: LifecycleState,
        notify_on_transition: bool,
        history: &RecordHistory,
        timestamp_format: &str,
    ) -> Self {
        let rows = history
            .iter()
            .map(|record| RenderedRow {
                swatch: record.color(),
                timestamp: record.format_timestamp(timestamp_format),
                event: record.event_name(),
            })
            .collect();

        Self {
            current_state,
            notify_on_transition,
            rows,
        }
    }

    pub fn header(&self) -> String {
        format!("Current State: {}", self.current_state)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        let toggle = if self.notify_on_transition { "x" } else { " " };
        writeln!(f, "[{toggle}] Notify on transition")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} {} {}",
                row.swatch.hex(),
                row.timestamp,
                row.event
            )?;
        }
        Ok(())
    }
}
