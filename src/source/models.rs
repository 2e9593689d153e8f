//! Data models for review-log records

use serde::{Deserialize, Serialize};

/// Kind of review session that produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewKind {
    /// Initial learning step
    Learning,
    /// Standard spaced review
    Review,
    /// Re-learning after a lapse
    Relearning,
    /// Cram session outside the schedule
    Cram,
}

impl Default for ReviewKind {
    fn default() -> Self {
        Self::Review
    }
}

/// A single review attempt as the analytics core sees it
///
/// Immutable, supplied in bulk by the data source. The timestamp
/// doubles as the record's unique id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Review time in milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    /// Outcome code: 1 = failed recall, any higher value = pass at some grade
    pub ease: i32,
    /// Raw whitespace-delimited tag string of the reviewed note, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl ReviewRecord {
    pub fn new(timestamp_ms: i64, ease: i32, tags: Option<String>) -> Self {
        Self {
            timestamp_ms,
            ease,
            tags,
        }
    }

    /// Whether this attempt was a successful recall
    pub fn passed(&self) -> bool {
        self.ease > 1
    }
}

/// A stored review-log entry as the host application writes it
///
/// Unlike [`ReviewRecord`], entries carry their [`ReviewKind`]; the
/// store serves only `Review` entries to the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLogEntry {
    /// Review time in milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    /// Outcome code, same scale as [`ReviewRecord::ease`]
    pub ease: i32,
    #[serde(default)]
    pub kind: ReviewKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl ReviewLogEntry {
    pub fn new(timestamp_ms: i64, ease: i32, kind: ReviewKind, tags: Option<String>) -> Self {
        Self {
            timestamp_ms,
            ease,
            kind,
            tags,
        }
    }

    /// Strip the entry down to the record shape the core consumes
    pub fn to_record(&self) -> ReviewRecord {
        ReviewRecord {
            timestamp_ms: self.timestamp_ms,
            ease: self.ease,
            tags: self.tags.clone(),
        }
    }
}
