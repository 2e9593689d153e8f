//! Review-log data sources
//!
//! The analytics core never reaches into ambient application state: it
//! is handed a [`ReviewSource`], a read-only view of the host's review
//! logs and tag universe. This module provides the trait, the record
//! models, an in-memory source for fixtures and embedders, and a
//! JSON-file-backed store.

pub mod memory;
pub mod models;
pub mod store;

pub use memory::MemorySource;
pub use models::*;
pub use store::FileReviewStore;

use thiserror::Error;

/// Errors surfaced when a data source cannot be read or written
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only handle to the host application's review data.
///
/// Both methods return unordered data with no uniqueness guarantee;
/// consumers deduplicate where needed. The analytics layer queries a
/// source afresh on every call, so implementations should always serve
/// current data rather than a stale snapshot.
pub trait ReviewSource {
    /// All standard review-log records, unordered.
    fn fetch_review_logs(&self) -> Result<Vec<ReviewRecord>, SourceError>;

    /// Every tag currently in use, unordered.
    fn fetch_all_tags(&self) -> Result<Vec<String>, SourceError>;
}
