//! In-memory review source

use super::models::ReviewRecord;
use super::{ReviewSource, SourceError};

/// A [`ReviewSource`] backed by vectors already in memory.
///
/// Useful for tests and for embedders that hold their review data in
/// process rather than on disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<ReviewRecord>,
    tags: Vec<String>,
}

impl MemorySource {
    pub fn new(records: Vec<ReviewRecord>, tags: Vec<String>) -> Self {
        Self { records, tags }
    }
}

impl ReviewSource for MemorySource {
    fn fetch_review_logs(&self) -> Result<Vec<ReviewRecord>, SourceError> {
        Ok(self.records.clone())
    }

    fn fetch_all_tags(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.tags.clone())
    }
}
