//! JSON-file-backed review source
//!
//! Directory structure under the data dir:
//! ```text
//! reviews/
//! ├── reviews.json   # Array of review-log entries
//! └── tags.json      # Array of tags in use
//! ```
//!
//! The host application maintains the files through the write helpers;
//! the analytics core only ever reads through the [`ReviewSource`]
//! implementation, which filters entries down to standard reviews.

use std::fs;
use std::path::PathBuf;

use super::models::{ReviewKind, ReviewLogEntry, ReviewRecord};
use super::{ReviewSource, SourceError};

type Result<T> = std::result::Result<T, SourceError>;

/// File-backed store for review logs and the tag universe
pub struct FileReviewStore {
    reviews_dir: PathBuf,
}

impl FileReviewStore {
    /// Create a store rooted at `data_dir`, ensuring the directory exists
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let reviews_dir = data_dir.join("reviews");
        fs::create_dir_all(&reviews_dir)?;

        Ok(Self { reviews_dir })
    }

    fn reviews_file(&self) -> PathBuf {
        self.reviews_dir.join("reviews.json")
    }

    fn tags_file(&self) -> PathBuf {
        self.reviews_dir.join("tags.json")
    }

    /// List every stored entry, regardless of kind
    pub fn list_entries(&self) -> Result<Vec<ReviewLogEntry>> {
        let path = self.reviews_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let entries: Vec<ReviewLogEntry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    /// Append a review-log entry
    pub fn append_review(&self, entry: ReviewLogEntry) -> Result<()> {
        let mut entries = self.list_entries()?;
        entries.push(entry);
        self.save_entries(&entries)
    }

    /// Replace the stored tag universe
    pub fn replace_tags(&self, tags: &[String]) -> Result<()> {
        let json = serde_json::to_string_pretty(tags)?;
        fs::write(self.tags_file(), json)?;
        Ok(())
    }

    fn save_entries(&self, entries: &[ReviewLogEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(self.reviews_file(), json)?;
        Ok(())
    }
}

impl ReviewSource for FileReviewStore {
    fn fetch_review_logs(&self) -> Result<Vec<ReviewRecord>> {
        let entries = self.list_entries()?;
        Ok(entries
            .iter()
            .filter(|e| e.kind == ReviewKind::Review)
            .map(|e| e.to_record())
            .collect())
    }

    fn fetch_all_tags(&self) -> Result<Vec<String>> {
        let path = self.tags_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let tags: Vec<String> = serde_json::from_str(&content)?;
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileReviewStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileReviewStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_empty_store_reads_empty() {
        let (store, _temp) = create_test_store();

        assert!(store.list_entries().unwrap().is_empty());
        assert!(store.fetch_review_logs().unwrap().is_empty());
        assert!(store.fetch_all_tags().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_fetch_reviews() {
        let (store, _temp) = create_test_store();

        store
            .append_review(ReviewLogEntry::new(
                1000,
                3,
                ReviewKind::Review,
                Some("Foo::Bar".to_string()),
            ))
            .unwrap();
        store
            .append_review(ReviewLogEntry::new(2000, 1, ReviewKind::Review, None))
            .unwrap();

        let records = store.fetch_review_logs().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp_ms, 1000);
        assert_eq!(records[0].tags.as_deref(), Some("Foo::Bar"));
        assert!(!records[1].passed());
    }

    #[test]
    fn test_non_review_entries_filtered_out() {
        let (store, _temp) = create_test_store();

        store
            .append_review(ReviewLogEntry::new(1000, 3, ReviewKind::Learning, None))
            .unwrap();
        store
            .append_review(ReviewLogEntry::new(2000, 3, ReviewKind::Review, None))
            .unwrap();
        store
            .append_review(ReviewLogEntry::new(3000, 3, ReviewKind::Cram, None))
            .unwrap();

        // All entries stored, only the standard review served
        assert_eq!(store.list_entries().unwrap().len(), 3);
        let records = store.fetch_review_logs().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp_ms, 2000);
    }

    #[test]
    fn test_replace_and_fetch_tags() {
        let (store, _temp) = create_test_store();

        let tags = vec!["A".to_string(), "A::B".to_string()];
        store.replace_tags(&tags).unwrap();
        assert_eq!(store.fetch_all_tags().unwrap(), tags);

        store.replace_tags(&["C".to_string()]).unwrap();
        assert_eq!(store.fetch_all_tags().unwrap(), vec!["C".to_string()]);
    }
}
