//! Mneme — retention analytics for hierarchical tag trees
//!
//! Scans spaced-repetition review logs, classifies each record by its
//! membership in a `::`-delimited tag hierarchy, and answers the
//! questions a drill-down dashboard asks: how well a tag subtree is
//! retained, how performance varies by hour of day, and which branch
//! beneath a chosen root is the weakest.
//!
//! The core is stateless: every call re-reads the record set from an
//! injected [`ReviewSource`] and derives its result from scratch.
//! Rendering (trees, graphs, dialogs) belongs to the host application.

pub mod retention;
pub mod source;
pub mod tags;

pub use retention::{
    ChildStats, HourBucket, HourlyStats, RetentionAnalyzer, RetentionResult, TagReport, WeakSpot,
    MAX_DESCENT_DEPTH, MIN_SAMPLE_COUNT,
};
pub use source::{
    FileReviewStore, MemorySource, ReviewKind, ReviewLogEntry, ReviewRecord, ReviewSource,
    SourceError,
};
pub use tags::{direct_children, has_descendants, tag_matches, TAG_SEPARATOR};
