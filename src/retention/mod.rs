//! Retention analytics over the tag tree
//!
//! This module provides:
//! - Pass-ratio aggregation for a tag subtree
//! - Hour-of-day performance bucketing
//! - Tag tree navigation backed by a review source
//! - Recursive search for the weakest-performing branch

pub mod analyzer;
pub mod models;

pub use analyzer::{RetentionAnalyzer, MAX_DESCENT_DEPTH, MIN_SAMPLE_COUNT};
pub use models::*;
