//! Tag hierarchy primitives
//!
//! Tags nest via the `::` delimiter (`Bootcamp::Anatomy::Bones`); a tag
//! is simultaneously a leaf label and a path into the tree. This module
//! decides whether a review record belongs to a tag subtree and
//! navigates parent/child relationships within the tag universe.

mod matcher;
mod tree;

pub use matcher::tag_matches;
pub use tree::{direct_children, has_descendants};

/// Delimiter between tag path segments
pub const TAG_SEPARATOR: &str = "::";
