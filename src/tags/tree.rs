//! Tag tree navigation

use std::collections::BTreeSet;

use super::TAG_SEPARATOR;

/// Find the immediate child tags of `parent` within the tag universe.
///
/// A multi-level descendant like `A::B::C` collapses to its first
/// segment under the parent, so querying `A` yields `A::B`. The result
/// is deduplicated and lexicographically sorted.
pub fn direct_children(parent: &str, universe: &[String]) -> Vec<String> {
    let prefix = format!("{}{}", parent, TAG_SEPARATOR);
    let mut children = BTreeSet::new();

    for tag in universe {
        if let Some(remainder) = tag.strip_prefix(&prefix) {
            match remainder.split(TAG_SEPARATOR).next() {
                Some(segment) if !segment.is_empty() => {
                    children.insert(format!("{}{}", prefix, segment));
                }
                _ => {}
            }
        }
    }

    children.into_iter().collect()
}

/// Check whether any tag in the universe nests under `tag`.
///
/// Short-circuits on the first hit; used to decide whether a tree node
/// is expandable at all.
pub fn has_descendants(tag: &str, universe: &[String]) -> bool {
    let prefix = format!("{}{}", tag, TAG_SEPARATOR);
    universe.iter().any(|t| t.starts_with(&prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_direct_children_collapses_grandchildren() {
        let tags = universe(&["A::B", "A::B::C", "A::D"]);
        assert_eq!(direct_children("A", &tags), vec!["A::B", "A::D"]);
    }

    #[test]
    fn test_direct_children_sorted_and_deduplicated() {
        let tags = universe(&["A::Z", "A::B::X", "A::B::Y", "A::B", "A::Z"]);
        assert_eq!(direct_children("A", &tags), vec!["A::B", "A::Z"]);
    }

    #[test]
    fn test_direct_children_of_nested_parent() {
        let tags = universe(&["A::B::C", "A::B::D::E", "A::F"]);
        assert_eq!(direct_children("A::B", &tags), vec!["A::B::C", "A::B::D"]);
    }

    #[test]
    fn test_direct_children_none() {
        let tags = universe(&["A", "B::C"]);
        assert!(direct_children("A", &tags).is_empty());
    }

    #[test]
    fn test_direct_children_ignores_sibling_prefix() {
        // "AB::C" does not nest under "A"
        let tags = universe(&["AB::C", "A::D"]);
        assert_eq!(direct_children("A", &tags), vec!["A::D"]);
    }

    #[test]
    fn test_has_descendants() {
        let tags = universe(&["A::B", "A::B::C", "A::D"]);
        assert!(has_descendants("A", &tags));
        assert!(has_descendants("A::B", &tags));
        assert!(!has_descendants("A::D", &tags));
        assert!(!has_descendants("B", &tags));
    }
}
