//! Tag membership matching

use super::TAG_SEPARATOR;

/// Check whether a record's raw tag string places it under `tag` or one
/// of its descendants.
///
/// `raw_tags` is the whitespace-delimited tag string attached to a
/// note. Substring containment is only a cheap pre-filter; the final
/// decision splits the string into whole tokens, so `Math` does not
/// match a note tagged `Mathematics` and `Foo` does not match `FooBar`.
pub fn tag_matches(tag: &str, raw_tags: &str) -> bool {
    // An empty tag would pass the substring pre-filter for every record
    if tag.is_empty() || raw_tags.is_empty() || !raw_tags.contains(tag) {
        return false;
    }

    let prefix = format!("{}{}", tag, TAG_SEPARATOR);
    raw_tags
        .split_whitespace()
        .any(|token| token == tag || token.starts_with(&prefix))
}
