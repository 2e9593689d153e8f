//! Retention aggregation and weak-branch search
//!
//! Every operation is a blocking scan over the full record set fetched
//! from the injected source. Nothing is cached between calls, so the
//! analyzer carries no state of its own and is safe to share across
//! threads whenever the source supports concurrent reads.

use chrono::{Local, TimeZone, Timelike};

use super::models::{ChildStats, HourlyStats, RetentionResult, TagReport, WeakSpot};
use crate::source::{ReviewSource, SourceError};
use crate::tags;

type Result<T> = std::result::Result<T, SourceError>;

/// A branch is only compared for weakness once its review count exceeds
/// this threshold; smaller samples produce spurious 0%/100% ratios.
pub const MIN_SAMPLE_COUNT: u32 = 3;

/// Upper bound on how deep the weakness search descends
pub const MAX_DESCENT_DEPTH: usize = 10;

/// Analytics over an injected review source
pub struct RetentionAnalyzer<'a, S: ReviewSource> {
    source: &'a S,
}

impl<'a, S: ReviewSource> RetentionAnalyzer<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Compute pass count, total count, and pass ratio across every
    /// review tagged with `tag` or one of its descendants.
    pub fn retention(&self, tag: &str) -> Result<RetentionResult> {
        let records = self.source.fetch_review_logs()?;

        let mut pass_count = 0u32;
        let mut total_count = 0u32;

        for record in &records {
            let Some(raw) = record.tags.as_deref() else {
                continue;
            };
            if !tags::tag_matches(tag, raw) {
                continue;
            }

            total_count += 1;
            if record.passed() {
                pass_count += 1;
            }
        }

        Ok(RetentionResult::from_counts(pass_count, total_count))
    }

    /// Same filter as [`retention`](Self::retention), bucketed by the
    /// local-time hour of day each review happened.
    ///
    /// A record whose timestamp cannot be converted is skipped on its
    /// own; one bad record never loses the rest of the aggregation.
    pub fn hourly_stats(&self, tag: &str) -> Result<HourlyStats> {
        let records = self.source.fetch_review_logs()?;
        let mut stats = HourlyStats::default();

        for record in &records {
            let Some(raw) = record.tags.as_deref() else {
                continue;
            };
            if !tags::tag_matches(tag, raw) {
                continue;
            }

            let Some(hour) = local_hour(record.timestamp_ms) else {
                log::warn!(
                    "Skipping review with unrepresentable timestamp {}",
                    record.timestamp_ms
                );
                continue;
            };

            let bucket = &mut stats.buckets[hour];
            bucket.total_count += 1;
            if record.passed() {
                bucket.pass_count += 1;
            }
        }

        Ok(stats)
    }

    /// Immediate child tags of `parent`, deduplicated and sorted
    pub fn direct_children(&self, parent: &str) -> Result<Vec<String>> {
        let universe = self.source.fetch_all_tags()?;
        Ok(tags::direct_children(parent, &universe))
    }

    /// Whether any tag nests under `tag`
    pub fn has_descendants(&self, tag: &str) -> Result<bool> {
        let universe = self.source.fetch_all_tags()?;
        Ok(tags::has_descendants(tag, &universe))
    }

    /// Descend from `start` into the worst-performing child at each
    /// level, returning the deepest branch reached.
    ///
    /// Only children whose review count exceeds [`MIN_SAMPLE_COUNT`]
    /// are compared; among those the lowest ratio wins, first match
    /// first in sorted-tag order. The walk stops at a leaf, at a
    /// subtree with no evaluable child, or at [`MAX_DESCENT_DEPTH`].
    /// `None` means no meaningful weak branch exists below `start`,
    /// which is not the same as `start` itself being weak.
    pub fn deepest_weakness(&self, start: &str) -> Result<Option<WeakSpot>> {
        let mut current = start.to_string();
        let mut current_ratio = 100.0;

        for _ in 0..MAX_DESCENT_DEPTH {
            let children = self.direct_children(&current)?;
            if children.is_empty() {
                break;
            }

            let mut worst: Option<(String, f64)> = None;
            for child in children {
                let result = self.retention(&child)?;
                if result.total_count <= MIN_SAMPLE_COUNT {
                    continue;
                }
                if worst
                    .as_ref()
                    .map_or(true, |(_, score)| result.ratio < *score)
                {
                    worst = Some((child, result.ratio));
                }
            }

            match worst {
                Some((child, score)) => {
                    log::debug!("Weakness search descending into {} ({:.1}%)", child, score);
                    current = child;
                    current_ratio = score;
                }
                None => break,
            }
        }

        if current == start {
            return Ok(None);
        }

        Ok(Some(WeakSpot {
            tag: current,
            ratio: current_ratio,
        }))
    }

    /// One row per child of `parent`, ready for a drill-down view
    pub fn child_stats(&self, parent: &str) -> Result<Vec<ChildStats>> {
        let children = self.direct_children(parent)?;
        let mut rows = Vec::with_capacity(children.len());

        for tag in children {
            let retention = self.retention(&tag)?;
            let expandable = self.has_descendants(&tag)?;
            rows.push(ChildStats {
                tag,
                retention,
                expandable,
            });
        }

        Ok(rows)
    }

    /// Headline summary for `tag`: overall retention plus the weakest
    /// branch beneath it.
    pub fn report(&self, tag: &str) -> Result<TagReport> {
        let retention = self.retention(tag)?;
        let weakest = self.deepest_weakness(tag)?;

        Ok(TagReport {
            tag: tag.to_string(),
            retention,
            weakest,
        })
    }
}

/// Local-time hour of day for a millisecond epoch timestamp, `None`
/// when the timestamp is outside the representable range.
fn local_hour(timestamp_ms: i64) -> Option<usize> {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.hour() as usize)
}
