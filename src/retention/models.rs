//! Result models for retention analytics
//!
//! All results are derived values, recomputed from the record set on
//! every query and never cached.

use serde::{Deserialize, Serialize};

/// Aggregate pass/fail outcome for one tag subtree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionResult {
    pub pass_count: u32,
    pub total_count: u32,
    /// Pass percentage in [0, 100]; 0.0 when no reviews matched
    pub ratio: f64,
}

impl RetentionResult {
    pub(crate) fn from_counts(pass_count: u32, total_count: u32) -> Self {
        let ratio = if total_count > 0 {
            pass_count as f64 / total_count as f64 * 100.0
        } else {
            0.0
        };

        Self {
            pass_count,
            total_count,
            ratio,
        }
    }
}

impl Default for RetentionResult {
    fn default() -> Self {
        Self::from_counts(0, 0)
    }
}

/// Pass/total tallies for a single hour of the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    pub pass_count: u32,
    pub total_count: u32,
}

impl HourBucket {
    /// Pass percentage for this hour, 0.0 when the bucket is empty
    pub fn ratio(&self) -> f64 {
        if self.total_count > 0 {
            self.pass_count as f64 / self.total_count as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Per-hour performance across a day; index = local-time hour (0-23)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyStats {
    pub buckets: [HourBucket; 24],
}

impl HourlyStats {
    /// Sum all buckets into an overall retention result
    pub fn totals(&self) -> RetentionResult {
        let pass = self.buckets.iter().map(|b| b.pass_count).sum();
        let total = self.buckets.iter().map(|b| b.total_count).sum();
        RetentionResult::from_counts(pass, total)
    }
}

/// The weakest-performing branch found beneath a start tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakSpot {
    pub tag: String,
    /// Retention ratio of the branch, in [0, 100]
    pub ratio: f64,
}

/// One drill-down row: a child tag with its retention and expandability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStats {
    pub tag: String,
    pub retention: RetentionResult,
    /// Whether the tag has any descendants of its own
    pub expandable: bool,
}

/// Headline summary for a tag: overall retention plus the weakest branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReport {
    pub tag: String,
    pub retention: RetentionResult,
    /// Absent when no descendant had enough samples to evaluate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest: Option<WeakSpot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_from_counts() {
        let result = RetentionResult::from_counts(2, 3);
        assert!((result.ratio - 66.666).abs() < 0.01);

        let result = RetentionResult::from_counts(0, 0);
        assert_eq!(result.ratio, 0.0);

        let result = RetentionResult::from_counts(4, 4);
        assert_eq!(result.ratio, 100.0);
    }

    #[test]
    fn test_hourly_totals() {
        let mut stats = HourlyStats::default();
        stats.buckets[7] = HourBucket {
            pass_count: 2,
            total_count: 3,
        };
        stats.buckets[22] = HourBucket {
            pass_count: 1,
            total_count: 1,
        };

        let totals = stats.totals();
        assert_eq!(totals.pass_count, 3);
        assert_eq!(totals.total_count, 4);
        assert_eq!(totals.ratio, 75.0);
    }

    #[test]
    fn test_empty_bucket_ratio() {
        assert_eq!(HourBucket::default().ratio(), 0.0);
    }
}
