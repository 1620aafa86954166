use crate::core::discount::BoundPolicy;
use crate::domain::model::DiscountRange;

pub const DEFAULT_STEP: u32 = 20;
pub const DEFAULT_MAX: u32 = 100;

/// Generates the fixed discount buckets `1-20, 21-40, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBucketizer {
    step: u32,
    max: u32,
}

impl RangeBucketizer {
    pub fn new(step: u32, max: u32) -> Self {
        Self { step, max }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Regenerated on every call. A zero step yields no ranges.
    pub fn ranges(&self) -> Vec<DiscountRange> {
        if self.step == 0 {
            tracing::debug!("Range step is zero, no discount ranges generated");
            return Vec::new();
        }

        let mut ranges = Vec::new();
        let mut start: u32 = 1;
        while start <= self.max {
            let end = start.saturating_add(self.step - 1).min(self.max);
            ranges.push(DiscountRange::new(start, end));
            start = match start.checked_add(self.step) {
                Some(next) => next,
                None => break,
            };
        }
        ranges
    }

    /// Range whose span `[from, to + 1)` contains `percent`.
    pub fn bucket_for(&self, percent: f64) -> Option<DiscountRange> {
        self.ranges()
            .into_iter()
            .find(|range| BoundPolicy::Inclusive.matches_range(percent, range))
    }
}

impl Default for RangeBucketizer {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let labels: Vec<String> = RangeBucketizer::default()
            .ranges()
            .into_iter()
            .map(|r| r.label)
            .collect();

        assert_eq!(labels, vec!["1-20", "21-40", "41-60", "61-80", "81-100"]);
    }

    #[test]
    fn test_last_range_is_capped_at_max() {
        let ranges = RangeBucketizer::new(30, 100).ranges();
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[3], DiscountRange::new(91, 100));
    }

    #[test]
    fn test_degenerate_configurations() {
        assert!(RangeBucketizer::new(0, 100).ranges().is_empty());
        assert!(RangeBucketizer::new(20, 0).ranges().is_empty());
        assert_eq!(RangeBucketizer::new(100, 100).ranges().len(), 1);
        assert_eq!(RangeBucketizer::new(u32::MAX, u32::MAX).ranges().len(), 1);
    }

    #[test]
    fn test_bucket_for() {
        let bucketizer = RangeBucketizer::default();
        assert_eq!(bucketizer.bucket_for(25.0).map(|r| r.label), Some("21-40".to_string()));
        assert_eq!(bucketizer.bucket_for(20.5).map(|r| r.label), Some("1-20".to_string()));
        assert_eq!(bucketizer.bucket_for(100.0).map(|r| r.label), Some("81-100".to_string()));
        assert!(bucketizer.bucket_for(0.0).is_none());
        assert!(bucketizer.bucket_for(-10.0).is_none());
    }
}
