use crate::core::discount::{BoundPolicy, DiscountCalculator};
use crate::core::ranges::RangeBucketizer;
use crate::domain::model::{DiscountRange, FacetCount, Item};
use chrono::{DateTime, Utc};
use rayon::prelude::*;

/// Counts matching items per discount range for the navigation panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacetAggregator {
    bucketizer: RangeBucketizer,
    calculator: DiscountCalculator,
    bound_policy: BoundPolicy,
}

impl FacetAggregator {
    pub fn new(
        bucketizer: RangeBucketizer,
        calculator: DiscountCalculator,
        bound_policy: BoundPolicy,
    ) -> Self {
        Self {
            bucketizer,
            calculator,
            bound_policy,
        }
    }

    /// One entry per range with at least one match, in range order.
    ///
    /// `items` must be the full subset for the navigation context. Percentages
    /// are computed once, then tested against every range.
    pub fn build_facets(&self, items: &[Item], now: DateTime<Utc>) -> Vec<FacetCount> {
        let Some(ranges) = self.usable_ranges() else {
            return Vec::new();
        };

        let percents: Vec<f64> = items
            .iter()
            .filter_map(|item| self.calculator.discount_percent(item, now))
            .collect();

        let facets = ranges
            .into_iter()
            .filter_map(|range| self.count_range(range, &percents))
            .collect::<Vec<_>>();

        tracing::debug!(
            "Built {} discount facets from {} items ({} discounted)",
            facets.len(),
            items.len(),
            percents.len()
        );
        facets
    }

    /// Same result as [`build_facets`](Self::build_facets), one range per
    /// rayon task.
    pub fn build_facets_parallel(&self, items: &[Item], now: DateTime<Utc>) -> Vec<FacetCount> {
        let Some(ranges) = self.usable_ranges() else {
            return Vec::new();
        };

        let percents: Vec<f64> = items
            .par_iter()
            .filter_map(|item| self.calculator.discount_percent(item, now))
            .collect();

        let facets: Vec<FacetCount> = ranges
            .into_par_iter()
            .filter_map(|range| self.count_range(range, &percents))
            .collect();

        tracing::debug!(
            "Built {} discount facets in parallel from {} items",
            facets.len(),
            items.len()
        );
        facets
    }

    fn usable_ranges(&self) -> Option<Vec<DiscountRange>> {
        let ranges = self.bucketizer.ranges();
        if ranges.len() <= 1 {
            tracing::debug!(
                "Only {} discount range(s) configured, skipping facets",
                ranges.len()
            );
            return None;
        }
        Some(ranges)
    }

    fn count_range(&self, range: DiscountRange, percents: &[f64]) -> Option<FacetCount> {
        let count = percents
            .iter()
            .filter(|percent| self.bound_policy.matches_range(**percent, &range))
            .count();

        (count > 0).then_some(FacetCount { range, count })
    }
}
