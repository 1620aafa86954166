use crate::core::discount::{BoundPolicy, DiscountCalculator};
use crate::core::facets::FacetAggregator;
use crate::core::filter::{AppliedFilter, FilterApplier};
use crate::core::ranges::{RangeBucketizer, DEFAULT_MAX, DEFAULT_STEP};
use crate::core::sale_window::{SaleWindowEvaluator, WindowPolicy};
use crate::core::{DEFAULT_FILTER_NAME, DEFAULT_REQUEST_VAR};
use crate::domain::model::{ActiveFilter, FacetCount, FacetOption, Item, RawSelection};
use crate::domain::ports::{CatalogSource, FacetSettings};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Layered-navigation state produced by one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerState {
    pub evaluated_at: DateTime<Utc>,
    pub applied: AppliedFilter,
    pub active_filter: Option<ActiveFilter>,
    pub facets: Vec<FacetCount>,
}

impl LayerState {
    pub fn options(&self) -> Vec<FacetOption> {
        self.facets.iter().map(FacetOption::from).collect()
    }
}

/// The "Discount Percentage" navigation filter.
///
/// Filtering and facet counting share one calculator and one reference
/// instant per pass, so a chip and its counts never disagree.
#[derive(Debug, Clone)]
pub struct DiscountFilter {
    name: String,
    request_var: String,
    applier: FilterApplier,
    aggregator: FacetAggregator,
    parallel: bool,
    hide_options_when_active: bool,
}

impl DiscountFilter {
    pub fn new<C: FacetSettings>(settings: &C) -> Self {
        let calculator =
            DiscountCalculator::new(SaleWindowEvaluator::new(settings.window_policy()));
        let bound_policy = settings.bound_policy();

        Self {
            name: settings.filter_name().to_string(),
            request_var: settings.request_var().to_string(),
            applier: FilterApplier::new(calculator, bound_policy),
            aggregator: FacetAggregator::new(
                RangeBucketizer::new(settings.step(), settings.max()),
                calculator,
                bound_policy,
            ),
            parallel: settings.parallel(),
            hide_options_when_active: settings.hide_options_when_active(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request_var(&self) -> &str {
        &self.request_var
    }

    /// Value that clears this filter: no selection at all.
    pub fn reset_value(&self) -> Option<String> {
        None
    }

    pub fn apply(&self, raw: &RawSelection, items: &[Item], now: DateTime<Utc>) -> AppliedFilter {
        self.applier.apply(raw, items, now)
    }

    pub fn facets(&self, items: &[Item], now: DateTime<Utc>) -> Vec<FacetCount> {
        if self.parallel {
            self.aggregator.build_facets_parallel(items, now)
        } else {
            self.aggregator.build_facets(items, now)
        }
    }

    /// Runs both traversal modes against the same `now`.
    pub fn evaluate(&self, raw: &RawSelection, items: &[Item], now: DateTime<Utc>) -> LayerState {
        let applied = self.apply(raw, items, now);
        let active_filter = applied.active_filter(&self.name);

        let facets = if applied.is_active() && self.hide_options_when_active {
            Vec::new()
        } else {
            self.facets(items, now)
        };

        LayerState {
            evaluated_at: now,
            applied,
            active_filter,
            facets,
        }
    }

    /// Like [`evaluate`](Self::evaluate), with `now` captured from the wall clock.
    pub fn evaluate_now(&self, raw: &RawSelection, items: &[Item]) -> LayerState {
        self.evaluate(raw, items, Utc::now())
    }

    pub async fn evaluate_source<S: CatalogSource>(
        &self,
        source: &S,
        raw: &RawSelection,
        now: DateTime<Utc>,
    ) -> Result<LayerState> {
        let items = source.load_items().await?;
        tracing::debug!("Loaded {} items for discount navigation", items.len());
        Ok(self.evaluate(raw, &items, now))
    }
}

/// Built-in settings: 20-point ranges up to 100%, lower-bound matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSettings;

impl FacetSettings for DefaultSettings {
    fn filter_name(&self) -> &str {
        DEFAULT_FILTER_NAME
    }

    fn request_var(&self) -> &str {
        DEFAULT_REQUEST_VAR
    }

    fn step(&self) -> u32 {
        DEFAULT_STEP
    }

    fn max(&self) -> u32 {
        DEFAULT_MAX
    }

    fn bound_policy(&self) -> BoundPolicy {
        BoundPolicy::default()
    }

    fn window_policy(&self) -> WindowPolicy {
        WindowPolicy::default()
    }

    fn parallel(&self) -> bool {
        false
    }

    fn hide_options_when_active(&self) -> bool {
        true
    }
}

impl Default for DiscountFilter {
    fn default() -> Self {
        Self::new(&DefaultSettings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ItemKind;
    use crate::utils::error::FacetError;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone};

    struct StaticCatalog(Vec<Item>);

    #[async_trait]
    impl CatalogSource for StaticCatalog {
        async fn load_items(&self) -> Result<Vec<Item>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenCatalog;

    #[async_trait]
    impl CatalogSource for BrokenCatalog {
        async fn load_items(&self) -> Result<Vec<Item>> {
            Err(FacetError::Catalog {
                message: "backend unavailable".to_string(),
            })
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn items() -> Vec<Item> {
        let started = NaiveDate::from_ymd_opt(2026, 10, 18);
        vec![
            Item::new("a", ItemKind::Simple, 200.0).with_special(150.0, started, None),
            Item::new("b", ItemKind::Simple, 50.0).with_special(50.0, started, None),
        ]
    }

    #[test]
    fn test_evaluate_without_selection_lists_options() {
        let state = DiscountFilter::default().evaluate(&RawSelection::Absent, &items(), now());

        assert!(state.active_filter.is_none());
        assert_eq!(state.applied.matched_ids.len(), 2);
        let options = state.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "1% to 20%");
        assert_eq!(options[0].value, "1-20");
        assert_eq!(options[1].value, "21-40");
    }

    #[test]
    fn test_evaluate_with_selection_hides_options() {
        let state = DiscountFilter::default().evaluate(&"21-40".into(), &items(), now());

        assert!(state.facets.is_empty());
        assert_eq!(state.applied.matched_ids.len(), 1);
        assert_eq!(state.active_filter.map(|chip| chip.value), Some("21-40".to_string()));
    }

    #[test]
    fn test_descriptor_defaults() {
        let filter = DiscountFilter::default();
        assert_eq!(filter.name(), "Discount Percentage");
        assert_eq!(filter.request_var(), "state");
        assert!(filter.reset_value().is_none());
    }

    #[tokio::test]
    async fn test_evaluate_source() {
        let filter = DiscountFilter::default();
        let state = filter
            .evaluate_source(&StaticCatalog(items()), &"1-100".into(), now())
            .await
            .unwrap();

        assert_eq!(state.applied.matched_ids.len(), 1);
        assert_eq!(state.evaluated_at, now());
    }

    #[tokio::test]
    async fn test_evaluate_source_propagates_catalog_errors() {
        let result = DiscountFilter::default()
            .evaluate_source(&BrokenCatalog, &RawSelection::Absent, now())
            .await;

        assert!(matches!(result, Err(FacetError::Catalog { .. })));
    }
}
