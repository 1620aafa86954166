use crate::core::discount::{BoundPolicy, DiscountCalculator};
use crate::domain::model::{ActiveFilter, FilterSelection, Item, ItemId, RawSelection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Parses `"<from>-<to>"`. Anything else, including `from > to`, is no
/// selection.
pub fn parse_selection(raw: &RawSelection) -> Option<FilterSelection> {
    let value = raw.as_single()?;
    let (from, to) = value.split_once('-')?;
    let from = parse_bound(from)?;
    let to = parse_bound(to)?;

    (from <= to).then_some(FilterSelection { from, to })
}

fn parse_bound(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Result of applying the discount filter to one item subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedFilter {
    /// Identifiers the caller should narrow its collection to.
    pub matched_ids: BTreeSet<ItemId>,
    pub selection: Option<FilterSelection>,
    /// Raw request text, kept for the active-filter chip.
    pub raw_value: Option<String>,
}

impl AppliedFilter {
    fn pass_through(items: &[Item]) -> Self {
        Self {
            matched_ids: items.iter().map(|item| item.id.clone()).collect(),
            selection: None,
            raw_value: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    /// Restricts `items` to the matched identifiers, keeping their order.
    pub fn narrow<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items
            .iter()
            .filter(|item| self.matched_ids.contains(&item.id))
            .collect()
    }

    pub fn active_filter(&self, filter_name: &str) -> Option<ActiveFilter> {
        let raw = self.raw_value.as_ref()?;
        Some(ActiveFilter {
            name: filter_name.to_string(),
            label: raw.clone(),
            value: raw.clone(),
        })
    }
}

/// Narrows an item subset to the selected discount range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterApplier {
    calculator: DiscountCalculator,
    bound_policy: BoundPolicy,
}

impl FilterApplier {
    pub fn new(calculator: DiscountCalculator, bound_policy: BoundPolicy) -> Self {
        Self {
            calculator,
            bound_policy,
        }
    }

    /// Malformed or absent selections pass every item through.
    pub fn apply(&self, raw: &RawSelection, items: &[Item], now: DateTime<Utc>) -> AppliedFilter {
        let Some(selection) = parse_selection(raw) else {
            if *raw != RawSelection::Absent {
                tracing::debug!("Ignoring malformed discount selection: {:?}", raw);
            }
            return AppliedFilter::pass_through(items);
        };

        let matched_ids: BTreeSet<ItemId> = items
            .iter()
            .filter(|item| {
                self.calculator
                    .discount_percent(item, now)
                    .is_some_and(|percent| {
                        self.bound_policy.matches(percent, selection.from, selection.to)
                    })
            })
            .map(|item| item.id.clone())
            .collect();

        tracing::debug!(
            "Discount selection {} matched {} of {} items",
            selection,
            matched_ids.len(),
            items.len()
        );

        AppliedFilter {
            matched_ids,
            selection: Some(selection),
            raw_value: raw.as_single().map(str::to_string),
        }
    }
}
