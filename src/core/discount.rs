use crate::core::sale_window::SaleWindowEvaluator;
use crate::domain::model::{DiscountRange, Item, ItemKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a discount percentage is compared against a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// "At least N% off": only the lower bound is checked.
    #[default]
    LowerOnly,
    /// Both bounds checked, `from <= percent < to + 1`.
    Inclusive,
}

impl BoundPolicy {
    pub fn matches(self, percent: f64, from: u32, to: u32) -> bool {
        let lower = percent >= f64::from(from);
        match self {
            BoundPolicy::LowerOnly => lower,
            BoundPolicy::Inclusive => lower && percent < f64::from(to) + 1.0,
        }
    }

    pub fn matches_range(self, percent: f64, range: &DiscountRange) -> bool {
        self.matches(percent, range.from, range.to)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountCalculator {
    window: SaleWindowEvaluator,
}

impl DiscountCalculator {
    pub fn new(window: SaleWindowEvaluator) -> Self {
        Self { window }
    }

    /// Base price the discount is measured against.
    ///
    /// Bundles use the regular price produced by external pricing logic; a
    /// bundle without one has no usable base.
    pub fn effective_base_price(&self, item: &Item) -> f64 {
        match item.kind {
            ItemKind::Bundle => item.regular_price_amount.unwrap_or(0.0),
            ItemKind::Simple | ItemKind::Composite => item.price,
        }
    }

    /// `(base - special) * 100 / base`, or `None` when no discount applies.
    ///
    /// Not clamped: a special price above base yields a negative value.
    pub fn discount_percent(&self, item: &Item, now: DateTime<Utc>) -> Option<f64> {
        let base = self.effective_base_price(item);
        if base.is_nan() || base <= 0.0 {
            return None;
        }

        let special = item.special_price?;
        if !self.window.is_active(item, now) {
            return None;
        }

        Some((base - special) * 100.0 / base)
    }
}
