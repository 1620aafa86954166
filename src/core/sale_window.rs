use crate::domain::model::Item;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Which promotional-window bounds gate the special price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPolicy {
    /// Only `special_from` is checked; `special_to` is ignored.
    #[default]
    StartOnly,
    /// `special_to` also closes the window (inclusive, whole day).
    StartAndEnd,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SaleWindowEvaluator {
    policy: WindowPolicy,
}

impl SaleWindowEvaluator {
    pub fn new(policy: WindowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Whether the item's special price applies at `now`.
    ///
    /// Items without a start date are never eligible.
    pub fn is_active(&self, item: &Item, now: DateTime<Utc>) -> bool {
        let Some(from) = item.special_from else {
            return false;
        };

        if now < start_of_day(from) {
            return false;
        }

        match (self.policy, item.special_to) {
            (WindowPolicy::StartAndEnd, Some(to)) => now.date_naive() <= to,
            _ => true,
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
