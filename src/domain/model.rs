use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Product type; decides which price field is authoritative.
///
/// Only bundles price differently, so any type name other than `simple` or
/// `bundle` reads as `Composite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ItemKind {
    #[default]
    Simple,
    Bundle,
    Composite,
}

impl From<String> for ItemKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "simple" => ItemKind::Simple,
            "bundle" => ItemKind::Bundle,
            _ => ItemKind::Composite,
        }
    }
}

/// A sellable item with its pricing attributes already materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub kind: ItemKind,
    /// Direct price of the item.
    #[serde(default)]
    pub price: f64,
    /// Regular price computed by external pricing logic (bundles only).
    #[serde(default)]
    pub regular_price_amount: Option<f64>,
    #[serde(default)]
    pub special_price: Option<f64>,
    #[serde(default)]
    pub special_from: Option<NaiveDate>,
    #[serde(default)]
    pub special_to: Option<NaiveDate>,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, kind: ItemKind, price: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            price,
            regular_price_amount: None,
            special_price: None,
            special_from: None,
            special_to: None,
        }
    }

    pub fn with_regular_price_amount(mut self, amount: f64) -> Self {
        self.regular_price_amount = Some(amount);
        self
    }

    pub fn with_special(
        mut self,
        price: f64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        self.special_price = Some(price);
        self.special_from = from;
        self.special_to = to;
        self
    }
}

/// One discount-percentage bucket, bounds inclusive in percentage points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRange {
    pub from: u32,
    pub to: u32,
    /// Canonical `from-to` key.
    pub label: String,
}

impl DiscountRange {
    pub fn new(from: u32, to: u32) -> Self {
        Self {
            from,
            to,
            label: format!("{}-{}", from, to),
        }
    }

    /// Key usable as a raw selection value on the next request.
    pub fn selection_key(&self) -> &str {
        &self.label
    }

    pub fn display_label(&self) -> String {
        format!("{}% to {}%", self.from, self.to)
    }
}

/// A parsed `"<from>-<to>"` selection with `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub from: u32,
    pub to: u32,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Request parameter as the web layer hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawSelection {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

impl RawSelection {
    /// The single string value, if the parameter carried exactly one.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            RawSelection::Single(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for RawSelection {
    fn from(value: &str) -> Self {
        RawSelection::Single(value.to_string())
    }
}

impl From<String> for RawSelection {
    fn from(value: String) -> Self {
        RawSelection::Single(value)
    }
}

impl From<Option<&str>> for RawSelection {
    fn from(value: Option<&str>) -> Self {
        value.map(RawSelection::from).unwrap_or_default()
    }
}

impl From<Option<String>> for RawSelection {
    fn from(value: Option<String>) -> Self {
        value.map(RawSelection::Single).unwrap_or_default()
    }
}

impl From<Vec<String>> for RawSelection {
    fn from(values: Vec<String>) -> Self {
        RawSelection::Multiple(values)
    }
}

/// A range with a nonzero number of matching items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub range: DiscountRange,
    pub count: usize,
}

/// Navigation option as rendered by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
    pub count: usize,
}

impl From<&FacetCount> for FacetOption {
    fn from(facet: &FacetCount) -> Self {
        Self {
            label: facet.range.display_label(),
            value: facet.range.selection_key().to_string(),
            count: facet.count,
        }
    }
}

/// Active-filter chip shown in the layered navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub name: String,
    pub label: String,
    pub value: String,
}
