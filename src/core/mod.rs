pub mod discount;
pub mod engine;
pub mod facets;
pub mod filter;
pub mod ranges;
pub mod sale_window;

pub use crate::domain::model::{
    ActiveFilter, DiscountRange, FacetCount, FacetOption, FilterSelection, Item, ItemId, ItemKind,
    RawSelection,
};
pub use crate::domain::ports::{CatalogSource, FacetSettings};
pub use crate::utils::error::Result;
pub use discount::{BoundPolicy, DiscountCalculator};
pub use sale_window::{SaleWindowEvaluator, WindowPolicy};

pub const DEFAULT_FILTER_NAME: &str = "Discount Percentage";
pub const DEFAULT_REQUEST_VAR: &str = "state";
