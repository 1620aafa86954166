pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalCatalog, toml_config::TomlConfig};
pub use crate::core::engine::{DiscountFilter, LayerState};
pub use crate::core::{
    facets::FacetAggregator, filter::FilterApplier, ranges::RangeBucketizer, BoundPolicy,
    DiscountCalculator, Item, ItemId, ItemKind, RawSelection, SaleWindowEvaluator, WindowPolicy,
};
pub use utils::error::{FacetError, Result};
