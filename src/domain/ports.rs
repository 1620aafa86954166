use crate::core::{BoundPolicy, WindowPolicy};
use crate::domain::model::Item;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the materialized item subset for one navigation context.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_items(&self) -> Result<Vec<Item>>;
}

pub trait FacetSettings: Send + Sync {
    fn filter_name(&self) -> &str;
    fn request_var(&self) -> &str;
    fn step(&self) -> u32;
    fn max(&self) -> u32;
    fn bound_policy(&self) -> BoundPolicy;
    fn window_policy(&self) -> WindowPolicy;
    fn parallel(&self) -> bool;
    fn hide_options_when_active(&self) -> bool;
}
