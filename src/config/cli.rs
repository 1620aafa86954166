use crate::core::{CatalogSource, Item};
use crate::utils::error::{FacetError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    pub const NAMES: [&'static str; 2] = ["json", "csv"];

    /// Guess from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => CatalogFormat::Csv,
            _ => CatalogFormat::Json,
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = FacetError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            other => Err(FacetError::InvalidConfigValueError {
                field: "catalog.format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Catalog exported to a local JSON or CSV file.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    path: PathBuf,
    format: CatalogFormat,
}

impl LocalCatalog {
    pub fn new(path: impl Into<PathBuf>, format: Option<CatalogFormat>) -> Self {
        let path = path.into();
        let format = format.unwrap_or_else(|| CatalogFormat::from_path(&path));
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CatalogFormat {
        self.format
    }

    fn parse(&self, data: &[u8]) -> Result<Vec<Item>> {
        match self.format {
            CatalogFormat::Json => Ok(serde_json::from_slice(data)?),
            CatalogFormat::Csv => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_reader(data);
                let mut items: Vec<Item> = Vec::new();
                for row in reader.deserialize::<Item>() {
                    items.push(row?);
                }
                Ok(items)
            }
        }
    }
}

#[async_trait]
impl CatalogSource for LocalCatalog {
    async fn load_items(&self) -> Result<Vec<Item>> {
        tracing::debug!("Reading catalog from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        let items = self.parse(&data)?;
        tracing::debug!("Parsed {} items ({:?})", items.len(), self.format);
        Ok(items)
    }
}
