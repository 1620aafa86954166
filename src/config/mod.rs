pub mod cli;
pub mod toml_config;

use crate::utils::error::{FacetError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "discount-facets")]
#[command(about = "Discount-percentage filter and facet counts for a catalog export")]
pub struct CliConfig {
    /// Catalog file (JSON array or CSV)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Catalog format, guessed from the extension when omitted
    #[arg(long)]
    pub format: Option<String>,

    /// Raw filter selection, e.g. "21-40"
    #[arg(long)]
    pub selection: Option<String>,

    /// Reference instant (RFC 3339 or YYYY-MM-DD), defaults to now
    #[arg(long)]
    pub now: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub step: Option<u32>,

    #[arg(long)]
    pub max: Option<u32>,

    /// Count facet ranges in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_log: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut toml_config::TomlConfig) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(format) = &self.format {
            config.catalog.format = Some(format.clone());
        }
        if let Some(step) = self.step {
            config.ranges.step = step;
        }
        if let Some(max) = self.max {
            config.ranges.max = max;
        }
        if self.parallel {
            config.performance.parallel = true;
        }
    }

    pub fn reference_instant(&self) -> Result<DateTime<Utc>> {
        match &self.now {
            Some(value) => parse_instant(value),
            None => Ok(Utc::now()),
        }
    }
}

/// Accepts RFC 3339 timestamps or plain dates (midnight UTC).
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| FacetError::InvalidConfigValueError {
            field: "now".to_string(),
            value: value.to_string(),
            reason: format!("Expected RFC 3339 or YYYY-MM-DD: {}", e),
        })
}
