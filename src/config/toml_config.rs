use crate::config::cli::CatalogFormat;
use crate::core::ranges::{DEFAULT_MAX, DEFAULT_STEP};
use crate::core::{
    BoundPolicy, FacetSettings, WindowPolicy, DEFAULT_FILTER_NAME, DEFAULT_REQUEST_VAR,
};
use crate::utils::error::{FacetError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub filter: FilterConfig,
    pub ranges: RangesConfig,
    pub matching: MatchingConfig,
    pub catalog: CatalogConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub name: String,
    pub request_var: String,
    pub hide_options_when_active: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_FILTER_NAME.to_string(),
            request_var: DEFAULT_REQUEST_VAR.to_string(),
            hide_options_when_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangesConfig {
    pub step: u32,
    pub max: u32,
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max: DEFAULT_MAX,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub bound_policy: BoundPolicy,
    pub window_policy: WindowPolicy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub parallel: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FacetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FacetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_PATH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FacetError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("filter.name", &self.filter.name)?;
        validation::validate_non_empty_string("filter.request_var", &self.filter.request_var)?;
        validation::validate_positive_number("ranges.step", self.ranges.step, 1)?;
        validation::validate_range("ranges.max", self.ranges.max, 1, 100)?;

        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }
        if let Some(format) = &self.catalog.format {
            validation::validate_one_of(
                "catalog.format",
                &format.to_ascii_lowercase(),
                &CatalogFormat::NAMES,
            )?;
        }

        Ok(())
    }

    pub fn catalog_format(&self) -> Result<Option<CatalogFormat>> {
        self.catalog
            .format
            .as_deref()
            .map(str::parse::<CatalogFormat>)
            .transpose()
    }
}

impl FacetSettings for TomlConfig {
    fn filter_name(&self) -> &str {
        &self.filter.name
    }

    fn request_var(&self) -> &str {
        &self.filter.request_var
    }

    fn step(&self) -> u32 {
        self.ranges.step
    }

    fn max(&self) -> u32 {
        self.ranges.max
    }

    fn bound_policy(&self) -> BoundPolicy {
        self.matching.bound_policy
    }

    fn window_policy(&self) -> WindowPolicy {
        self.matching.window_policy
    }

    fn parallel(&self) -> bool {
        self.performance.parallel
    }

    fn hide_options_when_active(&self) -> bool {
        self.filter.hide_options_when_active
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
