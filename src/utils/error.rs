use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FacetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FacetError::ConfigValidationError { .. }
            | FacetError::InvalidConfigValueError { .. }
            | FacetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FacetError::SerializationError(_)
            | FacetError::CsvError(_)
            | FacetError::Catalog { .. } => ErrorCategory::Catalog,
            FacetError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FacetError::IoError(_) => {
                "Check that the catalog and config paths exist and are readable".to_string()
            }
            FacetError::SerializationError(_) => {
                "Make sure the catalog is a JSON array of items".to_string()
            }
            FacetError::CsvError(_) => {
                "Check the CSV header: id,kind,price,regular_price_amount,special_price,special_from,special_to"
                    .to_string()
            }
            FacetError::ConfigValidationError { field, .. }
            | FacetError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration", field)
            }
            FacetError::MissingConfigError { field } => {
                format!("Add the '{}' setting to the configuration", field)
            }
            FacetError::Catalog { .. } => "Verify the catalog source and try again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Catalog => format!("Could not read the catalog: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FacetError>;
