use crate::utils::error::{FacetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FacetError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FacetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("ranges.step", 20, 1).is_ok());
        assert!(validate_positive_number("ranges.step", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("ranges.max", 100, 1, 100).is_ok());
        assert!(validate_range("ranges.max", 0, 1, 100).is_err());
        assert!(validate_range("ranges.max", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("catalog.format", "csv", &["json", "csv"]).is_ok());
        assert!(validate_one_of("catalog.format", "xml", &["json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("items.json".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("catalog.path", &present).unwrap(), "items.json");
        assert!(matches!(
            validate_required_field("catalog.path", &missing),
            Err(FacetError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("catalog.path", "items.json").is_ok());
        assert!(validate_path("catalog.path", "").is_err());
        assert!(validate_non_empty_string("filter.request_var", "  ").is_err());
    }
}
