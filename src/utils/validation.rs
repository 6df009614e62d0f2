use crate::utils::error::{Result, ServiceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidFieldError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ServiceError::InvalidFieldError {
            field: field_name.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, len: usize, max_len: usize) -> Result<()> {
    if len > max_len {
        return Err(ServiceError::InvalidFieldError {
            field: field_name.to_string(),
            reason: format!("At most {} entries are supported, got {}", max_len, len),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ServiceError::MissingFieldError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("db_host", "localhost").is_ok());
        assert!(validate_non_empty_string("db_host", "").is_err());
        assert!(validate_non_empty_string("db_host", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("port", 3000, 1).is_ok());
        assert!(validate_positive_number("port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("items", 26, 26).is_ok());
        assert!(validate_max_length("items", 27, 26).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(vec![1, 2]);
        let missing: Option<Vec<i32>> = None;
        assert!(validate_required_field("items", &present).is_ok());
        assert!(validate_required_field("items", &missing).is_err());
    }
}
