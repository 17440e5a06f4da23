//! Argument checks performed before any request is built

use std::fmt::Display;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },

    #[error("Required parameter '{parameter}' is missing")]
    MissingParameter { parameter: String },
}

impl ValidationError {
    pub fn range_error(parameter: &str, min: impl Display, max: impl Display, value: impl Display) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl Display, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing(parameter: &str) -> Self {
        Self::MissingParameter {
            parameter: parameter.to_string(),
        }
    }
}

/// Fail with [`ValidationError::RangeError`] unless `min <= value <= max`
pub fn check_range<T>(parameter: &str, value: T, min: T, max: T) -> Result<T, ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::range_error(parameter, min, max, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_bounds_are_inclusive() {
        assert_eq!(check_range("volume", 0u8, 0, 100), Ok(0));
        assert_eq!(check_range("volume", 100u8, 0, 100), Ok(100));
        assert_eq!(check_range("bass", -10i8, -10, 10), Ok(-10));
    }

    #[test]
    fn test_check_range_rejects_outside_values() {
        let err = check_range("volume", 101u8, 0, 100).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 'volume' value '101' is out of range (0..=100)"
        );
        assert!(check_range("bass", 11i8, -10, 10).is_err());
        assert!(check_range("preset", 0u8, 1, 6).is_err());
    }
}
