//! Write-time value rules for milk records.
//!
//! The only rule on quantities is `litres >= 0`; anything that does not
//! parse to a finite number is rejected the same way.

use crate::error_handling::StoreError;

/// Parses a litres value from form text.
///
/// Surrounding whitespace is ignored.
pub(crate) fn parse_litres(raw: &str) -> Result<f64, StoreError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        StoreError::ConstraintViolation(format!("litres must be a number, got {trimmed:?}"))
    })?;
    check_litres(value)
}

/// Checks the non-negative quantity rule.
///
/// NaN and infinities are treated as non-numeric.
pub(crate) fn check_litres(value: f64) -> Result<f64, StoreError> {
    if !value.is_finite() {
        return Err(StoreError::ConstraintViolation(format!(
            "litres must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(StoreError::ConstraintViolation(format!(
            "litres must not be negative, got {value}"
        )));
    }
    Ok(value)
}

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn require_text(field: &str, value: String) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::ConstraintViolation(format!(
            "{field} must not be empty"
        )));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}
