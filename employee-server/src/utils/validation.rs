//! Input validation helpers

use crate::utils::AppError;

/// Message returned when a required field is missing or empty
pub const MISSING_FIELDS: &str = "missing required fields";

/// Message returned when the request body cannot be decoded
pub const INVALID_BODY: &str = "invalid request body";

/// Validate that every `(field, value)` pair carries a non-empty value.
pub fn validate_required(fields: &[(&str, &str)]) -> Result<(), AppError> {
    if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
        tracing::debug!(field = field, "Rejected request with missing field");
        return Err(AppError::validation(MISSING_FIELDS));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        assert!(validate_required(&[("name", "Alice"), ("role", "tester")]).is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        let err = validate_required(&[("name", "Alice"), ("department", "")]).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_FIELDS));
    }

    #[test]
    fn test_whitespace_only_accepted() {
        for value in [" ", "   ", "\t\n"] {
            assert!(validate_required(&[("name", value), ("department", "Eng")]).is_ok());
        }
    }
}
