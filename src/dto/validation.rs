//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a text field contains at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("value must not be blank".into());
        return Err(err);
    }

    Ok(())
}
