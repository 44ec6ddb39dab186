//! Validation helpers for word entries.

use validator::ValidationError;

/// Validates that a category or word is made only of lowercase ASCII letters (`^[a-z]+$`).
///
/// # Examples
///
/// ```ignore
/// validate_lowercase_letters("animals") // Ok
/// validate_lowercase_letters("Animals") // Err - uppercase
/// validate_lowercase_letters("us1")     // Err - digit
/// ```
pub fn validate_lowercase_letters(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("letters_empty");
        err.message = Some("Value must not be empty".into());
        return Err(err);
    }

    if !value.chars().all(|c| c.is_ascii_lowercase()) {
        let mut err = ValidationError::new("letters_format");
        err.message = Some("Value must contain only lowercase letters a-z".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a hint carries some text once surrounding whitespace is removed.
pub fn validate_hint(hint: &str) -> Result<(), ValidationError> {
    if hint.trim().is_empty() {
        let mut err = ValidationError::new("hint_blank");
        err.message = Some("Hint must not be blank".into());
        return Err(err);
    }

    Ok(())
}
