//! Password strength check.

use cadastro_model::ValidationError;

/// Accept only passwords containing all four character classes: uppercase,
/// lowercase, digit, and at least one character outside `[A-Za-z0-9]`.
///
/// Returns no value on success; a password has no normalized form worth
/// passing around.
pub fn check_password_strength(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let has_upper = input.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = input.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = input.chars().any(|c| c.is_ascii_digit());
    let has_special = input.chars().any(|c| !c.is_ascii_alphanumeric());
    if has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}
