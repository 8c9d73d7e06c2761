//! Email shape check.

use std::sync::LazyLock;

use cadastro_model::ValidationError;
use regex::Regex;

/// `local@domain.tld`: dot-separated local labels over a restricted
/// character set, domain labels that do not lead with a hyphen, and a
/// final TLD of at least two letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@[A-Za-z0-9][A-Za-z0-9-]*(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$",
    )
    .expect("invalid email regex")
});

/// Longest accepted local part. The pattern language has no lookahead, so
/// the limit is enforced before the match.
const MAX_LOCAL_LEN: usize = 64;

/// Validate an email address, returning it trimmed.
pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let local_len = value.find('@').ok_or(ValidationError::MalformedEmail)?;
    if local_len == 0 || local_len > MAX_LOCAL_LEN {
        return Err(ValidationError::MalformedEmail);
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_addresses() {
        for address in [
            "user@example.com",
            "first.last@example.com",
            "user_name-1@sub.example.co",
            "u@ab.br",
        ] {
            assert_eq!(validate_email(address).unwrap(), address);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  user@example.com "), Ok("user@example.com".to_string()));
    }

    #[test]
    fn rejects_structural_defects() {
        for address in [
            "user",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@example",
            "user@-example.com",
            "user..name@example.com",
            ".user@example.com",
            "user@example.c",
        ] {
            assert_eq!(
                validate_email(address).unwrap_err(),
                ValidationError::MalformedEmail,
                "{address} should be rejected"
            );
        }
    }

    #[test]
    fn local_part_is_capped_at_64() {
        let local = "a".repeat(64);
        assert!(validate_email(&format!("{local}@example.com")).is_ok());
        let local = "a".repeat(65);
        assert_eq!(
            validate_email(&format!("{local}@example.com")).unwrap_err(),
            ValidationError::MalformedEmail
        );
    }

    #[test]
    fn empty_input_is_its_own_kind() {
        assert_eq!(validate_email("").unwrap_err(), ValidationError::EmptyInput);
        assert_eq!(validate_email("   ").unwrap_err(), ValidationError::EmptyInput);
    }
}
