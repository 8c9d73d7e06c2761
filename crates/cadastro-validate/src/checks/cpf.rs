//! CPF check digits.
//!
//! Eleven digits, the last two computed from the nine-digit base. Each
//! check digit is a weighted sum scaled by ten and reduced modulo 11; a
//! raw result of 10 maps to 0. The second sum runs over the base plus the
//! literal first check digit.

use cadastro_model::{Cpf, DocumentKind, ValidationError};

use super::{digit, mismatch, normalized_digits, weighted_sum};

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a raw CPF string, returning the normalized digits.
pub fn validate_cpf(input: &str) -> Result<Cpf, ValidationError> {
    let value = normalized_digits(DocumentKind::Cpf, input, 11)?;

    let first = check_digit(weighted_sum(&value, 0, &FIRST_WEIGHTS));
    if first != digit(&value, 9) {
        return Err(mismatch(DocumentKind::Cpf, &value, 9, first));
    }

    let second = check_digit(weighted_sum(&value, 0, &SECOND_WEIGHTS));
    if second != digit(&value, 10) {
        return Err(mismatch(DocumentKind::Cpf, &value, 10, second));
    }

    Ok(Cpf::new(value))
}

fn check_digit(sum: u32) -> u32 {
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_cpf() {
        let cpf = validate_cpf("52998224725").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
    }

    #[test]
    fn accepts_punctuated_input() {
        let cpf = validate_cpf("529.982.247-25").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
    }

    #[test]
    fn rejects_bad_first_check_digit() {
        let err = validate_cpf("52998224735").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ChecksumMismatch { position: 9, .. }
        ));
    }

    #[test]
    fn rejects_bad_second_check_digit() {
        let err = validate_cpf("52998224726").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ChecksumMismatch { position: 10, .. }
        ));
    }

    #[test]
    fn rejects_short_value() {
        let err = validate_cpf("5299822472").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 10,
            }
        );
    }

    #[test]
    fn letters_strip_to_a_shorter_string() {
        // Eleven characters, but one of them is outside the alphabet.
        let err = validate_cpf("529a8224725").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 10,
            }
        );
    }

    #[test]
    fn empty_input_is_its_own_kind() {
        assert_eq!(validate_cpf("").unwrap_err(), ValidationError::EmptyInput);
    }
}
