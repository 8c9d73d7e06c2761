//! RG check character (São Paulo issue).
//!
//! Nine characters: eight data digits and one check character. The check
//! value is `11 - (weighted sum % 11)`, with 11 mapping to 0; a value of
//! 10 cannot be written as a digit and appears as the literal `X` instead.

use cadastro_model::{DocumentKind, Rg, ValidationError};

use super::{check_char, digit, weighted_sum};
use crate::normalize::normalize;

const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Validate a raw RG string, returning the normalized value.
pub fn validate_rg(input: &str) -> Result<Rg, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let value = normalize(DocumentKind::Rg, input);
    // X is legal only as the trailing check character, so the shape is
    // eight digits plus one digit-or-X.
    if value.len() != 9 || !value.as_bytes()[..8].iter().all(u8::is_ascii_digit) {
        return Err(ValidationError::InvalidLength {
            kind: DocumentKind::Rg,
            expected: 9,
            actual: value.len(),
        });
    }

    let computed = check_value(weighted_sum(&value, 0, &WEIGHTS));
    let matches = if value.ends_with('X') {
        computed == 10
    } else {
        computed == digit(&value, 8)
    };
    if !matches {
        return Err(ValidationError::ChecksumMismatch {
            kind: DocumentKind::Rg,
            position: 8,
            expected: check_char(computed),
            actual: value.as_bytes()[8] as char,
        });
    }

    Ok(Rg::new(value))
}

fn check_value(sum: u32) -> u32 {
    match 11 - (sum % 11) {
        11 => 0,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_check_digit() {
        let rg = validate_rg("24.678.131-2").unwrap();
        assert_eq!(rg.as_str(), "246781312");
    }

    #[test]
    fn accepts_x_when_computation_yields_ten() {
        let rg = validate_rg("71111111X").unwrap();
        assert_eq!(rg.as_str(), "71111111X");
    }

    #[test]
    fn lowercase_marker_is_canonicalized() {
        let rg = validate_rg("71111111x").unwrap();
        assert_eq!(rg.as_str(), "71111111X");
    }

    #[test]
    fn digit_in_place_of_x_mismatches() {
        // Same data digits compute to 10, so every numeric ending fails.
        for last in 0..=9u8 {
            let candidate = format!("71111111{last}");
            let err = validate_rg(&candidate).unwrap_err();
            assert_eq!(
                err,
                ValidationError::ChecksumMismatch {
                    kind: DocumentKind::Rg,
                    position: 8,
                    expected: 'X',
                    actual: char::from(b'0' + last),
                }
            );
        }
    }

    #[test]
    fn x_where_a_digit_is_computed_mismatches() {
        // 24678131 computes 2, so a trailing X is wrong.
        let err = validate_rg("24678131X").unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksumMismatch {
                kind: DocumentKind::Rg,
                position: 8,
                expected: '2',
                actual: 'X',
            }
        );
    }

    #[test]
    fn x_in_a_data_position_is_a_shape_error() {
        let err = validate_rg("2467813X2").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLength { .. }));
    }

    #[test]
    fn rejects_wrong_length_and_empty() {
        assert!(matches!(
            validate_rg("2467813").unwrap_err(),
            ValidationError::InvalidLength { actual: 7, .. }
        ));
        assert_eq!(validate_rg("").unwrap_err(), ValidationError::EmptyInput);
    }
}
