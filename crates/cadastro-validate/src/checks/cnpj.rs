//! CNPJ check digits.
//!
//! Fourteen digits, the last two computed over the twelve-digit base with
//! cyclic weights. The remainder rule differs from CPF: `sum % 11` below 2
//! gives 0, anything else gives `11 - remainder`.

use cadastro_model::{Cnpj, DocumentKind, ValidationError};

use super::{digit, mismatch, normalized_digits, weighted_sum};

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validate a raw CNPJ string, returning the normalized digits.
pub fn validate_cnpj(input: &str) -> Result<Cnpj, ValidationError> {
    let value = normalized_digits(DocumentKind::Cnpj, input, 14)?;

    let first = check_digit(weighted_sum(&value, 0, &FIRST_WEIGHTS));
    if first != digit(&value, 12) {
        return Err(mismatch(DocumentKind::Cnpj, &value, 12, first));
    }

    let second = check_digit(weighted_sum(&value, 0, &SECOND_WEIGHTS));
    if second != digit(&value, 13) {
        return Err(mismatch(DocumentKind::Cnpj, &value, 13, second));
    }

    Ok(Cnpj::new(value))
}

fn check_digit(sum: u32) -> u32 {
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
