//! IE check digits (São Paulo).
//!
//! Two shapes share one weight table for the base positions. The plain
//! form is twelve digits with check digits at positions 8 and 11; the
//! rural-producer form is fourteen characters, a leading `P`, and a single
//! check digit at position 9 with four free digits after it. Both reduce
//! `sum % 11` and map a raw 10 to 0.

use cadastro_model::{DocumentKind, Ie, IeForm, ValidationError};

use super::{digit, mismatch, weighted_sum};
use crate::normalize::normalize;

const BASE_WEIGHTS: [u32; 8] = [1, 3, 4, 5, 6, 7, 8, 10];
const SECOND_WEIGHTS: [u32; 11] = [3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const PLAIN_LEN: usize = 12;
const PRODUCER_LEN: usize = 14;

/// Validate a raw IE string, returning the normalized value and its form.
///
/// The presence of the `P` marker selects the producer shape, exactly as
/// the registration cards print it.
pub fn validate_ie(input: &str) -> Result<Ie, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let value = normalize(DocumentKind::Ie, input);
    if value.contains('P') {
        validate_producer(value)
    } else {
        validate_plain(value)
    }
}

fn validate_plain(value: String) -> Result<Ie, ValidationError> {
    if value.len() != PLAIN_LEN {
        return Err(ValidationError::InvalidLength {
            kind: DocumentKind::Ie,
            expected: PLAIN_LEN,
            actual: value.len(),
        });
    }

    let first = check_digit(weighted_sum(&value, 0, &BASE_WEIGHTS));
    if first != digit(&value, 8) {
        return Err(mismatch(DocumentKind::Ie, &value, 8, first));
    }

    let second = check_digit(weighted_sum(&value, 0, &SECOND_WEIGHTS));
    if second != digit(&value, 11) {
        return Err(mismatch(DocumentKind::Ie, &value, 11, second));
    }

    Ok(Ie::new(value, IeForm::Plain))
}

fn validate_producer(value: String) -> Result<Ie, ValidationError> {
    // The marker belongs at position 0 and nowhere else; anything different
    // is a shape violation, not a checksum question.
    if value.len() != PRODUCER_LEN || !value.starts_with('P') || value[1..].contains('P') {
        return Err(ValidationError::InvalidLength {
            kind: DocumentKind::Ie,
            expected: PRODUCER_LEN,
            actual: value.len(),
        });
    }

    let computed = check_digit(weighted_sum(&value, 1, &BASE_WEIGHTS));
    if computed != digit(&value, 9) {
        return Err(mismatch(DocumentKind::Ie, &value, 9, computed));
    }

    Ok(Ie::new(value, IeForm::Producer))
}

fn check_digit(sum: u32) -> u32 {
    match sum % 11 {
        10 => 0,
        r => r,
    }
}
