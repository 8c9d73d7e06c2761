//! Public-API tests across the validators.

use cadastro_model::{DocumentKind, IeForm, ValidationError};
use cadastro_validate::{
    PostalAddress, PostalResolver, ResolverError, check_password_strength, validate_cep,
    validate_cep_format, validate_cnpj, validate_cpf, validate_email, validate_ie, validate_rg,
};

struct FoundEverything;

impl PostalResolver for FoundEverything {
    fn resolve(&self, cep: &str) -> Result<Option<PostalAddress>, ResolverError> {
        Ok(Some(PostalAddress {
            cep: cep.to_string(),
            street: String::new(),
            complement: String::new(),
            neighborhood: String::new(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        }))
    }
}

#[test]
fn known_cpf_passes_unchanged() {
    let cpf = validate_cpf("52998224725").unwrap();
    assert_eq!(cpf.as_str(), "52998224725");
    assert_eq!(cpf.formatted(), "529.982.247-25");
}

#[test]
fn every_mutation_of_cpf_check_digits_fails() {
    let valid = "52998224725";
    for position in [9usize, 10] {
        for replacement in b'0'..=b'9' {
            if replacement == valid.as_bytes()[position] {
                continue;
            }
            let mut mutated = valid.as_bytes().to_vec();
            mutated[position] = replacement;
            let mutated = String::from_utf8(mutated).unwrap();
            assert!(
                matches!(
                    validate_cpf(&mutated).unwrap_err(),
                    ValidationError::ChecksumMismatch { .. }
                ),
                "{mutated} must not validate"
            );
        }
    }
}

#[test]
fn corrupting_any_cnpj_data_digit_fails() {
    let valid = "11444777000161";
    for position in 0..12 {
        let original = valid.as_bytes()[position];
        let replacement = if original == b'9' { b'0' } else { original + 1 };
        let mut mutated = valid.as_bytes().to_vec();
        mutated[position] = replacement;
        let mutated = String::from_utf8(mutated).unwrap();
        assert!(
            validate_cnpj(&mutated).is_err(),
            "{mutated} must not validate"
        );
    }
}

#[test]
fn rg_with_marker_only_accepts_the_marker() {
    assert!(validate_rg("71111111X").is_ok());
    assert!(validate_rg("71111111x").is_ok());
    for digit in b'0'..=b'9' {
        let candidate = format!("71111111{}", digit as char);
        assert!(matches!(
            validate_rg(&candidate).unwrap_err(),
            ValidationError::ChecksumMismatch { expected: 'X', .. }
        ));
    }
}

#[test]
fn ie_forms_are_told_apart() {
    assert_eq!(validate_ie("110042490114").unwrap().form(), IeForm::Plain);
    assert_eq!(
        validate_ie("P0110042430021").unwrap().form(),
        IeForm::Producer
    );
}

#[test]
fn ie_first_check_digit_failure_points_at_position_8() {
    let err = validate_ie("110042491114").unwrap_err();
    assert!(matches!(
        err,
        ValidationError::ChecksumMismatch {
            kind: DocumentKind::Ie,
            position: 8,
            ..
        }
    ));
}

#[test]
fn empty_input_yields_empty_input_everywhere() {
    assert_eq!(validate_cpf("").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(validate_cnpj("").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(validate_rg("").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(validate_ie("").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(
        validate_cep_format("").unwrap_err(),
        ValidationError::EmptyInput
    );
    assert_eq!(
        validate_email("").unwrap_err(),
        ValidationError::EmptyInput
    );
    assert_eq!(
        check_password_strength("").unwrap_err(),
        ValidationError::EmptyInput
    );
}

#[test]
fn wrong_alphabet_surfaces_as_length() {
    let err = validate_cpf("abcdefghijk").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidLength {
            kind: DocumentKind::Cpf,
            expected: 11,
            actual: 0,
        }
    );
}

#[test]
fn cep_validation_normalizes_before_the_lookup() {
    let cep = validate_cep("01.001-000", &FoundEverything).unwrap();
    assert_eq!(cep.as_str(), "01001000");
    assert_eq!(cep.formatted(), "01001-000");
}

#[test]
fn password_boundary_cases() {
    assert!(check_password_strength("Aa1!").is_ok());
    assert_eq!(
        check_password_strength("aaaa1111").unwrap_err(),
        ValidationError::WeakPassword
    );
}
