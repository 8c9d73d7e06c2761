//! Property tests for the normalizer.

use cadastro_model::DocumentKind;
use cadastro_validate::normalize;
use proptest::prelude::*;

proptest! {
    /// Normalizing an already-normalized value is a no-op.
    #[test]
    fn normalize_is_idempotent(raw in ".*", kind_idx in 0..DocumentKind::ALL.len()) {
        let kind = DocumentKind::ALL[kind_idx];
        let once = normalize(kind, &raw);
        let twice = normalize(kind, &once);
        prop_assert_eq!(twice, once);
    }

    /// Digit-only kinds never keep anything but digits.
    #[test]
    fn digit_kinds_strip_to_digits(raw in ".*") {
        for kind in [DocumentKind::Cep, DocumentKind::Cpf, DocumentKind::Cnpj] {
            prop_assert!(normalize(kind, &raw).bytes().all(|b| b.is_ascii_digit()));
        }
    }

    /// Relative order of kept characters is preserved.
    #[test]
    fn normalization_is_a_subsequence(raw in ".*") {
        let kept = normalize(DocumentKind::Rg, &raw);
        let mut remaining = kept.chars().peekable();
        for c in raw.chars().flat_map(|c| c.to_uppercase()) {
            if remaining.peek() == Some(&c) {
                remaining.next();
            }
        }
        prop_assert!(remaining.peek().is_none(), "{kept:?} is not a subsequence of {raw:?}");
    }
}
