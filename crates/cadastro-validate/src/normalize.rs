//! Alphabet stripping.

use cadastro_model::DocumentKind;

/// Strip `raw` down to the characters legal for `kind`, preserving order.
///
/// Letter markers (`x` for RG, `p` for IE) are canonicalized to uppercase.
/// The strip is pure and idempotent; emptiness and length are judged by the
/// validators, not here.
pub fn normalize(kind: DocumentKind, raw: &str) -> String {
    raw.chars().filter_map(|c| legal(kind, c)).collect()
}

/// The character `c` as it appears in a normalized value of `kind`, if legal.
fn legal(kind: DocumentKind, c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    match (kind, c) {
        (DocumentKind::Rg, 'X' | 'x') => Some('X'),
        (DocumentKind::Ie, 'P' | 'p') => Some('P'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_letters() {
        assert_eq!(normalize(DocumentKind::Cpf, "529.982.247-25"), "52998224725");
        assert_eq!(normalize(DocumentKind::Cep, "01001-000"), "01001000");
        assert_eq!(normalize(DocumentKind::Cpf, "abc"), "");
    }

    #[test]
    fn keeps_markers_only_for_their_kind() {
        assert_eq!(normalize(DocumentKind::Rg, "24.678.131-x"), "24678131X");
        assert_eq!(normalize(DocumentKind::Ie, "p-0110042430021"), "P0110042430021");
        // X is not part of the CPF alphabet, P not part of RG's
        assert_eq!(normalize(DocumentKind::Cpf, "1X2"), "12");
        assert_eq!(normalize(DocumentKind::Rg, "1P2"), "12");
    }
}
