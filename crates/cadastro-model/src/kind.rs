//! Document kind tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier families this workspace validates.
///
/// RG and IE cover the São Paulo algorithms only; other states use
/// different check-digit schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Postal code, existence-checked against a postal resolver.
    Cep,
    /// Individual taxpayer registry number.
    Cpf,
    /// Company taxpayer registry number.
    Cnpj,
    /// State identity document number.
    Rg,
    /// State tax registration number (plain or rural-producer form).
    Ie,
}

impl DocumentKind {
    /// Every supported kind, in display order.
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Cep,
        DocumentKind::Cpf,
        DocumentKind::Cnpj,
        DocumentKind::Rg,
        DocumentKind::Ie,
    ];

    /// Uppercase label as the documents are referred to in writing.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cep => "CEP",
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
            DocumentKind::Rg => "RG",
            DocumentKind::Ie => "IE",
        }
    }

    /// Parse a kind from a case-insensitive label.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cep" => Some(DocumentKind::Cep),
            "cpf" => Some(DocumentKind::Cpf),
            "cnpj" => Some(DocumentKind::Cnpj),
            "rg" => Some(DocumentKind::Rg),
            "ie" => Some(DocumentKind::Ie),
            _ => None,
        }
    }

    /// Lengths a normalized value of this kind may have.
    ///
    /// IE admits two shapes: 12 digits, or 14 characters with a leading
    /// producer marker.
    pub fn expected_lengths(&self) -> &'static [usize] {
        match self {
            DocumentKind::Cep => &[8],
            DocumentKind::Cpf => &[11],
            DocumentKind::Cnpj => &[14],
            DocumentKind::Rg => &[9],
            DocumentKind::Ie => &[12, 14],
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
