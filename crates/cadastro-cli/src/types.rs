//! Shared result types for the CLI commands.

use std::fmt;
use std::path::PathBuf;

use cadastro_model::ValidationError;
use cadastro_validate::PostalAddress;
use clap::ValueEnum;
use serde::Serialize;

/// Field families the CLI validates: the registry documents plus the
/// email and password utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Cpf,
    Cnpj,
    Rg,
    Ie,
    Cep,
    Email,
    Password,
}

impl FieldKind {
    /// Every supported kind, in display order.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Cpf,
        FieldKind::Cnpj,
        FieldKind::Rg,
        FieldKind::Ie,
        FieldKind::Cep,
        FieldKind::Email,
        FieldKind::Password,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Cpf => "CPF",
            FieldKind::Cnpj => "CNPJ",
            FieldKind::Rg => "RG",
            FieldKind::Ie => "IE",
            FieldKind::Cep => "CEP",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    /// Parse a kind from a case-insensitive CSV tag.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cpf" => Some(FieldKind::Cpf),
            "cnpj" => Some(FieldKind::Cnpj),
            "rg" => Some(FieldKind::Rg),
            "ie" => Some(FieldKind::Ie),
            "cep" => Some(FieldKind::Cep),
            "email" => Some(FieldKind::Email),
            "password" | "senha" => Some(FieldKind::Password),
            _ => None,
        }
    }

    /// One-line description of the accepted shape, for the kinds table.
    pub fn shape_hint(&self) -> &'static str {
        match self {
            FieldKind::Cpf => "11 digits, 2 check digits",
            FieldKind::Cnpj => "14 digits, 2 check digits",
            FieldKind::Rg => "9 characters, check digit or X",
            FieldKind::Ie => "12 digits, or 14 with leading P",
            FieldKind::Cep => "8 digits, existence via ViaCEP",
            FieldKind::Email => "local@domain.tld",
            FieldKind::Password => "upper + lower + digit + special",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a successful validation produced.
#[derive(Debug, Clone)]
pub enum Validated {
    /// A normalized document or email value.
    Value(String),
    /// A CEP confirmed against the postal service, with its address.
    Located {
        value: String,
        address: PostalAddress,
    },
    /// Accepted with nothing to echo back (passwords).
    Accepted,
}

impl Validated {
    /// The normalized text, when there is one.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Validated::Value(value) | Validated::Located { value, .. } => Some(value),
            Validated::Accepted => None,
        }
    }
}

/// Outcome of validating one value.
#[derive(Debug, Clone)]
pub struct FieldOutcome {
    pub kind: FieldKind,
    pub input: String,
    pub result: Result<Validated, ValidationError>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// The input as it may be shown; passwords are never echoed.
    pub fn display_input(&self) -> &str {
        if self.kind == FieldKind::Password {
            "[hidden]"
        } else {
            &self.input
        }
    }
}

/// Everything the batch command produced.
#[derive(Debug)]
pub struct BatchResult {
    pub file: PathBuf,
    pub rows: Vec<BatchRowOutcome>,
    pub report_path: Option<PathBuf>,
}

impl BatchResult {
    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|row| row.outcome.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.rows.len() - self.valid_count()
    }
}

/// One CSV row and its outcome. `line` is 1-based and counts the header.
#[derive(Debug)]
pub struct BatchRowOutcome {
    pub line: u64,
    pub outcome: FieldOutcome,
}

pub const REPORT_SCHEMA: &str = "cadastro.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub line: u64,
    pub kind: FieldKind,
    pub input: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ReportRow {
    pub fn from_row(row: &BatchRowOutcome) -> Self {
        let outcome = &row.outcome;
        match &outcome.result {
            Ok(validated) => Self {
                line: row.line,
                kind: outcome.kind,
                input: outcome.display_input().to_string(),
                status: "valid",
                normalized: validated.normalized().map(str::to_string),
                error: None,
                code: None,
            },
            Err(err) => Self {
                line: row.line,
                kind: outcome.kind,
                input: outcome.display_input().to_string(),
                status: "invalid",
                normalized: None,
                error: Some(err.to_string()),
                code: Some(err.code()),
            },
        }
    }
}
