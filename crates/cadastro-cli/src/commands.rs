//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

use cadastro_cep::ViaCepClient;
use cadastro_model::ValidationError;
use cadastro_validate::{
    check_password_strength, lookup_cep, validate_cep_format, validate_cnpj, validate_cpf,
    validate_email, validate_ie, validate_rg,
};

use crate::cli::{BatchArgs, CheckArgs};
use crate::types::{
    BatchResult, BatchRowOutcome, FieldKind, FieldOutcome, REPORT_SCHEMA, REPORT_SCHEMA_VERSION,
    ReportPayload, ReportRow, Validated,
};

pub fn run_check(args: &CheckArgs) -> Result<Vec<FieldOutcome>> {
    let resolver = build_resolver(args.no_lookup)?;
    info!("checking {} value(s) as {}", args.values.len(), args.kind);
    Ok(args
        .values
        .iter()
        .map(|value| validate_field(args.kind, value, resolver.as_ref()))
        .collect())
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchResult> {
    let resolver = build_resolver(args.no_lookup)?;
    let mut reader = csv::Reader::from_path(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<BatchRow>().enumerate() {
        // Line 1 is the header.
        let line = idx as u64 + 2;
        let row =
            record.with_context(|| format!("{}: malformed row at line {line}", args.file.display()))?;
        let Some(kind) = FieldKind::parse(&row.kind) else {
            bail!(
                "{}: unknown kind {:?} at line {line}",
                args.file.display(),
                row.kind
            );
        };
        rows.push(BatchRowOutcome {
            line,
            outcome: validate_field(kind, &row.value, resolver.as_ref()),
        });
    }

    let mut result = BatchResult {
        file: args.file.clone(),
        rows,
        report_path: None,
    };
    info!(
        "validated {} row(s), {} invalid",
        result.rows.len(),
        result.invalid_count()
    );

    if let Some(path) = &args.report {
        write_report(path, &result)?;
        result.report_path = Some(path.clone());
    }
    Ok(result)
}

pub fn run_kinds() -> Vec<(FieldKind, &'static str)> {
    FieldKind::ALL
        .iter()
        .map(|kind| (*kind, kind.shape_hint()))
        .collect()
}

/// CSV row shape for the batch command.
#[derive(Debug, Deserialize)]
struct BatchRow {
    kind: String,
    value: String,
}

/// The postal resolver, unless lookups are disabled.
fn build_resolver(no_lookup: bool) -> Result<Option<ViaCepClient>> {
    if no_lookup {
        return Ok(None);
    }
    ViaCepClient::new()
        .map(Some)
        .context("cannot build the postal service client")
}

/// Dispatch one value to its validator.
fn validate_field(
    kind: FieldKind,
    value: &str,
    resolver: Option<&ViaCepClient>,
) -> FieldOutcome {
    if kind == FieldKind::Password {
        debug!("validating a password value");
    } else {
        debug!("validating a {kind} value: {value:?}");
    }
    let result = match kind {
        FieldKind::Cpf => validate_cpf(value).map(|cpf| Validated::Value(cpf.into_inner())),
        FieldKind::Cnpj => validate_cnpj(value).map(|cnpj| Validated::Value(cnpj.into_inner())),
        FieldKind::Rg => validate_rg(value).map(|rg| Validated::Value(rg.into_inner())),
        FieldKind::Ie => validate_ie(value).map(|ie| Validated::Value(ie.into_inner())),
        FieldKind::Cep => validate_cep_field(value, resolver),
        FieldKind::Email => validate_email(value).map(Validated::Value),
        FieldKind::Password => check_password_strength(value).map(|()| Validated::Accepted),
    };
    FieldOutcome {
        kind,
        input: value.to_string(),
        result,
    }
}

fn validate_cep_field(
    value: &str,
    resolver: Option<&ViaCepClient>,
) -> Result<Validated, ValidationError> {
    match resolver {
        Some(resolver) => lookup_cep(value, resolver).map(|address| Validated::Located {
            value: address.cep.clone(),
            address,
        }),
        None => validate_cep_format(value).map(|cep| Validated::Value(cep.into_inner())),
    }
}

fn write_report(path: &Path, result: &BatchResult) -> Result<()> {
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: result.file.display().to_string(),
        total: result.rows.len(),
        valid: result.valid_count(),
        invalid: result.invalid_count(),
        rows: result.rows.iter().map(ReportRow::from_row).collect(),
    };
    let json = serde_json::to_string_pretty(&payload)
        .context("cannot serialize the validation report")?;
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("cannot write report to {}", path.display()))?;
    Ok(())
}
