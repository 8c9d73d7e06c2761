//! CEP validation and the postal resolver capability.
//!
//! A CEP has no check digit; beyond the 8-digit shape, validity means the
//! code is actually assigned, which only a postal service can answer. That
//! lookup is abstracted behind [`PostalResolver`] so everything in this
//! crate stays free of network I/O; `cadastro-cep` supplies the ViaCEP
//! implementation.

use cadastro_model::{Cep, DocumentKind, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checks::normalized_digits;

/// Address record returned for an assigned CEP.
///
/// Fields mirror what Brazilian postal data carries; any of them except
/// `cep` may be empty for codes that cover a whole town.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// The 8 normalized digits.
    pub cep: String,
    /// Street (logradouro).
    pub street: String,
    /// Address complement.
    pub complement: String,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// City (localidade).
    pub city: String,
    /// Two-letter state code (UF).
    pub state: String,
}

/// Transport-level failure while consulting a postal resolver.
///
/// Distinct from [`ValidationError`]: a resolver that answers "no such
/// code" is a successful call with a negative answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResolverError {
    message: String,
}

impl ResolverError {
    /// Wrap a transport-level description (HTTP status, connect failure).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability consumed by CEP validation.
///
/// `cep` is always the normalized 8-digit string. `Ok(None)` means the
/// service answered that the code is not assigned.
pub trait PostalResolver {
    /// Look a postal code up once; implementations apply their own timeout
    /// and do not retry.
    fn resolve(&self, cep: &str) -> Result<Option<PostalAddress>, ResolverError>;
}

/// Shape-only validation: empty check, strip, 8-digit length.
pub fn validate_cep_format(input: &str) -> Result<Cep, ValidationError> {
    normalized_digits(DocumentKind::Cep, input, 8).map(Cep::new)
}

/// Validate a CEP including the existence lookup.
pub fn validate_cep(input: &str, resolver: &dyn PostalResolver) -> Result<Cep, ValidationError> {
    let cep = validate_cep_format(input)?;
    consult(&cep, resolver)?;
    Ok(cep)
}

/// Validate a CEP and return the resolved address.
pub fn lookup_cep(
    input: &str,
    resolver: &dyn PostalResolver,
) -> Result<PostalAddress, ValidationError> {
    let cep = validate_cep_format(input)?;
    consult(&cep, resolver)
}

fn consult(cep: &Cep, resolver: &dyn PostalResolver) -> Result<PostalAddress, ValidationError> {
    match resolver.resolve(cep.as_str()) {
        Ok(Some(address)) => Ok(address),
        Ok(None) => Err(ValidationError::NotFound {
            cep: cep.as_str().to_string(),
        }),
        Err(err) => Err(ValidationError::Transport {
            message: err.to_string(),
        }),
    }
}
