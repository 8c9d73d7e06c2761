//! Blocking HTTP client for the ViaCEP API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use cadastro_model::DocumentKind;
use cadastro_validate::{PostalAddress, PostalResolver, ResolverError, normalize};

/// Public ViaCEP endpoint.
const VIACEP_BASE_URL: &str = "https://viacep.com.br";

/// HTTP request timeout; a CEP lookup is a single small GET.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Postal resolver backed by the ViaCEP web service.
pub struct ViaCepClient {
    /// HTTP client.
    client: Client,
    /// Service base URL; swapped out in tests.
    base_url: String,
}

impl ViaCepClient {
    /// Create a client against the public ViaCEP endpoint.
    pub fn new() -> Result<Self, ResolverError> {
        Self::with_base_url(VIACEP_BASE_URL)
    }

    /// Create a client against an alternative endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ResolverError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ResolverError::new(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The lookup URL for a normalized 8-digit CEP.
    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep)
    }
}

impl PostalResolver for ViaCepClient {
    fn resolve(&self, cep: &str) -> Result<Option<PostalAddress>, ResolverError> {
        debug!("looking up CEP {cep} at {}", self.base_url);

        let response = self
            .client
            .get(self.lookup_url(cep))
            .header(USER_AGENT, concat!("cadastro/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|err| ResolverError::new(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::new(format!(
                "postal service answered HTTP {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .map_err(|err| ResolverError::new(err.to_string()))?;
        parse_lookup(&body)
    }
}

/// ViaCEP response body. On an unassigned code the service answers
/// `{"erro": true}` (historically also `"erro": "true"`), so the field is
/// kept untyped and judged by presence.
#[derive(Debug, Deserialize)]
struct Payload {
    erro: Option<serde_json::Value>,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// Parse a 2xx ViaCEP body into a lookup answer.
fn parse_lookup(body: &str) -> Result<Option<PostalAddress>, ResolverError> {
    let payload: Payload = serde_json::from_str(body)
        .map_err(|err| ResolverError::new(format!("unreadable postal service answer: {err}")))?;
    if payload.erro.is_some() {
        return Ok(None);
    }
    Ok(Some(PostalAddress {
        cep: normalize(DocumentKind::Cep, &payload.cep),
        street: payload.logradouro,
        complement: payload.complemento,
        neighborhood: payload.bairro,
        city: payload.localidade,
        state: payload.uf,
    }))
}
