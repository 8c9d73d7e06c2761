//! Validated value wrappers.
//!
//! Each wrapper holds a normalized, checksum-verified string and is only
//! constructed by the validators in `cadastro-validate`. `Display` renders
//! the bare normalized characters; `formatted()` applies the conventional
//! punctuation mask.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A verified 11-digit CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Wrap an already-verified digit string.
    ///
    /// Callers outside the validators should obtain values through
    /// `cadastro_validate::validate_cpf`.
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, keeping the digits.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Conventional mask, e.g. `529.982.247-25`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A verified 14-digit CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl Cnpj {
    /// Wrap an already-verified digit string.
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, keeping the digits.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Conventional mask, e.g. `11.444.777/0001-61`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A verified 9-character RG; the final character is a digit or `X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rg(String);

impl Rg {
    /// Wrap an already-verified value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The normalized characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, keeping the characters.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Conventional mask, e.g. `24.678.131-2`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..2], &d[2..5], &d[5..8], &d[8..9])
    }
}

impl fmt::Display for Rg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which of the two São Paulo IE shapes a value has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IeForm {
    /// 12-digit registration with two check digits.
    Plain,
    /// 14-character rural-producer registration with a leading `P`.
    Producer,
}

/// A verified state tax registration number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ie {
    value: String,
    form: IeForm,
}

impl Ie {
    /// Wrap an already-verified value with its form.
    pub fn new(value: impl Into<String>, form: IeForm) -> Self {
        Self {
            value: value.into(),
            form,
        }
    }

    /// The normalized characters.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Which shape the value has.
    pub fn form(&self) -> IeForm {
        self.form
    }

    /// Consume the wrapper, keeping the characters.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Dotted mask for the plain form, e.g. `110.042.490.114`; the producer
    /// form has no settled mask and is returned unchanged.
    pub fn formatted(&self) -> String {
        match self.form {
            IeForm::Plain => {
                let d = &self.value;
                format!("{}.{}.{}.{}", &d[0..3], &d[3..6], &d[6..9], &d[9..12])
            }
            IeForm::Producer => self.value.clone(),
        }
    }
}

impl fmt::Display for Ie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A length-checked 8-digit CEP.
///
/// Existence is a separate concern: `cadastro_validate::validate_cep`
/// additionally consults a postal resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Wrap an already-checked digit string.
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The normalized digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, keeping the digits.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Conventional mask, e.g. `01001-000`.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}-{}", &d[0..5], &d[5..8])
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
