//! Shared data model for Brazilian registry document validation.
//!
//! This crate defines the document kinds, the validated value wrappers
//! returned on success, and the error taxonomy shared by every validator.
//! The validation logic itself lives in `cadastro-validate`.

mod document;
mod error;
mod kind;

pub use document::{Cep, Cnpj, Cpf, Ie, IeForm, Rg};
pub use error::{Result, ValidationError};
pub use kind::DocumentKind;
