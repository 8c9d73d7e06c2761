//! Validators for Brazilian registry documents.
//!
//! Every validator follows the same skeleton: reject empty input, strip
//! the raw string down to the kind's alphabet, check the resulting shape,
//! then recompute the check digits and compare them against the literal
//! trailing characters. Success returns a typed wrapper from
//! `cadastro-model`; failure returns one `ValidationError`.
//!
//! The CEP validator additionally consults an injected [`PostalResolver`],
//! keeping the rest of the crate free of any I/O.

pub mod cep;
mod checks;
mod normalize;

pub use cep::{
    PostalAddress, PostalResolver, ResolverError, lookup_cep, validate_cep, validate_cep_format,
};
pub use checks::cnpj::validate_cnpj;
pub use checks::cpf::validate_cpf;
pub use checks::email::validate_email;
pub use checks::ie::validate_ie;
pub use checks::password::check_password_strength;
pub use checks::rg::validate_rg;
pub use normalize::normalize;
