//! Error taxonomy shared by every validator.
//!
//! Each validation call resolves to exactly one of these kinds; nothing in
//! the core panics or prints. Messages carry positions and computed digits
//! but never echo the full input value, since registry numbers are
//! personal data.

use thiserror::Error;

use crate::DocumentKind;

/// Why a value failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// No data was supplied at all.
    #[error("input value is empty")]
    EmptyInput,

    /// The normalized value does not have the shape the kind requires.
    ///
    /// Covers both a plain length mismatch and a letter marker sitting in
    /// a position where only digits are legal.
    #[error("{kind} does not match the expected {expected}-character shape (got {actual})")]
    InvalidLength {
        /// Kind being validated.
        kind: DocumentKind,
        /// Length the kind requires for this form.
        expected: usize,
        /// Length actually found after normalization.
        actual: usize,
    },

    /// A computed check digit disagrees with the literal trailing character.
    #[error("{kind} check digit at position {position} should be {expected}, found {actual}")]
    ChecksumMismatch {
        /// Kind being validated.
        kind: DocumentKind,
        /// Index of the check character within the normalized value.
        position: usize,
        /// Check character the weighted sum produces.
        expected: char,
        /// Check character literally present.
        actual: char,
    },

    /// The postal resolver answered that the CEP is not assigned.
    #[error("postal code {cep} is not assigned")]
    NotFound {
        /// The normalized 8-digit code that was looked up.
        cep: String,
    },

    /// The postal resolver could not be reached or answered abnormally.
    #[error("postal lookup failed: {message}")]
    Transport {
        /// Transport-level description (HTTP status, connect failure, ...).
        message: String,
    },

    /// The password is missing at least one required character class.
    #[error("password must mix uppercase, lowercase, digits and special characters")]
    WeakPassword,

    /// The email address does not match the `local@domain.tld` shape.
    #[error("email address is not well formed")]
    MalformedEmail,
}

impl ValidationError {
    /// Stable machine-readable code for reports and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Transport { .. } => "TRANSPORT",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::MalformedEmail => "MALFORMED_EMAIL",
        }
    }

    /// True for failures caused by the remote postal service rather than
    /// the value under validation.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Alias used across the workspace.
pub type Result<T> = std::result::Result<T, ValidationError>;
