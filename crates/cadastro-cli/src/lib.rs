//! CLI library components for the cadastro validators.

pub mod logging;
