//! ViaCEP postal resolver.
//!
//! Implements the [`PostalResolver`] capability from `cadastro-validate`
//! against the public ViaCEP HTTP API. One blocking round-trip per lookup,
//! a fixed timeout, no retries.

mod client;

pub use client::ViaCepClient;
