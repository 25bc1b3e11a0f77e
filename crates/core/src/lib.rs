//! Domain logic for Prompt Vault with no internal dependencies.
//!
//! Everything here is pure: the tier policy, tag normalization, the export
//! formatter, billing event parsing, and webhook signature verification are
//! all usable without a database or an HTTP server.

pub mod billing;
pub mod error;
pub mod export;
pub mod tags;
pub mod tier;
pub mod types;
