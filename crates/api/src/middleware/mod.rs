//! Request extractors for authentication and tier gating.

pub mod auth;
pub mod tier;
