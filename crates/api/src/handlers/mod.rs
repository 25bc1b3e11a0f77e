//! HTTP handlers, one module per resource.

pub mod auth;
pub mod billing;
pub mod export;
pub mod folders;
pub mod profile;
pub mod prompts;
