//! Entity models and DTOs, one module per table.

pub mod folder;
pub mod profile;
pub mod prompt;
pub mod session;
