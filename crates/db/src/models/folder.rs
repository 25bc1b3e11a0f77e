//! Folder entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vault_core::types::{DbId, Timestamp};

/// A row from the `folders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Folder {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a folder.
#[derive(Debug, Deserialize)]
pub struct CreateFolder {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for renaming/redescribing a folder. Only non-`None` fields apply.
#[derive(Debug, Deserialize)]
pub struct UpdateFolder {
    pub name: Option<String>,
    pub description: Option<String>,
}
