//! Prompt entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vault_core::types::{DbId, Timestamp};

/// A row from the `prompts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prompt {
    pub id: DbId,
    pub owner_id: DbId,
    pub folder_id: Option<DbId>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A prompt row with its folder name resolved (LEFT JOIN on folders).
/// Used by listing and export.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PromptWithFolder {
    pub id: DbId,
    pub owner_id: DbId,
    pub folder_id: Option<DbId>,
    pub folder_name: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a prompt. Tags are normalized by the handler before
/// this reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreatePrompt {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub folder_id: Option<DbId>,
}

/// DTO for updating a prompt. A full replace: omitting `folder_id` clears
/// the folder reference, matching the edit dialog which always submits the
/// complete record.
#[derive(Debug, Deserialize)]
pub struct UpdatePrompt {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub folder_id: Option<DbId>,
}
