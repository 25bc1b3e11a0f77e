//! Session entity model and DTOs.

use sqlx::FromRow;
use vault_core::types::{DbId, Timestamp};

/// A row from the `sessions` table. One row per issued refresh token;
/// only the token's SHA-256 hash is stored.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub profile_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a session.
#[derive(Debug)]
pub struct CreateSession {
    pub profile_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
