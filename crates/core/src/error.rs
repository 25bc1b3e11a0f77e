use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The caller is authenticated but the feature needs a Pro subscription.
    /// Distinct from [`CoreError::Forbidden`] so the API layer can attach a
    /// stable `UPGRADE_REQUIRED` code that clients key upgrade prompts off.
    #[error("Upgrade required: {0}")]
    UpgradeRequired(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
