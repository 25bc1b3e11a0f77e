//! Handlers for the `/folders` resource.
//!
//! Folders are a Pro feature: every endpoint here takes the [`RequirePro`]
//! extractor, so free-tier callers are denied with `UPGRADE_REQUIRED`
//! before any row is read or written.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vault_core::error::CoreError;
use vault_core::types::DbId;
use vault_db::models::folder::{CreateFolder, UpdateFolder};
use vault_db::repositories::FolderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::tier::RequirePro;
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject empty or whitespace-only folder names.
fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Folder name must not be empty".into(),
        )));
    }
    Ok(())
}

/// GET /api/v1/folders
pub async fn list_folders(
    RequirePro(profile): RequirePro,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let folders = FolderRepo::list_for_owner(&state.pool, profile.id).await?;
    Ok(Json(DataResponse { data: folders }))
}

/// POST /api/v1/folders
pub async fn create_folder(
    RequirePro(profile): RequirePro,
    State(state): State<AppState>,
    Json(input): Json<CreateFolder>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;

    let created = FolderRepo::create(&state.pool, profile.id, &input).await?;
    tracing::info!(id = created.id, owner_id = profile.id, "Folder created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/folders/{id}
pub async fn update_folder(
    RequirePro(profile): RequirePro,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFolder>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }

    let updated = FolderRepo::update_for_owner(&state.pool, id, profile.id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Folder",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/folders/{id}
///
/// Prompts referencing the folder are kept; their folder reference clears.
pub async fn delete_folder(
    RequirePro(profile): RequirePro,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FolderRepo::delete_for_owner(&state.pool, id, profile.id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id,
        }));
    }
    tracing::info!(id, owner_id = profile.id, "Folder deleted");
    Ok(StatusCode::NO_CONTENT)
}
