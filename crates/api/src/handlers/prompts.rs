//! Handlers for the `/prompts` resource.
//!
//! Prompts are available on both tiers; the free tier is capped at
//! [`vault_core::tier::FREE_PROMPT_LIMIT`] records, enforced by the store
//! layer's conditional insert and surfaced as the upgrade-prompt error
//! kind. Listing returns everything the caller owns -- search and
//! favorite/folder filtering are a client concern.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vault_core::error::CoreError;
use vault_core::tags::normalize_tags;
use vault_core::tier;
use vault_core::types::DbId;
use vault_db::models::prompt::{CreatePrompt, UpdatePrompt};
use vault_db::repositories::{FolderRepo, ProfileRepo, PromptRepo};
use vault_db::repositories::prompt_repo::PromptInsert;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject missing title or content.
fn validate_fields(title: &str, content: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if content.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Content is required".into(),
        )));
    }
    Ok(())
}

/// A prompt may only be filed into a folder the caller owns.
async fn ensure_folder_owned(
    pool: &sqlx::PgPool,
    folder_id: Option<DbId>,
    owner_id: DbId,
) -> AppResult<()> {
    if let Some(folder_id) = folder_id {
        FolderRepo::find_for_owner(pool, folder_id, owner_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFound {
                    entity: "Folder",
                    id: folder_id,
                })
            })?;
    }
    Ok(())
}

/// GET /api/v1/prompts
///
/// All of the caller's prompts, newest first, with folder names resolved.
pub async fn list_prompts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let prompts = PromptRepo::list_with_folder_for_owner(&state.pool, auth.profile_id).await?;
    Ok(Json(DataResponse { data: prompts }))
}

/// POST /api/v1/prompts
///
/// The caller's tier is re-read from the profile row to pick the cap, so
/// an upgrade (or cancellation) applies to the very next create.
pub async fn create_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePrompt>,
) -> AppResult<impl IntoResponse> {
    validate_fields(&input.title, &input.content)?;
    input.tags = normalize_tags(input.tags);
    ensure_folder_owned(&state.pool, input.folder_id, auth.profile_id).await?;

    let profile = ProfileRepo::find_by_id(&state.pool, auth.profile_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Profile no longer exists".into()))
        })?;
    let max_prompts = tier::prompt_limit(profile.is_pro);

    match PromptRepo::create(&state.pool, auth.profile_id, &input, max_prompts).await? {
        PromptInsert::Created(prompt) => {
            tracing::info!(id = prompt.id, owner_id = auth.profile_id, "Prompt created");
            Ok((StatusCode::CREATED, Json(DataResponse { data: prompt })))
        }
        PromptInsert::LimitReached => Err(AppError::Core(tier::prompt_limit_reached())),
    }
}

/// GET /api/v1/prompts/{id}
pub async fn get_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = PromptRepo::find_for_owner(&state.pool, id, auth.profile_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Prompt",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: prompt }))
}

/// PUT /api/v1/prompts/{id}
///
/// Full replace; omitting `folder_id` clears the folder reference.
pub async fn update_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePrompt>,
) -> AppResult<impl IntoResponse> {
    validate_fields(&input.title, &input.content)?;
    input.tags = normalize_tags(input.tags);
    ensure_folder_owned(&state.pool, input.folder_id, auth.profile_id).await?;

    let updated = PromptRepo::update_for_owner(&state.pool, id, auth.profile_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Prompt",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/prompts/{id}/favorite
///
/// Flip the favorite flag, returning the updated prompt.
pub async fn toggle_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = PromptRepo::toggle_favorite_for_owner(&state.pool, id, auth.profile_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Prompt",
                id,
            })
        })?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/prompts/{id}
///
/// Immediate and permanent; there is no trash.
pub async fn delete_prompt(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PromptRepo::delete_for_owner(&state.pool, id, auth.profile_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }));
    }
    tracing::info!(id, owner_id = auth.profile_id, "Prompt deleted");
    Ok(StatusCode::NO_CONTENT)
}
