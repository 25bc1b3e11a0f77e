//! Handler for the `/profile` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vault_core::error::CoreError;
use vault_core::tier;
use vault_db::models::profile::ProfileResponse;
use vault_db::repositories::{ProfileRepo, PromptRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The caller's profile plus the usage numbers the dashboard renders
/// (`N / 50` counter for free users, unlimited for Pro).
#[derive(Debug, Serialize)]
pub struct ProfileWithUsage {
    #[serde(flatten)]
    pub profile: ProfileResponse,
    pub prompt_count: i64,
    /// `null` for Pro users (unlimited).
    pub prompt_limit: Option<i64>,
}

/// GET /api/v1/profile
///
/// The authenticated caller's own profile. No password hash, no raw billing
/// references.
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<ProfileWithUsage>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, auth.profile_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: auth.profile_id,
            })
        })?;

    let prompt_count = PromptRepo::count_for_owner(&state.pool, auth.profile_id).await?;
    let prompt_limit = tier::prompt_limit(profile.is_pro);

    Ok(Json(DataResponse {
        data: ProfileWithUsage {
            profile: profile.into(),
            prompt_count,
            prompt_limit,
        },
    }))
}
