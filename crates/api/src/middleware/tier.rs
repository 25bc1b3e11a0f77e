//! Tier-gate extractor for Pro-only endpoints.
//!
//! Unlike the auth extractor, this one goes back to the database on every
//! request: the Pro flag is read fresh from the profile row, never cached
//! in the token or in memory, so a subscription revoked by a webhook is
//! enforced on the caller's very next request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vault_core::error::CoreError;
use vault_core::tier;
use vault_db::models::profile::Profile;
use vault_db::repositories::ProfileRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an authenticated caller with an active Pro subscription.
///
/// Rejects with 403 `UPGRADE_REQUIRED` otherwise. The freshly loaded
/// profile row is handed to the handler so it does not need a second
/// lookup:
///
/// ```ignore
/// async fn pro_only(RequirePro(profile): RequirePro) -> AppResult<Json<()>> {
///     // profile.is_pro is guaranteed true here
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePro(pub Profile);

impl FromRequestParts<AppState> for RequirePro {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let profile = ProfileRepo::find_by_id(&state.pool, auth.profile_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Profile no longer exists".into()))
            })?;

        if !profile.is_pro {
            return Err(AppError::Core(tier::upgrade_required("This feature")));
        }

        Ok(RequirePro(profile))
    }
}
