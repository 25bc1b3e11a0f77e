//! Route tree assembly.

pub mod auth;
pub mod billing;
pub mod export;
pub mod folders;
pub mod health;
pub mod profile;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /profile                         own profile + usage (requires auth)
///
/// /prompts                         list, create (requires auth)
/// /prompts/{id}                    get, update, delete
/// /prompts/{id}/favorite           toggle favorite (POST)
///
/// /folders                         list, create (Pro only)
/// /folders/{id}                    update, delete (Pro only)
///
/// /export?format=                  download export (Pro only)
///
/// /webhooks/billing                billing provider callbacks (signed)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/prompts", prompts::router())
        .nest("/folders", folders::router())
        .nest("/export", export::router())
        .nest("/webhooks", billing::router())
}
