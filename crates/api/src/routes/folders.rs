//! Route definitions for the `/folders` resource (Pro only).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::folders;
use crate::state::AppState;

/// Routes mounted at `/folders`.
///
/// ```text
/// GET    /      -> list_folders
/// POST   /      -> create_folder
/// PUT    /{id}  -> update_folder
/// DELETE /{id}  -> delete_folder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folders::list_folders).post(folders::create_folder))
        .route(
            "/{id}",
            put(folders::update_folder).delete(folders::delete_folder),
        )
}
