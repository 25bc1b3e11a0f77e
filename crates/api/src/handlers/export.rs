//! Handler for the `/export` download endpoint.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use vault_core::export::{self, ExportFormat, ExportPrompt};
use vault_db::repositories::PromptRepo;

use crate::error::AppResult;
use crate::middleware::tier::RequirePro;
use crate::state::AppState;

/// Query parameters for the export endpoint (`?format=json|csv|markdown|md`).
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

/// GET /api/v1/export
///
/// Pro-only (the [`RequirePro`] extractor denies free-tier callers before
/// any prompt is read). The format tag is validated before the store is
/// touched; the default is `json`.
pub async fn export_prompts(
    RequirePro(profile): RequirePro,
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let format = ExportFormat::parse(params.format.as_deref().unwrap_or("json"))?;

    let prompts = PromptRepo::list_with_folder_for_owner(&state.pool, profile.id).await?;
    let records: Vec<ExportPrompt> = prompts
        .into_iter()
        .map(|p| ExportPrompt {
            title: p.title,
            content: p.content,
            tags: p.tags,
            folder: p.folder_name,
            is_favorite: p.is_favorite,
            created_at: p.created_at,
        })
        .collect();

    let payload = export::render(&records, format, chrono::Utc::now())?;

    tracing::info!(
        owner_id = profile.id,
        count = records.len(),
        format = payload.content_type,
        "Prompts exported"
    );

    Ok((
        [
            (header::CONTENT_TYPE, payload.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", payload.filename),
            ),
        ],
        payload.body,
    ))
}
