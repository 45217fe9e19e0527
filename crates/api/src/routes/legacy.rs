//! Legacy settings import route.
//!
//! One-time migration path for clients that still hold settings in
//! browser-local storage from the pre-database release. The server imports
//! only fields with no existing database row, so stale local state can
//! never overwrite server state, and running the import twice is a no-op.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::info;

use domain::models::{LegacyImportRequest, LegacyImportResponse, DEFAULT_LOCALE};
use domain::services::legacy_import;
use persistence::repositories::{JournalRepository, JournalSettingsRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// POST /api/v1/journals/:journal_id/legacy-import
pub async fn import_legacy_settings(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
    Json(request): Json<LegacyImportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let settings_repo = JournalSettingsRepository::new(state.pool.clone());
    let existing = settings_repo
        .existing_names(journal_id, DEFAULT_LOCALE)
        .await?;

    let plan = legacy_import::plan_import(&request.entries, &existing);

    let entries: Vec<(String, String)> = plan
        .writes
        .iter()
        .map(|(name, value)| (name.clone(), value.encode()))
        .collect();

    // Insert-if-absent, so a concurrent writer's row survives even if it
    // appeared after the plan was computed.
    settings_repo
        .insert_missing(journal_id, DEFAULT_LOCALE, &entries)
        .await?;

    info!(
        journal_id,
        imported_keys = plan.imported.len(),
        skipped_keys = plan.skipped.len(),
        fields = entries.len(),
        "Ran legacy settings import"
    );

    Ok(Json(LegacyImportResponse {
        imported: plan.imported,
        skipped: plan.skipped,
    }))
}
