//! Settings area API routes.
//!
//! Each area (masthead, contact, appearance, workflow) is read as a merged
//! view of schema defaults and persisted rows, and written as a validated
//! batch upsert. Validation gates the save as a whole: a body with any
//! invalid field performs no write.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use domain::models::{SettingsArea, DEFAULT_LOCALE};
use domain::services::settings_form;
use persistence::repositories::{JournalRepository, JournalSettingsRepository};

use crate::app::AppState;
use crate::error::ApiError;

fn parse_area(area: &str) -> Result<SettingsArea, ApiError> {
    area.parse()
        .map_err(|_| ApiError::NotFound(format!("Unknown settings area: {}", area)))
}

async fn ensure_journal_exists(state: &AppState, journal_id: i64) -> Result<(), ApiError> {
    let repo = JournalRepository::new(state.pool.clone());
    if repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }
    Ok(())
}

/// GET /api/v1/journals/:journal_id/settings/:area
pub async fn get_area_settings(
    State(state): State<AppState>,
    Path((journal_id, area)): Path<(i64, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let area = parse_area(&area)?;
    ensure_journal_exists(&state, journal_id).await?;

    let repo = JournalSettingsRepository::new(state.pool.clone());
    let stored = repo.get_map(journal_id, DEFAULT_LOCALE).await?;

    let view = settings_form::resolve_area(area, &stored);
    if !view.diagnostics.is_empty() {
        warn!(
            journal_id,
            area = %area,
            degraded_fields = view.diagnostics.len(),
            "Stored settings failed to decode, serving defaults for those fields"
        );
    }

    Ok(Json(view))
}

/// PUT /api/v1/journals/:journal_id/settings/:area
pub async fn update_area_settings(
    State(state): State<AppState>,
    Path((journal_id, area)): Path<(i64, String)>,
    Json(body): Json<serde_json::Map<String, serde_json::Value>>,
) -> Result<impl IntoResponse, ApiError> {
    let area = parse_area(&area)?;
    ensure_journal_exists(&state, journal_id).await?;

    let writes = settings_form::validate_patch(area, &body).map_err(ApiError::from)?;

    let entries: Vec<(String, String)> = writes
        .iter()
        .map(|(name, value)| (name.clone(), value.encode()))
        .collect();

    let repo = JournalSettingsRepository::new(state.pool.clone());
    repo.upsert_many(journal_id, DEFAULT_LOCALE, &entries)
        .await?;

    info!(
        journal_id,
        area = %area,
        fields = entries.len(),
        "Saved settings"
    );

    let stored = repo.get_map(journal_id, DEFAULT_LOCALE).await?;
    Ok(Json(settings_form::resolve_area(area, &stored)))
}
