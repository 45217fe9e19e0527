//! Section admin API routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use validator::Validate;

use domain::models::{
    default_abbreviation, CreateSectionRequest, Section, SectionResponse,
    SetSectionEnabledRequest,
};
use persistence::repositories::{JournalRepository, SectionRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// GET /api/v1/journals/:journal_id/sections
pub async fn list_sections(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let repo = SectionRepository::new(state.pool.clone());
    let sections: Vec<SectionResponse> = repo
        .list_with_settings(journal_id)
        .await?
        .into_iter()
        .map(|row| SectionResponse::from(Section::from(row)))
        .collect();

    Ok(Json(sections))
}

/// POST /api/v1/journals/:journal_id/sections
pub async fn create_section(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
    Json(request): Json<CreateSectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let title = request.title.trim().to_string();
    let abbreviation = match request.abbreviation.as_deref() {
        Some(abbrev) if !abbrev.trim().is_empty() => abbrev.trim().to_string(),
        _ => default_abbreviation(&title),
    };
    let policy = request.policy.unwrap_or_default();

    let repo = SectionRepository::new(state.pool.clone());
    let row = repo
        .create(journal_id, &title, &abbreviation, &policy)
        .await?;

    info!(
        journal_id,
        section_id = row.section.id,
        seq = row.section.seq,
        "Created section"
    );

    let response = SectionResponse::from(Section::from(row));
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/v1/sections/:section_id/enabled
pub async fn set_section_enabled(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
    Json(request): Json<SetSectionEnabledRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = SectionRepository::new(state.pool.clone());

    let updated = repo
        .set_enabled(section_id, request.enabled)
        .await?
        .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?;

    info!(
        section_id,
        enabled = !updated.is_inactive,
        "Updated section enabled state"
    );

    let row = repo
        .find_with_settings(section_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Section not found".to_string()))?;

    Ok(Json(SectionResponse::from(Section::from(row))))
}

/// DELETE /api/v1/sections/:section_id
pub async fn delete_section(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = SectionRepository::new(state.pool.clone());
    if !repo.delete(section_id).await? {
        return Err(ApiError::NotFound("Section not found".to_string()));
    }

    info!(section_id, "Deleted section");
    Ok(StatusCode::NO_CONTENT)
}
