//! Journal admin API routes.
//!
//! Journal creation is the first step of the admin wizard: the journal row,
//! its masthead title setting and its default role groups are written in one
//! transaction by the repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use validator::Validate;

use domain::models::{CreateJournalRequest, JournalResponse, UpdateJournalRequest};
use persistence::repositories::JournalRepository;

use crate::app::AppState;
use crate::error::{is_unique_violation, ApiError};

/// POST /api/v1/journals
pub async fn create_journal(
    State(state): State<AppState>,
    Json(request): Json<CreateJournalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let repo = JournalRepository::new(state.pool.clone());
    let journal = repo
        .create(&request.path, request.enabled, request.title.trim())
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                ApiError::Conflict("Path already in use".to_string())
            } else {
                err.into()
            }
        })?;

    info!(journal_id = journal.id, path = %journal.path, "Created journal");

    let response = JournalResponse::from(domain::models::Journal::from(journal));
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/journals
pub async fn list_journals(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = JournalRepository::new(state.pool.clone());
    let journals: Vec<JournalResponse> = repo
        .list()
        .await?
        .into_iter()
        .map(|entity| JournalResponse::from(domain::models::Journal::from(entity)))
        .collect();
    Ok(Json(journals))
}

/// GET /api/v1/journals/:journal_id
pub async fn get_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = JournalRepository::new(state.pool.clone());
    let journal = repo
        .find_by_id(journal_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal not found".to_string()))?;
    Ok(Json(JournalResponse::from(domain::models::Journal::from(
        journal,
    ))))
}

/// PATCH /api/v1/journals/:journal_id
pub async fn update_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
    Json(request): Json<UpdateJournalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = JournalRepository::new(state.pool.clone());
    let journal = repo
        .set_enabled(journal_id, request.enabled)
        .await?
        .ok_or_else(|| ApiError::NotFound("Journal not found".to_string()))?;

    info!(journal_id, enabled = journal.enabled, "Updated journal");

    Ok(Json(JournalResponse::from(domain::models::Journal::from(
        journal,
    ))))
}
