//! Role enrollment API routes.
//!
//! The admin wizard enrolls an existing user (looked up by email) into a
//! journal-scoped role group. The group for the (journal, role) pair is
//! seeded at journal creation; if it is missing, enrollment fails.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::str::FromStr;
use tracing::info;
use validator::Validate;

use domain::models::{CreateEnrollmentRequest, EnrollmentResponse, JournalRole};
use persistence::repositories::{EnrollmentRepository, JournalRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// POST /api/v1/journals/:journal_id/enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let repo = EnrollmentRepository::new(state.pool.clone());

    let user = repo
        .find_user_by_email(request.email.trim())
        .await?
        .ok_or_else(|| ApiError::NotFound("No user account with that email".to_string()))?;

    let group = repo
        .find_group(journal_id, request.role.as_str())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Role group does not exist for this journal".to_string())
        })?;

    repo.enroll(user.id, group.id).await?;

    info!(
        journal_id,
        user_id = user.id,
        role = %request.role,
        "Enrolled user"
    );

    let response = EnrollmentResponse {
        user_id: user.id,
        email: user.email,
        full_name: user.full_name,
        role: request.role,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/journals/:journal_id/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollments: Vec<EnrollmentResponse> = repo
        .list(journal_id)
        .await?
        .into_iter()
        .filter_map(|row| {
            // Rows with roles outside the known set are skipped rather than
            // failing the whole listing.
            let role = JournalRole::from_str(&row.role).ok()?;
            Some(EnrollmentResponse {
                user_id: row.user_id,
                email: row.email,
                full_name: row.full_name,
                role,
            })
        })
        .collect();

    Ok(Json(enrollments))
}
