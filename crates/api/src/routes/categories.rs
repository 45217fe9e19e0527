//! Category admin API routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use validator::Validate;

use domain::models::{Category, CategoryResponse, CreateCategoryRequest};
use persistence::repositories::{CategoryRepository, JournalRepository};

use crate::app::AppState;
use crate::error::{is_unique_violation, ApiError};

/// GET /api/v1/journals/:journal_id/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let repo = CategoryRepository::new(state.pool.clone());
    let categories: Vec<CategoryResponse> = repo
        .list_with_settings(journal_id)
        .await?
        .into_iter()
        .map(|row| CategoryResponse::from(Category::from(row)))
        .collect();

    Ok(Json(categories))
}

/// POST /api/v1/journals/:journal_id/categories
pub async fn create_category(
    State(state): State<AppState>,
    Path(journal_id): Path<i64>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let journal_repo = JournalRepository::new(state.pool.clone());
    if journal_repo.find_by_id(journal_id).await?.is_none() {
        return Err(ApiError::NotFound("Journal not found".to_string()));
    }

    let title = request.title.trim().to_string();
    let description = request.description.unwrap_or_default();

    let repo = CategoryRepository::new(state.pool.clone());
    let row = repo
        .create(journal_id, &request.path, &title, &description)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                ApiError::Conflict("Path already in use".to_string())
            } else {
                err.into()
            }
        })?;

    info!(
        journal_id,
        category_id = row.category.id,
        path = %row.category.path,
        seq = row.category.seq,
        "Created category"
    );

    let response = CategoryResponse::from(Category::from(row));
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/v1/categories/:category_id
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = CategoryRepository::new(state.pool.clone());
    if !repo.delete(category_id).await? {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }

    info!(category_id, "Deleted category");
    Ok(StatusCode::NO_CONTENT)
}
