//! Category domain models.
//!
//! Categories are topical classifications for a journal's content,
//! independent of sections. The hierarchy is flat: `parent_id` is always 0.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Root parent id for the flat category hierarchy.
pub const ROOT_PARENT_ID: i64 = 0;

/// A category merged with its settings rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Category {
    pub id: i64,
    pub journal_id: i64,
    /// URL slug, unique within the journal.
    pub path: String,
    pub parent_id: i64,
    pub seq: i64,
    pub title: String,
    pub description: String,
}

/// POST request to create a category.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCategoryRequest {
    #[validate(custom(function = "validate_category_title"))]
    pub title: String,

    #[validate(custom(function = "shared::validation::validate_path_slug"))]
    pub path: String,

    pub description: Option<String>,
}

fn validate_category_title(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Category title is required".into());
        return Err(err);
    }
    Ok(())
}

/// API representation of a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryResponse {
    pub id: i64,
    pub journal_id: i64,
    pub path: String,
    pub parent_id: i64,
    pub seq: i64,
    pub title: String,
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            journal_id: category.journal_id,
            path: category.path,
            parent_id: category.parent_id,
            seq: category.seq,
            title: category.title,
            description: category.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_request_valid() {
        let request = CreateCategoryRequest {
            title: "Health Sciences".to_string(),
            path: "health-sciences".to_string(),
            description: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_category_request_blank_title() {
        let request = CreateCategoryRequest {
            title: " ".to_string(),
            path: "health-sciences".to_string(),
            description: None,
        };
        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let title_errors = field_errors.get("title").unwrap();
        assert_eq!(
            title_errors[0].message.as_ref().unwrap().to_string(),
            "Category title is required"
        );
    }

    #[test]
    fn test_create_category_request_bad_path() {
        let request = CreateCategoryRequest {
            title: "Health Sciences".to_string(),
            path: "Health Sciences".to_string(),
            description: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("path"));
    }
}
