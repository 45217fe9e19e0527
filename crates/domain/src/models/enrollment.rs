//! Role enrollment domain models.
//!
//! The admin wizard enrolls an existing user account (looked up by email)
//! into a journal-scoped role group. The group for the (journal, role) pair
//! must already exist; enrollment never creates groups or user accounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Editorial role within a journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalRole {
    Manager,
    Editor,
    Reviewer,
    Author,
}

impl JournalRole {
    /// Roles whose groups are seeded when a journal is created.
    pub const DEFAULTS: [JournalRole; 4] = [
        JournalRole::Manager,
        JournalRole::Editor,
        JournalRole::Reviewer,
        JournalRole::Author,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JournalRole::Manager => "manager",
            JournalRole::Editor => "editor",
            JournalRole::Reviewer => "reviewer",
            JournalRole::Author => "author",
        }
    }
}

impl FromStr for JournalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" => Ok(JournalRole::Manager),
            "editor" => Ok(JournalRole::Editor),
            "reviewer" => Ok(JournalRole::Reviewer),
            "author" => Ok(JournalRole::Author),
            _ => Err(format!("Invalid journal role: {}", s)),
        }
    }
}

impl fmt::Display for JournalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// POST request to enroll a user into a journal role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEnrollmentRequest {
    #[validate(custom(function = "shared::validation::validate_email_format"))]
    pub email: String,

    pub role: JournalRole,
}

/// API representation of an enrollment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrollmentResponse {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub role: JournalRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in JournalRole::DEFAULTS {
            assert_eq!(role.as_str().parse::<JournalRole>().unwrap(), role);
        }
        assert!("publisher".parse::<JournalRole>().is_err());
    }

    #[test]
    fn test_enrollment_request_email_validation() {
        let request = CreateEnrollmentRequest {
            email: "not-an-email".to_string(),
            role: JournalRole::Editor,
        };
        assert!(request.validate().is_err());

        let request = CreateEnrollmentRequest {
            email: "a@b.co".to_string(),
            role: JournalRole::Editor,
        };
        assert!(request.validate().is_ok());
    }
}
