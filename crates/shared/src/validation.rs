//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Simple `local@domain.tld` shape. Intentionally loose: the mail
    /// subsystem is the authority on deliverability, this only catches
    /// obvious typos before they are persisted.
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").unwrap();

    /// URL path slugs: lowercase alphanumeric segments joined by hyphens.
    pub static ref PATH_SLUG_REGEX: Regex =
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Validates an email address against the `local@domain.tld` pattern.
pub fn validate_email_format(value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_format");
        err.message = Some("Must be a valid email address".into());
        Err(err)
    }
}

/// Validates a URL path slug (lowercase alphanumeric and hyphens).
pub fn validate_path_slug(value: &str) -> Result<(), ValidationError> {
    if PATH_SLUG_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("path_slug");
        err.message = Some("Must contain only lowercase letters, numbers and hyphens".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Email tests
    #[test]
    fn test_validate_email_format() {
        assert!(validate_email_format("a@b.co").is_ok());
        assert!(validate_email_format("editor@journal.example.org").is_ok());
        assert!(validate_email_format("not-an-email").is_err());
        assert!(validate_email_format("missing@tld").is_err());
        assert!(validate_email_format("two@@signs.com").is_err());
        assert!(validate_email_format("spaces in@local.com").is_err());
        assert!(validate_email_format("").is_err());
    }

    #[test]
    fn test_validate_email_format_error_message() {
        let err = validate_email_format("not-an-email").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Must be a valid email address"
        );
    }

    // Path slug tests
    #[test]
    fn test_validate_path_slug() {
        assert!(validate_path_slug("health-sciences").is_ok());
        assert!(validate_path_slug("jmir2024").is_ok());
        assert!(validate_path_slug("a").is_ok());
        assert!(validate_path_slug("Health-Sciences").is_err());
        assert!(validate_path_slug("health sciences").is_err());
        assert!(validate_path_slug("-leading").is_err());
        assert!(validate_path_slug("trailing-").is_err());
        assert!(validate_path_slug("double--hyphen").is_err());
        assert!(validate_path_slug("").is_err());
    }

    #[test]
    fn test_validate_path_slug_error_message() {
        let err = validate_path_slug("Not A Slug").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Must contain only lowercase letters, numbers and hyphens"
        );
    }
}
