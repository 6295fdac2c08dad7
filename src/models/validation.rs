use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GymError, Result};

pub const NAME_MAX_LENGTH: usize = 50;
pub const TITLE_MAX_LENGTH: usize = 100;
pub const PLAN_NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PHONE_MAX_LENGTH: usize = 15;
pub const DAYS_OF_WEEK_MAX_LENGTH: usize = 50;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

static LOCAL_PART_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+$").expect("local part pattern is valid")
});

/// Required text of any length.
pub fn validate_required(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::Validation(format!("{} cannot be empty", field_name)));
    }
    Ok(())
}

/// Required text: non-empty and within `max_length` characters.
pub fn validate_text(value: &str, field_name: &str, max_length: usize) -> Result<()> {
    validate_required(value, field_name)?;
    validate_max_length(value, field_name, max_length)
}

pub fn validate_max_length(value: &str, field_name: &str, max_length: usize) -> Result<()> {
    if value.chars().count() > max_length {
        return Err(GymError::Validation(format!(
            "{} cannot be longer than {} characters",
            field_name, max_length
        )));
    }
    Ok(())
}

pub fn validate_optional(value: Option<&str>, field_name: &str, max_length: usize) -> Result<()> {
    match value {
        Some(value) => validate_max_length(value, field_name, max_length),
        None => Ok(()),
    }
}

/// Email validation
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(GymError::Validation("Email cannot be empty".to_string()));
    }

    validate_max_length(email, "Email", EMAIL_MAX_LENGTH)?;

    // Bare "localhost" is accepted as a domain
    let is_local = email
        .rsplit_once('@')
        .is_some_and(|(user, domain)| domain == "localhost" && LOCAL_PART_PATTERN.is_match(user));

    if !is_local && !EMAIL_PATTERN.is_match(email) {
        return Err(GymError::Validation(format!("Invalid email address: {}", email)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("ann.lee@example.com").is_ok());
        assert!(validate_email("coach+yoga@gym.co.uk").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("ann@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ann@localhost").is_ok());
        assert!(validate_email("@localhost").is_err());
        assert!(validate_email("ann@intranet").is_err());
    }

    #[test]
    fn test_text_validation() {
        assert!(validate_text("Yoga", "Name", TITLE_MAX_LENGTH).is_ok());
        assert!(validate_text("   ", "Name", TITLE_MAX_LENGTH).is_err());
        assert!(validate_text(&"x".repeat(51), "First name", NAME_MAX_LENGTH).is_err());
        assert!(validate_text(&"x".repeat(50), "First name", NAME_MAX_LENGTH).is_ok());
    }

    #[test]
    fn test_required_validation() {
        assert!(validate_required("Long form description", "Description").is_ok());
        assert!(validate_required("", "Description").is_err());
        assert!(validate_required("\n\t", "Description").is_err());
    }

    #[test]
    fn test_optional_validation() {
        assert!(validate_optional(None, "Phone", PHONE_MAX_LENGTH).is_ok());
        assert!(validate_optional(Some(""), "Phone", PHONE_MAX_LENGTH).is_ok());
        assert!(validate_optional(Some("+44 20 7946 0958"), "Phone", PHONE_MAX_LENGTH).is_err());
    }
}
