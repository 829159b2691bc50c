//! Task payload validation
//!
//! Explicit validation invoked before any store call. Each helper trims its
//! input, appends violations to the shared list, and returns the value that
//! would be persisted if validation succeeds as a whole.

use taskhub_types::{FieldError, TaskStatus};

/// Maximum title length in characters, after trimming
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum description length in characters, after trimming
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate and trim a title
pub fn validate_title(title: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(
            "title",
            "required",
            "title must not be empty",
        ));
    } else if trimmed.chars().count() > MAX_TITLE_LENGTH {
        errors.push(FieldError::new(
            "title",
            "too_long",
            format!("title must be at most {MAX_TITLE_LENGTH} characters"),
        ));
    }
    trimmed.to_string()
}

/// Validate and trim a description; a whitespace-only value clears the field
pub fn validate_description(description: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push(FieldError::new(
            "description",
            "too_long",
            format!("description must be at most {MAX_DESCRIPTION_LENGTH} characters"),
        ));
    }
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a status value against the canonical enumeration
pub fn parse_status(status: &str, errors: &mut Vec<FieldError>) -> TaskStatus {
    match status.parse() {
        Ok(status) => status,
        Err(_) => {
            let accepted: Vec<&str> = TaskStatus::ALL.iter().map(TaskStatus::as_str).collect();
            errors.push(FieldError::new(
                "status",
                "invalid_value",
                format!("status must be one of {}", accepted.join(", ")),
            ));
            TaskStatus::default()
        }
    }
}
