//! Field-scoped validation errors
//!
//! Request validation reports every violated rule at once, each scoped to
//! the offending field. The same shape is used by registration and task
//! payload validation.

use serde::{Deserialize, Serialize};

/// A single violated validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
    /// Stable machine-readable code (e.g. `required`, `too_long`)
    pub code: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_json_shape() {
        let err = FieldError::new("title", "too_long", "title must be at most 255 characters");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["field"], "title");
        assert_eq!(value["code"], "too_long");
        assert_eq!(value["message"], "title must be at most 255 characters");
    }
}
