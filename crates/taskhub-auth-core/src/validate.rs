//! Registration input validation
//!
//! Validation runs as an explicit step before any store call, and reports
//! every violated rule at once.

use taskhub_types::FieldError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate registration input, collecting all violations
pub fn validate_registration(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(FieldError::new("email", "required", "email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            "email",
            "invalid_email",
            "email must be a valid email address",
        ));
    }

    if password.is_empty() {
        errors.push(FieldError::new(
            "password",
            "required",
            "password is required",
        ));
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            "too_short",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Syntactic email check: one `@`, a non-empty local part, and a domain
/// containing a dot with non-empty labels. Deliverability is not our
/// problem; this only rejects values that cannot be addresses at all.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
