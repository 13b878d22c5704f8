/// Validation utilities for form input

/// Minimum password length accepted by the backend
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(message) => Self::err(message),
        }
    }
}

/// Non-blank text field
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    ValidationResult::from_result(lib_utils::validate_not_empty(value, field_name))
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    ValidationResult::from_result(lib_utils::validate_email(email))
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }
    ValidationResult::from_result(lib_utils::validate_min_length(password, MIN_PASSWORD_LEN, "Password"))
}

/// Strictly positive amount
pub fn validate_positive(value: f64, field_name: &str) -> ValidationResult {
    if value > 0.0 {
        ValidationResult::ok()
    } else {
        ValidationResult::err(format!("{} must be greater than zero", field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret").is_valid);
        assert!(!validate_password("").is_valid);
        assert!(!validate_password("short").is_valid);
    }

    #[test]
    fn test_required_and_positive() {
        assert!(!validate_required("   ", "Name").is_valid);
        assert_eq!(validate_required("", "Name").error.as_deref(), Some("Name is required"));
        assert!(validate_positive(0.01, "Quantity").is_valid);
        assert!(!validate_positive(0.0, "Quantity").is_valid);
    }
}
