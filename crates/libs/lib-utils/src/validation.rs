//! # Validation Utilities
//!
//! Input validation helpers shared by the client forms.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check: one `@`, a dot in the domain part).
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("Invalid email format".to_string()),
    }
}

/// Validate minimum length, in characters.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("owner@shop.com.br").is_ok());
        assert!(validate_email("owner@shop").is_err());
        assert!(validate_email("@shop.com").is_err());
        assert!(validate_email("a@b@shop.com").is_err());
    }

    #[test]
    fn test_validate_min_length_counts_chars() {
        assert!(validate_min_length("sênha1", 6, "Password").is_ok());
        assert_eq!(
            validate_min_length("abc", 6, "Password"),
            Err("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_validate_not_empty_trims() {
        assert!(validate_not_empty("   ", "Name").is_err());
        assert!(validate_not_empty(" x ", "Name").is_ok());
    }
}
