//! Login, registration and password recovery drafts.

use crate::utils::validation::{validate_email, validate_password, validate_required, ValidationResult};

fn first_error(results: &[ValidationResult]) -> Result<(), String> {
    match results.iter().find_map(|r| r.error.clone()) {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), String> {
        first_error(&[
            validate_email(&self.email),
            validate_required(&self.password, "Password"),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), String> {
        first_error(&[
            validate_required(&self.name, "Name"),
            validate_email(&self.email),
            validate_password(&self.password),
        ])?;
        if self.password != self.confirm_password {
            return Err("Passwords don't match".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), String> {
        first_error(&[validate_email(&self.email)])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), String> {
        first_error(&[
            validate_required(&self.token, "Reset token"),
            validate_password(&self.new_password),
        ])?;
        if self.new_password != self.confirm_password {
            return Err("Passwords don't match".to_string());
        }
        Ok(())
    }
}
