//! # Common Error Types
//!
//! Consolidated error handling for the desktop client.
//!
//! This module provides a centralized error type [`AppError`] that covers every failure
//! a user action can end in.
//!
//! ## Error Categories
//!
//! - **Validation**: form input rejected before anything is sent
//! - **Unauthorized**: missing, expired or rejected bearer token (401/403)
//! - **NotFound**: the requested record does not exist (404)
//! - **Server / Network / Decode**: the request failed in transit or on the backend
//! - **FileInput**: a picked file has the wrong type, is too large, or cannot be read
//! - **Storage**: the local session storage could not be read or written
//!
//! ## Handling Policy
//!
//! `Unauthorized` is never shown as a plain error: the app clears the session and
//! returns to the login screen. Every other variant becomes a transient message built
//! with [`AppError::user_message`]. Nothing is retried automatically.
//!
//! ```rust
//! use bizdesk::core::error::AppError;
//!
//! let err = AppError::Server { status: 500, message: None };
//! assert_eq!(err.user_message("Could not save customer"), "Could not save customer");
//!
//! let err = AppError::Server { status: 400, message: Some("Name is required".into()) };
//! assert_eq!(err.user_message("Could not save customer"), "Name is required");
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// `Clone` so results can travel inside [`crate::app::AppEvent`] values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Input validation error, caught before submission.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend rejected the bearer token, or none was sent.
    ///
    /// Carries the server's message when it sent one (bad credentials on login).
    #[error("Unauthorized")]
    Unauthorized(Option<String>),

    /// 404 from the backend.
    #[error("Not found")]
    NotFound,

    /// Non-success status other than 401/403/404.
    #[error("Server error ({status})")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Connection refused, timeout, DNS failure.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body that did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Picked file rejected before upload.
    #[error("File error: {0}")]
    FileInput(String),

    /// Local persistence failure.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text to show the user.
    ///
    /// Validation and file errors carry their own specific reason; server errors use the
    /// body's message when present; everything else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) | AppError::FileInput(msg) => msg.clone(),
            AppError::Server { message: Some(msg), .. } => msg.clone(),
            AppError::Unauthorized(Some(msg)) => msg.clone(),
            AppError::Unauthorized(None) => "Your session has expired. Please sign in again.".to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<crate::services::session::StorageError> for AppError {
    fn from(err: crate::services::session::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_specific_reason() {
        let err = AppError::FileInput("Image must be at most 1.5MB".into());
        assert_eq!(err.user_message("Upload failed"), "Image must be at most 1.5MB");
    }

    #[test]
    fn test_user_message_falls_back_for_transport_errors() {
        assert_eq!(AppError::Network("refused".into()).user_message("Try again"), "Try again");
        assert_eq!(AppError::NotFound.user_message("Missing"), "Missing");
    }

    #[test]
    fn test_unauthorized_without_message() {
        let err = AppError::Unauthorized(None);
        assert!(err.is_unauthorized());
        assert!(err.user_message("x").contains("sign in"));
    }
}
