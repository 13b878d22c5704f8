use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Password recovery request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Password reset with the token received by email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Successful login.
///
/// `expires_in` is a lifetime in seconds, relative to the moment the response is received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: String,
    pub expires_in: i64,
    pub name: String,
    pub email: String,
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Password recovery acknowledgement.
///
/// Development backends echo the reset token so it can be used without an inbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token: Option<String>,
}

/// Error body returned by the backend.
///
/// Controllers use either `message` or `error`; both are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// First non-empty human readable message in the body
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.as_deref().filter(|m| !m.trim().is_empty()))
    }
}

/// User profile cached alongside the session token
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_base64: Option<String>,
}

impl From<&AuthResponse> for SessionUser {
    fn from(auth: &AuthResponse) -> Self {
        Self {
            name: auth.name.clone(),
            email: auth.email.clone(),
            avatar_base64: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_reads_camel_case() {
        let json = r#"{"token":"abc","tokenType":"Bearer","expiresIn":7200,"name":"Ana","email":"ana@x.com"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.expires_in, 7200);
        assert_eq!(auth.token_type, "Bearer");

        let user = SessionUser::from(&auth);
        assert_eq!(user.name, "Ana");
        assert!(user.avatar_base64.is_none());
    }

    #[test]
    fn test_error_response_prefers_message() {
        let both: ErrorResponse = serde_json::from_str(r#"{"message":"m","error":"e"}"#).unwrap();
        assert_eq!(both.text(), Some("m"));

        let only_error: ErrorResponse = serde_json::from_str(r#"{"error":"bad xml"}"#).unwrap();
        assert_eq!(only_error.text(), Some("bad xml"));

        let blank: ErrorResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_session_user_omits_missing_avatar() {
        let user = SessionUser {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            avatar_base64: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatarBase64"));
    }
}
