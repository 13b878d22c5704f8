//! # Authentication Endpoints
//!
//! Login, registration, password recovery and the current-user lookup.

use shared::dto::{
    AuthResponse, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, MessageResponse,
    Profile, RegisterRequest, ResetPasswordRequest,
};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
///
/// Bad credentials come back as `Unauthorized(Some(message))`.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let result = client.post_json::<_, AuthResponse>("/auth/login", &request).await;

    match &result {
        Ok(auth) => tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            expires_in = auth.expires_in,
            "Login successful"
        ),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn register(client: &ApiClient, name: String, email: String, password: String) -> Result<MessageResponse> {
    let request = RegisterRequest { name, email, password };
    client.post_json("/auth/register", &request).await
}

pub async fn forgot_password(client: &ApiClient, email: String) -> Result<ForgotPasswordResponse> {
    client
        .post_json("/auth/forgot-password", &ForgotPasswordRequest { email })
        .await
}

pub async fn reset_password(client: &ApiClient, token: String, new_password: String) -> Result<MessageResponse> {
    client
        .post_json("/auth/reset-password", &ResetPasswordRequest { token, new_password })
        .await
}

/// Owner of the current token
pub async fn me(client: &ApiClient) -> Result<Profile> {
    client.get_json("/auth/me").await
}
