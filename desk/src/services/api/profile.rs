//! Profile endpoints.

use shared::dto::{Profile, UpdateProfileRequest, UpdateProfileResponse};

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn get_profile(client: &ApiClient) -> Result<Profile> {
    client.get_json("/profile").await
}

#[tracing::instrument(skip_all)]
pub async fn update_profile(client: &ApiClient, request: UpdateProfileRequest) -> Result<UpdateProfileResponse> {
    client.put_json("/profile", &request).await
}
