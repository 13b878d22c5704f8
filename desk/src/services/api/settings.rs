//! System configuration endpoints.

use shared::dto::SystemConfig;

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn get_settings(client: &ApiClient) -> Result<SystemConfig> {
    client.get_json("/settings").await
}

#[tracing::instrument(skip_all, fields(company = %config.company_name))]
pub async fn save_settings(client: &ApiClient, config: SystemConfig) -> Result<SystemConfig> {
    client.post_json("/settings", &config).await
}
