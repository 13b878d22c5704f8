//! NFe XML import.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use shared::dto::NfeImportResult;

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Upload one NFe XML as multipart field `file`.
#[tracing::instrument(skip(client, content), fields(bytes = content.len()))]
pub async fn upload(client: &ApiClient, file_name: String, content: Vec<u8>) -> Result<NfeImportResult> {
    let part = Part::bytes(content)
        .file_name(file_name)
        .mime_str("text/xml")
        .map_err(|e| AppError::FileInput(e.to_string()))?;
    let form = Form::new().part("file", part);

    let response = client
        .send(Method::POST, "/finance/nfe-import/upload", |b| b.multipart(form))
        .await?;
    let result = response
        .json::<NfeImportResult>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))?;

    tracing::info!(
        imported = result.items_imported,
        updated = result.items_updated,
        "NFe imported"
    );
    Ok(result)
}
