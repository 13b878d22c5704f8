//! # Sales Endpoints

use reqwest::Method;
use shared::dto::{Sale, SaleFilter, SaleRequest, SaleStatus};

use super::client::ApiClient;
use crate::core::error::Result;

/// `GET /finance/sales`, optionally filtered by status and a free-text search.
pub async fn list_sales(client: &ApiClient, filter: SaleFilter) -> Result<Vec<Sale>> {
    let query = filter.query_pairs();
    client.get_json_query("/finance/sales", &query).await
}

#[tracing::instrument(skip_all, fields(customer = %request.customer_name, total = request.total))]
pub async fn create_sale(client: &ApiClient, request: SaleRequest) -> Result<Sale> {
    client.post_json("/finance/sales", &request).await
}

#[tracing::instrument(skip(client, request))]
pub async fn update_sale(client: &ApiClient, id: i64, request: SaleRequest) -> Result<Sale> {
    client.put_json(&format!("/finance/sales/{}", id), &request).await
}

pub async fn delete_sale(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("/finance/sales/{}", id)).await
}

/// `PATCH /finance/sales/{id}/status?status=...`
#[tracing::instrument(skip(client))]
pub async fn update_sale_status(client: &ApiClient, id: i64, status: SaleStatus) -> Result<()> {
    client
        .send_empty(Method::PATCH, &format!("/finance/sales/{}/status", id), |b| {
            b.query(&[("status", status.as_str())])
        })
        .await
}

pub async fn sale_pdf(client: &ApiClient, id: i64) -> Result<Vec<u8>> {
    client.get_bytes(&format!("/finance/sales/{}/pdf", id)).await
}
