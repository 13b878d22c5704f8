//! Service order endpoints.

use reqwest::Method;
use shared::dto::{ServiceOrder, ServiceOrderRequest, ServiceOrderStatus, ServiceOrderStatusUpdate};

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn list_service_orders(client: &ApiClient) -> Result<Vec<ServiceOrder>> {
    client.get_json("/finance/service-orders").await
}

#[tracing::instrument(skip_all, fields(customer = %request.customer_name, items = request.items.len()))]
pub async fn create_service_order(client: &ApiClient, request: ServiceOrderRequest) -> Result<ServiceOrder> {
    client.post_json("/finance/service-orders", &request).await
}

#[tracing::instrument(skip(client))]
pub async fn update_status(client: &ApiClient, id: i64, status: ServiceOrderStatus) -> Result<()> {
    let body = ServiceOrderStatusUpdate { status };
    client
        .send_empty(Method::PUT, &format!("/finance/service-orders/{}/status", id), |b| b.json(&body))
        .await
}

pub async fn service_order_pdf(client: &ApiClient, id: i64) -> Result<Vec<u8>> {
    client.get_bytes(&format!("/finance/service-orders/{}/pdf", id)).await
}
