//! Dashboard aggregates.

use shared::dto::{RecentSale, SalesChart, SalesStats, TopProduct};

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn sales_stats(client: &ApiClient) -> Result<SalesStats> {
    client.get_json("/dashboard/sales-stats").await
}

pub async fn sales_chart(client: &ApiClient) -> Result<SalesChart> {
    client.get_json("/dashboard/sales-chart").await
}

pub async fn top_products(client: &ApiClient) -> Result<Vec<TopProduct>> {
    client.get_json("/dashboard/top-products").await
}

pub async fn recent_sales(client: &ApiClient) -> Result<Vec<RecentSale>> {
    client.get_json("/dashboard/recent-sales").await
}
