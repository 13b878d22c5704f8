//! # Finance Endpoints
//!
//! Customers, catalog and stock, financial entries and quotes. Everything lives under
//! `/finance`.

use reqwest::Method;
use shared::dto::{
    CatalogItem, CatalogItemRequest, Customer, CustomerRequest, FinanceSummary, FinancialEntry,
    FinancialEntryRequest, Quote, QuoteRequest, StockAdjustmentRequest, StockMovement,
};

use super::client::ApiClient;
use crate::core::error::Result;

pub async fn summary(client: &ApiClient) -> Result<FinanceSummary> {
    client.get_json("/finance/summary").await
}

// region: --- Customers

pub async fn list_customers(client: &ApiClient) -> Result<Vec<Customer>> {
    client.get_json("/finance/customers").await
}

#[tracing::instrument(skip_all, fields(name = %request.name))]
pub async fn create_customer(client: &ApiClient, request: CustomerRequest) -> Result<Customer> {
    client.post_json("/finance/customers", &request).await
}

pub async fn delete_customer(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("/finance/customers/{}", id)).await
}

// endregion: --- Customers

// region: --- Catalog & Stock

pub async fn list_catalog(client: &ApiClient) -> Result<Vec<CatalogItem>> {
    client.get_json("/finance/catalog").await
}

#[tracing::instrument(skip_all, fields(name = %request.name))]
pub async fn create_catalog_item(client: &ApiClient, request: CatalogItemRequest) -> Result<CatalogItem> {
    client.post_json("/finance/catalog", &request).await
}

/// `GET /finance/catalog/qrcode/{code}`; 404 surfaces as `AppError::NotFound`.
pub async fn find_by_code(client: &ApiClient, code: &str) -> Result<CatalogItem> {
    let code = encode_path_segment(code.trim());
    client.get_json(&format!("/finance/catalog/qrcode/{}", code)).await
}

#[tracing::instrument(skip(client, request), fields(kind = ?request.movement_type, quantity = request.quantity))]
pub async fn adjust_stock(client: &ApiClient, item_id: i64, request: StockAdjustmentRequest) -> Result<()> {
    client
        .send_empty(
            Method::POST,
            &format!("/finance/catalog/{}/stock-adjust", item_id),
            |b| b.json(&request),
        )
        .await
}

pub async fn list_stock_movements(client: &ApiClient) -> Result<Vec<StockMovement>> {
    client.get_json("/finance/catalog/stock/movements").await
}

// endregion: --- Catalog & Stock

// region: --- Entries

pub async fn list_entries(client: &ApiClient) -> Result<Vec<FinancialEntry>> {
    client.get_json("/finance/entries").await
}

pub async fn create_entry(client: &ApiClient, request: FinancialEntryRequest) -> Result<FinancialEntry> {
    client.post_json("/finance/entries", &request).await
}

// endregion: --- Entries

// region: --- Quotes

pub async fn list_quotes(client: &ApiClient) -> Result<Vec<Quote>> {
    client.get_json("/finance/quotes").await
}

#[tracing::instrument(skip_all, fields(customer = %request.customer_name, items = request.items.len()))]
pub async fn create_quote(client: &ApiClient, request: QuoteRequest) -> Result<Quote> {
    client.post_json("/finance/quotes", &request).await
}

pub async fn delete_quote(client: &ApiClient, id: i64) -> Result<()> {
    client.delete(&format!("/finance/quotes/{}", id)).await
}

pub async fn quote_pdf(client: &ApiClient, id: i64) -> Result<Vec<u8>> {
    client.get_bytes(&format!("/finance/quotes/{}/pdf", id)).await
}

// endregion: --- Quotes

/// Percent-encode everything outside the unreserved URL set.
fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("7891000055123"), "7891000055123");
        assert_eq!(encode_path_segment("SKU 1/2"), "SKU%201%2F2");
    }
}
