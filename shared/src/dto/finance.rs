//! Finance module DTOs: customers, catalog, stock, financial entries, quotes and the
//! monthly summary.

use serde::{Deserialize, Serialize};

/// Catalog item kind
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    #[default]
    Product,
    Service,
}

impl ItemType {
    pub fn all() -> &'static [ItemType] {
        &[ItemType::Product, ItemType::Service]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Product => "Product",
            ItemType::Service => "Service",
        }
    }
}

/// Financial entry direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    #[default]
    Income,
    Expense,
}

impl EntryType {
    pub fn all() -> &'static [EntryType] {
        &[EntryType::Income, EntryType::Expense]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Income => "Income",
            EntryType::Expense => "Expense",
        }
    }
}

/// Financial entry settlement status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Paid,
}

impl EntryStatus {
    pub fn all() -> &'static [EntryStatus] {
        &[EntryStatus::Pending, EntryStatus::Paid]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "Pending",
            EntryStatus::Paid => "Paid",
        }
    }
}

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl QuoteStatus {
    pub fn all() -> &'static [QuoteStatus] {
        &[
            QuoteStatus::Draft,
            QuoteStatus::Sent,
            QuoteStatus::Approved,
            QuoteStatus::Rejected,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Sent => "Sent",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

/// Stock movement direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockMovementType {
    #[default]
    In,
    Out,
    /// Sets the stock to an absolute quantity
    Adjust,
}

impl StockMovementType {
    pub fn all() -> &'static [StockMovementType] {
        &[
            StockMovementType::In,
            StockMovementType::Out,
            StockMovementType::Adjust,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockMovementType::In => "In",
            StockMovementType::Out => "Out",
            StockMovementType::Adjust => "Adjust",
        }
    }
}

/// Monthly finance summary (`GET /finance/summary`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceSummary {
    pub month: String,
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub monthly_balance: f64,
    pub total_pending: f64,
    pub paid_balance: f64,
    pub approved_quotes: i64,
    pub open_quotes: i64,
    pub customers: i64,
    /// Number of catalog items at or below their minimum stock
    pub low_stock: i64,
}

/// Customer record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

/// Product or service offered for sale
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub sku: Option<String>,
    pub qr_code: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub unit: Option<String>,
    pub unit_price: f64,
    pub cost_price: Option<f64>,
    pub description: Option<String>,
    pub product_image_base64: Option<String>,
    pub stock_quantity: f64,
    pub min_stock: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub unit: String,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image_base64: Option<String>,
    pub stock_quantity: f64,
    pub min_stock: f64,
}

/// Stock adjustment (`POST /finance/catalog/{id}/stock-adjust`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockAdjustmentRequest {
    #[serde(rename = "type")]
    pub movement_type: StockMovementType,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Stock movement history row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StockMovement {
    pub id: i64,
    pub catalog_item_id: Option<i64>,
    pub item_name: String,
    #[serde(rename = "type")]
    pub movement_type: StockMovementType,
    pub quantity: f64,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

/// Income or expense record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub due_date: Option<String>,
    pub paid_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntryRequest {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub amount: f64,
    pub category: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
}

/// Quote header with its items
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub status: QuoteStatus,
    pub issue_date: Option<String>,
    pub valid_until: Option<String>,
    pub notes: Option<String>,
    pub total: f64,
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteItem {
    pub id: Option<i64>,
    pub catalog_item_id: Option<i64>,
    pub description: String,
    pub unit: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub status: QuoteStatus,
    pub issue_date: String,
    pub valid_until: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<QuoteItemRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_item_id: Option<i64>,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_item_decodes_type_field() {
        let json = r#"{"id":3,"name":"Bolt","type":"SERVICE","unitPrice":15.5,"stockQuantity":2,"minStock":5}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Service);
        assert_eq!(item.unit_price, 15.5);
        assert_eq!(item.min_stock, 5.0);
        assert!(item.unit.is_none());
    }

    #[test]
    fn test_stock_adjustment_wire_shape() {
        let req = StockAdjustmentRequest {
            movement_type: StockMovementType::Adjust,
            quantity: 4.0,
            reason: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "ADJUST");
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: FinanceSummary = serde_json::from_str(r#"{"monthlyIncome":300.0,"lowStock":2}"#).unwrap();
        assert_eq!(summary.monthly_income, 300.0);
        assert_eq!(summary.monthly_expense, 0.0);
        assert_eq!(summary.low_stock, 2);
    }
}
