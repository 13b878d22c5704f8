use serde::{Deserialize, Serialize};

/// Sale settlement status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

impl SaleStatus {
    pub fn all() -> &'static [SaleStatus] {
        &[SaleStatus::Pending, SaleStatus::Paid, SaleStatus::Cancelled]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::Paid => "Paid",
            SaleStatus::Cancelled => "Cancelled",
        }
    }

    /// Wire value, used as a query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "PENDING",
            SaleStatus::Paid => "PAID",
            SaleStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Money,
    CreditCard,
    DebitCard,
    Pix,
    BankTransfer,
    Check,
    Other,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Money,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::Pix,
            PaymentMethod::BankTransfer,
            PaymentMethod::Check,
            PaymentMethod::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Money => "Cash",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::DebitCard => "Debit card",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Sale {
    pub id: i64,
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub sale_date: Option<String>,
    pub status: SaleStatus,
    pub items: Vec<SaleItem>,
    pub total: f64,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleItem {
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub description: String,
    pub unit: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// Create/update payload for `POST /finance/sales` and `PUT /finance/sales/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub sale_date: String,
    pub status: SaleStatus,
    pub items: Vec<SaleItemRequest>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaleItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// List filters for `GET /finance/sales`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleFilter {
    pub status: Option<SaleStatus>,
    pub search: Option<String>,
}

impl SaleFilter {
    /// Query pairs, skipping unset and blank values
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_skips_blank_search() {
        let filter = SaleFilter {
            status: Some(SaleStatus::Paid),
            search: Some("   ".into()),
        };
        assert_eq!(filter.query_pairs(), vec![("status", "PAID".to_string())]);
    }

    #[test]
    fn test_sale_request_serializes_status() {
        let req = SaleRequest {
            customer_name: "Venda PDV".into(),
            sale_date: "2024-05-01".into(),
            status: SaleStatus::Paid,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["customerName"], "Venda PDV");
        assert!(json.get("customerId").is_none());
    }
}
