use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceOrderStatus {
    #[default]
    Pending,
    InProgress,
    Paused,
    Completed,
    Cancelled,
}

impl ServiceOrderStatus {
    pub fn all() -> &'static [ServiceOrderStatus] {
        &[
            ServiceOrderStatus::Pending,
            ServiceOrderStatus::InProgress,
            ServiceOrderStatus::Paused,
            ServiceOrderStatus::Completed,
            ServiceOrderStatus::Cancelled,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Pending => "Pending",
            ServiceOrderStatus::InProgress => "In progress",
            ServiceOrderStatus::Paused => "Paused",
            ServiceOrderStatus::Completed => "Completed",
            ServiceOrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOrder {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub status: ServiceOrderStatus,
    pub start_date: Option<String>,
    pub estimated_end_date: Option<String>,
    pub completed_date: Option<String>,
    pub description: Option<String>,
    pub technician_notes: Option<String>,
    pub assigned_technician: Option<String>,
    pub total: f64,
    pub items: Vec<ServiceOrderItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOrderItem {
    pub id: Option<i64>,
    pub catalog_id: Option<i64>,
    pub item_name: String,
    pub description: Option<String>,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
    pub is_service: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: ServiceOrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_end_date: Option<String>,
    pub description: String,
    pub technician_notes: String,
    pub assigned_technician: String,
    pub items: Vec<ServiceOrderItemRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,
    pub item_name: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub is_service: bool,
}

/// Body of `PUT /finance/service-orders/{id}/status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceOrderStatusUpdate {
    pub status: ServiceOrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_screaming_snake_case() {
        let body = ServiceOrderStatusUpdate {
            status: ServiceOrderStatus::InProgress,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"IN_PROGRESS"}"#);
    }
}
