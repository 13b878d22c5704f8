use serde::{Deserialize, Serialize};

use super::sales::SaleStatus;

/// `GET /dashboard/sales-stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesStats {
    pub total: i64,
    pub pending: i64,
    pub paid: i64,
    pub cancelled: i64,
    pub total_revenue: f64,
    pub month_revenue: f64,
    pub average_ticket: f64,
}

/// `GET /dashboard/sales-chart`: daily revenue, `labels[i]` pairs with `values[i]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SalesChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// `GET /dashboard/top-products`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TopProduct {
    pub name: String,
    pub quantity: f64,
    pub revenue: f64,
}

/// `GET /dashboard/recent-sales`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentSale {
    pub id: i64,
    pub customer_name: String,
    pub total: f64,
    pub status: SaleStatus,
    pub sale_date: Option<String>,
}
