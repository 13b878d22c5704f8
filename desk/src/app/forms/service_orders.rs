//! Service order draft. Rows are line items that also carry a free-text detail and a
//! product/service flag, which follows the catalog entry when one is picked.

use shared::dto::{
    CatalogItem, Customer, ServiceOrderItemRequest, ServiceOrderRequest, ServiceOrderStatus,
};

use crate::core::error::{AppError, Result};
use crate::domain::line_items::LineItem;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOrderRow {
    pub line: LineItem,
    pub details: String,
    pub is_service: bool,
}

impl Default for ServiceOrderRow {
    fn default() -> Self {
        Self {
            line: LineItem::blank(),
            details: String::new(),
            is_service: false,
        }
    }
}

impl ServiceOrderRow {
    pub fn apply_catalog(&mut self, item: &CatalogItem) {
        self.line.apply_catalog(item);
        self.is_service = self.line.is_service();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOrderForm {
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: ServiceOrderStatus,
    pub start_date: String,
    pub estimated_end_date: String,
    pub description: String,
    pub technician_notes: String,
    pub assigned_technician: String,
    pub items: Vec<ServiceOrderRow>,
}

impl Default for ServiceOrderForm {
    fn default() -> Self {
        Self::starting(&lib_utils::today_iso())
    }
}

impl ServiceOrderForm {
    /// New order starting `today`, with no rows.
    pub fn starting(today: &str) -> Self {
        Self {
            customer_id: None,
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_address: String::new(),
            status: ServiceOrderStatus::Pending,
            start_date: today.to_string(),
            estimated_end_date: String::new(),
            description: String::new(),
            technician_notes: String::new(),
            assigned_technician: String::new(),
            items: Vec::new(),
        }
    }

    pub fn select_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.id);
        self.customer_name = customer.name.clone();
        self.customer_phone = customer.phone.clone().unwrap_or_default();
        if let Some(address) = customer.address.as_deref().filter(|a| !a.is_empty()) {
            self.customer_address = address.to_string();
        }
    }

    pub fn push_row(&mut self) {
        self.items.push(ServiceOrderRow::default());
    }

    pub fn remove_row(&mut self, index: usize) -> Option<ServiceOrderRow> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|row| row.line.total()).sum()
    }

    pub fn to_request(&self) -> Result<ServiceOrderRequest> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(AppError::Validation("Customer is required".into()));
        }
        if self.items.iter().any(|row| row.line.description.trim().is_empty()) {
            return Err(AppError::Validation("Every item needs a name".into()));
        }

        let date = |value: &str| Some(value.trim().to_string()).filter(|d| !d.is_empty());

        Ok(ServiceOrderRequest {
            customer_id: self.customer_id,
            customer_name: customer_name.to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_address: self.customer_address.trim().to_string(),
            status: self.status,
            start_date: date(&self.start_date),
            estimated_end_date: date(&self.estimated_end_date),
            description: self.description.trim().to_string(),
            technician_notes: self.technician_notes.trim().to_string(),
            assigned_technician: self.assigned_technician.trim().to_string(),
            items: self
                .items
                .iter()
                .map(|row| ServiceOrderItemRequest {
                    catalog_id: row.line.catalog.map(|c| c.id),
                    item_name: row.line.description.trim().to_string(),
                    description: row.details.trim().to_string(),
                    quantity: row.line.quantity.value(),
                    unit_price: row.line.unit_price.value(),
                    is_service: row.is_service,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::ItemType;

    fn catalog(kind: ItemType) -> CatalogItem {
        CatalogItem {
            id: 21,
            name: "Alignment".into(),
            item_type: kind,
            unit_price: 90.0,
            ..CatalogItem::default()
        }
    }

    #[test]
    fn test_catalog_kind_sets_service_flag() {
        let mut row = ServiceOrderRow::default();
        row.apply_catalog(&catalog(ItemType::Service));
        assert!(row.is_service);

        row.apply_catalog(&catalog(ItemType::Product));
        assert!(!row.is_service);
    }

    #[test]
    fn test_request_from_rows() {
        let mut form = ServiceOrderForm::starting("2024-06-10");
        form.select_customer(&Customer {
            id: 4,
            name: "Carla".into(),
            phone: Some("11 99999-0000".into()),
            ..Customer::default()
        });
        form.push_row();
        form.items[0].apply_catalog(&catalog(ItemType::Service));
        form.items[0].line.quantity.set_raw("2");

        let request = form.to_request().unwrap();

        assert_eq!(request.customer_phone, "11 99999-0000");
        assert_eq!(request.start_date.as_deref(), Some("2024-06-10"));
        assert_eq!(request.estimated_end_date, None);
        assert_eq!(request.items[0].catalog_id, Some(21));
        assert!(request.items[0].is_service);
        assert_eq!(form.total(), 180.0);
    }

    #[test]
    fn test_remove_row_out_of_range() {
        let mut form = ServiceOrderForm::starting("2024-06-10");
        form.push_row();
        assert!(form.remove_row(3).is_none());
        assert!(form.remove_row(0).is_some());
        assert!(form.items.is_empty());
    }

    #[test]
    fn test_customer_required() {
        let form = ServiceOrderForm::starting("2024-06-10");
        assert!(form.to_request().is_err());
    }
}
