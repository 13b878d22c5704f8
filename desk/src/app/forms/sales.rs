//! Sale create/edit draft with per-field validation.

use std::collections::HashMap;

use shared::dto::{Customer, PaymentMethod, Sale, SaleItemRequest, SaleRequest, SaleStatus};

use crate::domain::line_items::{CatalogRef, LineItem, LineItems, DEFAULT_UNIT};

/// Field-keyed validation messages, e.g. `item-0-quantity`.
pub type FieldErrors = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    /// Sale being edited; `None` creates a new one
    pub editing: Option<i64>,
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub sale_date: String,
    pub status: SaleStatus,
    pub payment_method: Option<PaymentMethod>,
    pub notes: String,
    pub items: LineItems,
}

impl Default for SaleForm {
    fn default() -> Self {
        Self::starting(&lib_utils::today_iso())
    }
}

impl SaleForm {
    pub fn starting(today: &str) -> Self {
        Self {
            editing: None,
            customer_id: None,
            customer_name: String::new(),
            sale_date: today.to_string(),
            status: SaleStatus::Pending,
            payment_method: None,
            notes: String::new(),
            items: LineItems::default(),
        }
    }

    /// Draft pre-filled from an existing sale.
    pub fn edit(sale: &Sale) -> Self {
        let rows = sale
            .items
            .iter()
            .map(|item| {
                let mut line = LineItem::new(
                    item.description.clone(),
                    item.unit.clone().unwrap_or_else(|| DEFAULT_UNIT.to_string()),
                    item.quantity,
                    item.unit_price,
                );
                line.catalog = item.product_id.map(|id| CatalogRef {
                    id,
                    kind: Default::default(),
                });
                line
            })
            .collect();

        Self {
            editing: Some(sale.id),
            customer_id: sale.customer_id.clone().filter(|id| !id.is_empty()),
            customer_name: sale.customer_name.clone(),
            sale_date: sale
                .sale_date
                .as_deref()
                .map(|d| d.get(..10).unwrap_or(d))
                .unwrap_or_default()
                .to_string(),
            status: sale.status,
            payment_method: sale.payment_method,
            notes: sale.notes.clone().unwrap_or_default(),
            items: LineItems::from_rows(rows),
        }
    }

    pub fn select_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.id.to_string());
        self.customer_name = customer.name.clone();
    }

    pub fn total(&self) -> f64 {
        self.items.total()
    }

    /// Every problem with the draft, keyed by field. Empty means the sale can be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.customer_id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            errors.insert("customerId".into(), "Customer is required".into());
        }
        if self.sale_date.trim().is_empty() {
            errors.insert("saleDate".into(), "Sale date is required".into());
        }
        if self.items.is_empty() {
            errors.insert("items".into(), "Add at least one item".into());
        }

        for (i, row) in self.items.rows().iter().enumerate() {
            if row.description.trim().is_empty() {
                errors.insert(format!("item-{}-description", i), "Description is required".into());
            }
            if row.quantity.value() <= 0.0 {
                errors.insert(format!("item-{}-quantity", i), "Quantity must be greater than 0".into());
            }
            if row.unit_price.value() <= 0.0 {
                errors.insert(format!("item-{}-unitPrice", i), "Price must be greater than 0".into());
            }
        }

        errors
    }

    /// Wire payload; call after [`SaleForm::validate`] came back empty.
    pub fn to_request(&self) -> SaleRequest {
        SaleRequest {
            customer_id: self.customer_id.clone(),
            customer_name: self.customer_name.trim().to_string(),
            sale_date: self.sale_date.trim().to_string(),
            status: self.status,
            items: self
                .items
                .rows()
                .iter()
                .map(|row| SaleItemRequest {
                    product_id: row.catalog.map(|c| c.id),
                    description: row.description.trim().to_string(),
                    unit: row.unit.clone(),
                    quantity: row.quantity.value(),
                    unit_price: row.unit_price.value(),
                    total: row.total(),
                })
                .collect(),
            total: self.total(),
            payment_method: self.payment_method,
            notes: Some(self.notes.trim().to_string()).filter(|n| !n.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::SaleItem;

    // ========== Validation Tests ==========

    #[test]
    fn test_blank_sale_reports_every_field() {
        let mut form = SaleForm::starting("");
        form.items.get_mut(0).unwrap().quantity.set_raw("0");

        let errors = form.validate();

        assert!(errors.contains_key("customerId"));
        assert!(errors.contains_key("saleDate"));
        assert!(errors.contains_key("item-0-description"));
        assert!(errors.contains_key("item-0-quantity"));
        assert!(errors.contains_key("item-0-unitPrice"));
        assert!(!errors.contains_key("items"));
    }

    #[test]
    fn test_empty_item_list() {
        let mut form = SaleForm::starting("2024-05-01");
        form.items = LineItems::empty();
        assert_eq!(
            form.validate().get("items").map(String::as_str),
            Some("Add at least one item")
        );
    }

    #[test]
    fn test_valid_sale_has_no_errors() {
        let mut form = SaleForm::starting("2024-05-01");
        form.select_customer(&Customer {
            id: 12,
            name: "Ana".into(),
            ..Customer::default()
        });
        form.items = LineItems::from_rows(vec![
            LineItem::new("Oil change", "un", 1.0, 80.0),
            LineItem::new("Filter", "un", 2.0, 15.5),
        ]);

        assert!(form.validate().is_empty());

        let request = form.to_request();
        assert_eq!(request.customer_id.as_deref(), Some("12"));
        assert_eq!(request.total, 111.0);
        assert_eq!(request.items[1].total, 31.0);
        assert_eq!(request.notes, None);
    }

    // ========== Edit Tests ==========

    #[test]
    fn test_edit_copies_existing_sale() {
        let sale = Sale {
            id: 7,
            customer_id: Some("3".into()),
            customer_name: "Bruno".into(),
            sale_date: Some("2024-04-30T10:00:00".into()),
            status: SaleStatus::Paid,
            items: vec![SaleItem {
                product_id: Some(5),
                description: "Tire".into(),
                unit: None,
                quantity: 4.0,
                unit_price: 300.0,
                ..SaleItem::default()
            }],
            total: 1200.0,
            ..Sale::default()
        };

        let form = SaleForm::edit(&sale);

        assert_eq!(form.editing, Some(7));
        assert_eq!(form.sale_date, "2024-04-30");
        assert_eq!(form.items.rows()[0].unit, "un");
        assert_eq!(form.total(), 1200.0);
        assert_eq!(form.to_request().items[0].product_id, Some(5));
    }
}
