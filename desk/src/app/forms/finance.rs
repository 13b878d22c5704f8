//! # Finance Drafts
//!
//! Customer, catalog item, stock adjustment, financial entry and quote forms. Each
//! `to_request` validates and builds the wire request; the draft itself is left as typed
//! so a failed submission can be corrected.

use shared::dto::{
    CatalogItem, CatalogItemRequest, Customer, CustomerRequest, EntryStatus, EntryType,
    FinancialEntryRequest, ItemType, QuoteItemRequest, QuoteRequest, QuoteStatus,
    StockAdjustmentRequest, StockMovementType,
};

use crate::core::error::{AppError, Result};
use crate::domain::line_items::{LineItems, DEFAULT_UNIT};
use crate::domain::numeric::NumericField;

/// Smallest stock adjustment the backend accepts
pub const MIN_ADJUST_QUANTITY: f64 = 0.01;

/// Days a new quote stays valid
pub const QUOTE_VALIDITY_DAYS: i64 = 7;

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation(format!("{} is required", field)))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// region: --- Customer

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl CustomerForm {
    pub fn to_request(&self) -> Result<CustomerRequest> {
        let name = required(&self.name, "Name")?;
        let email = self.email.trim().to_string();
        if !email.is_empty() {
            lib_utils::validate_email(&email).map_err(AppError::Validation)?;
        }
        Ok(CustomerRequest {
            name,
            email,
            phone: self.phone.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

// endregion: --- Customer

// region: --- Catalog

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogForm {
    pub name: String,
    pub sku: String,
    pub qr_code: String,
    pub item_type: ItemType,
    pub unit: String,
    pub unit_price: NumericField,
    pub cost_price: NumericField,
    pub description: String,
    /// `data:image/...;base64,` URL, already size- and type-checked
    pub image: Option<String>,
    pub stock_quantity: NumericField,
    pub min_stock: NumericField,
}

impl Default for CatalogForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            qr_code: String::new(),
            item_type: ItemType::Product,
            unit: DEFAULT_UNIT.to_string(),
            unit_price: NumericField::default(),
            cost_price: NumericField::default(),
            description: String::new(),
            image: None,
            stock_quantity: NumericField::parse("0"),
            min_stock: NumericField::parse("0"),
        }
    }
}

impl CatalogForm {
    pub fn to_request(&self) -> Result<CatalogItemRequest> {
        let name = required(&self.name, "Name")?;
        Ok(CatalogItemRequest {
            name,
            sku: optional(&self.sku),
            qr_code: optional(&self.qr_code),
            item_type: self.item_type,
            unit: optional(&self.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            unit_price: self.unit_price.value(),
            cost_price: (!self.cost_price.is_blank()).then(|| self.cost_price.value()),
            description: optional(&self.description),
            product_image_base64: self.image.clone(),
            stock_quantity: self.stock_quantity.value(),
            min_stock: self.min_stock.value(),
        })
    }
}

// endregion: --- Catalog

// region: --- Stock

#[derive(Debug, Clone, PartialEq)]
pub struct StockAdjustForm {
    pub item_id: Option<i64>,
    pub movement_type: StockMovementType,
    pub quantity: NumericField,
    pub reason: String,
}

impl Default for StockAdjustForm {
    fn default() -> Self {
        Self {
            item_id: None,
            movement_type: StockMovementType::In,
            quantity: NumericField::default(),
            reason: String::new(),
        }
    }
}

impl StockAdjustForm {
    pub fn to_request(&self) -> Result<(i64, StockAdjustmentRequest)> {
        let item_id = self
            .item_id
            .ok_or_else(|| AppError::Validation("Pick an item to adjust".into()))?;
        let quantity = self.quantity.value();
        if quantity < MIN_ADJUST_QUANTITY {
            return Err(AppError::Validation("Quantity must be at least 0.01".into()));
        }
        Ok((
            item_id,
            StockAdjustmentRequest {
                movement_type: self.movement_type,
                quantity,
                reason: optional(&self.reason),
            },
        ))
    }

    pub fn selected<'a>(&self, catalog: &'a [CatalogItem]) -> Option<&'a CatalogItem> {
        let id = self.item_id?;
        catalog.iter().find(|item| item.id == id)
    }
}

// endregion: --- Stock

// region: --- Entries

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub amount: NumericField,
    pub category: String,
    pub description: String,
    pub due_date: String,
    pub paid_date: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            entry_type: EntryType::Income,
            status: EntryStatus::Pending,
            amount: NumericField::default(),
            category: String::new(),
            description: String::new(),
            due_date: String::new(),
            paid_date: String::new(),
        }
    }
}

impl EntryForm {
    pub fn to_request(&self) -> Result<FinancialEntryRequest> {
        if self.amount.value() <= 0.0 {
            return Err(AppError::Validation("Amount must be greater than zero".into()));
        }
        let description = required(&self.description, "Description")?;
        let due_date = optional(&self.due_date);
        let paid_date = optional(&self.paid_date);
        for date in due_date.iter().chain(paid_date.iter()) {
            lib_utils::time::parse_date(date)
                .map_err(|_| AppError::Validation(format!("{} is not a valid date (YYYY-MM-DD)", date)))?;
        }
        Ok(FinancialEntryRequest {
            entry_type: self.entry_type,
            status: self.status,
            amount: self.amount.value(),
            category: self.category.trim().to_string(),
            description,
            due_date,
            paid_date,
        })
    }
}

// endregion: --- Entries

// region: --- Quotes

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteForm {
    pub customer_id: Option<i64>,
    pub customer_name: String,
    pub status: QuoteStatus,
    pub issue_date: String,
    pub valid_until: String,
    pub notes: String,
    pub items: LineItems,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::starting(&lib_utils::today_iso())
    }
}

impl QuoteForm {
    /// Draft quote issued on `today`, valid for a week, with one blank row.
    pub fn starting(today: &str) -> Self {
        let valid_until =
            lib_utils::add_days_iso(today, QUOTE_VALIDITY_DAYS).unwrap_or_else(|_| today.to_string());
        Self {
            customer_id: None,
            customer_name: String::new(),
            status: QuoteStatus::Draft,
            issue_date: today.to_string(),
            valid_until,
            notes: String::new(),
            items: LineItems::default(),
        }
    }

    /// Pick a customer from the list; fills in the name.
    pub fn select_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.id);
        self.customer_name = customer.name.clone();
    }

    pub fn total(&self) -> f64 {
        self.items.total()
    }

    pub fn to_request(&self) -> Result<QuoteRequest> {
        let customer_name = required(&self.customer_name, "Customer")?;
        let issue_date = required(&self.issue_date, "Issue date")?;
        let valid_until = required(&self.valid_until, "Valid until")?;
        if self.items.is_empty() {
            return Err(AppError::Validation("Add at least one item".into()));
        }
        if self.items.rows().iter().any(|row| row.description.trim().is_empty()) {
            return Err(AppError::Validation("Every item needs a description".into()));
        }

        Ok(QuoteRequest {
            customer_id: self.customer_id,
            customer_name,
            status: self.status,
            issue_date,
            valid_until,
            notes: optional(&self.notes),
            items: self
                .items
                .rows()
                .iter()
                .map(|row| QuoteItemRequest {
                    catalog_item_id: row.catalog.map(|c| c.id),
                    description: row.description.trim().to_string(),
                    unit: row.unit.clone(),
                    quantity: row.quantity.value(),
                    unit_price: row.unit_price.value(),
                })
                .collect(),
        })
    }
}

// endregion: --- Quotes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line_items::LineItem;

    // ========== Customer Tests ==========

    #[test]
    fn test_customer_requires_name() {
        let form = CustomerForm::default();
        assert_eq!(
            form.to_request().unwrap_err(),
            AppError::Validation("Name is required".into())
        );
    }

    #[test]
    fn test_customer_email_is_optional_but_checked() {
        let mut form = CustomerForm {
            name: " Ana ".into(),
            ..CustomerForm::default()
        };
        assert_eq!(form.to_request().unwrap().name, "Ana");

        form.email = "not-an-email".into();
        assert!(form.to_request().is_err());
    }

    // ========== Catalog Tests ==========

    #[test]
    fn test_catalog_request_parses_numbers() {
        let mut form = CatalogForm {
            name: "Filter".into(),
            ..CatalogForm::default()
        };
        form.unit_price.set_raw("15,50");
        form.stock_quantity.set_raw("3");

        let request = form.to_request().unwrap();

        assert_eq!(request.unit_price, 15.5);
        assert_eq!(request.cost_price, None);
        assert_eq!(request.stock_quantity, 3.0);
        assert_eq!(request.unit, "un");
        assert_eq!(request.sku, None);
    }

    // ========== Stock Tests ==========

    #[test]
    fn test_stock_adjust_requires_item_and_minimum_quantity() {
        let mut form = StockAdjustForm::default();
        assert!(form.to_request().is_err());

        form.item_id = Some(4);
        form.quantity.set_raw("0.001");
        assert!(form.to_request().is_err());

        form.quantity.set_raw("0.01");
        let (id, request) = form.to_request().unwrap();
        assert_eq!(id, 4);
        assert_eq!(request.quantity, 0.01);
        assert_eq!(request.movement_type, StockMovementType::In);
    }

    // ========== Entry Tests ==========

    #[test]
    fn test_entry_rejects_bad_dates() {
        let mut form = EntryForm {
            description: "Rent".into(),
            ..EntryForm::default()
        };
        form.amount.set_raw("1200");
        form.due_date = "31/02/2024".into();
        assert!(form.to_request().is_err());

        form.due_date = "2024-02-29".into();
        let request = form.to_request().unwrap();
        assert_eq!(request.due_date.as_deref(), Some("2024-02-29"));
        assert_eq!(request.paid_date, None);
    }

    // ========== Quote Tests ==========

    #[test]
    fn test_quote_defaults() {
        let form = QuoteForm::starting("2024-05-01");
        assert_eq!(form.status, QuoteStatus::Draft);
        assert_eq!(form.valid_until, "2024-05-08");
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.total(), 0.0);
    }

    #[test]
    fn test_quote_request_carries_catalog_ids() {
        let mut form = QuoteForm::starting("2024-05-01");
        form.select_customer(&Customer {
            id: 9,
            name: "Oficina Silva".into(),
            ..Customer::default()
        });
        form.items = LineItems::from_rows(vec![LineItem::new("Labor", "h", 2.0, 50.0)]);
        form.items.get_mut(0).unwrap().apply_catalog(&CatalogItem {
            id: 3,
            name: "Labor".into(),
            unit_price: 60.0,
            ..CatalogItem::default()
        });

        let request = form.to_request().unwrap();

        assert_eq!(request.customer_id, Some(9));
        assert_eq!(request.customer_name, "Oficina Silva");
        assert_eq!(request.items[0].catalog_item_id, Some(3));
        assert_eq!(request.items[0].unit_price, 60.0);
        assert_eq!(request.items[0].quantity, 2.0);
        assert_eq!(form.total(), 120.0);
    }

    #[test]
    fn test_quote_rejects_blank_rows() {
        let mut form = QuoteForm::starting("2024-05-01");
        form.customer_name = "Ana".into();
        assert!(form.to_request().is_err());
    }
}
