//! # Point-of-Sale Cart
//!
//! Catalog products and hand-typed items waiting to be sold as one PAID sale.

use shared::dto::{CatalogItem, PaymentMethod, SaleItemRequest, SaleRequest, SaleStatus};
use uuid::Uuid;

use super::line_items::{LineItem, DEFAULT_UNIT};
use crate::core::error::{AppError, Result};

/// Customer name recorded on every point-of-sale sale.
pub const POS_CUSTOMER_NAME: &str = "Venda PDV";

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// Local id, stable while the entry is in the cart
    pub id: Uuid,
    pub product_id: Option<i64>,
    pub qr_code: Option<String>,
    pub line: LineItem,
    pub manual: bool,
}

impl CartEntry {
    pub fn total(&self) -> f64 {
        self.line.total()
    }
}

/// Hand-typed item, validated by [`Cart::add_manual`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualItem {
    pub name: String,
    pub unit: String,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add one unit of a catalog product.
    ///
    /// A product already in the cart gets its quantity bumped by 1; otherwise a new
    /// entry with quantity 1 is appended. Products without stock are refused.
    pub fn add_product(&mut self, item: &CatalogItem) -> Result<()> {
        if item.stock_quantity <= 0.0 {
            return Err(AppError::Validation(format!("{} is out of stock", item.name)));
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| !e.manual && e.product_id == Some(item.id))
        {
            let next = entry.line.quantity.value() + 1.0;
            entry.line.quantity.set_value(next);
            return Ok(());
        }

        let mut line = LineItem::blank();
        line.apply_catalog(item);
        line.quantity.set_value(1.0);

        self.entries.push(CartEntry {
            id: Uuid::new_v4(),
            product_id: Some(item.id),
            qr_code: item.qr_code.clone(),
            line,
            manual: false,
        });
        Ok(())
    }

    /// Add a hand-typed item. Name and price are required; quantity defaults to 1.
    pub fn add_manual(&mut self, item: ManualItem) -> Result<()> {
        let name = item.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Item name is required".into()));
        }
        let price = item
            .unit_price
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or_else(|| AppError::Validation("Item price is required".into()))?;
        let quantity = item.quantity.filter(|q| q.is_finite() && *q > 0.0).unwrap_or(1.0);
        let unit = match item.unit.trim() {
            "" => DEFAULT_UNIT,
            unit => unit,
        };

        self.entries.push(CartEntry {
            id: Uuid::new_v4(),
            product_id: None,
            qr_code: None,
            line: LineItem::new(name, unit, quantity, price),
            manual: true,
        });
        Ok(())
    }

    /// Set an entry's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: Uuid, quantity: f64) {
        if quantity <= 0.0 || !quantity.is_finite() {
            self.remove(id);
        } else if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.line.quantity.set_value(quantity);
        }
    }

    pub fn increment(&mut self, id: Uuid) {
        if let Some(quantity) = self.quantity_of(id) {
            self.set_quantity(id, quantity + 1.0);
        }
    }

    pub fn decrement(&mut self, id: Uuid) {
        if let Some(quantity) = self.quantity_of(id) {
            self.set_quantity(id, quantity - 1.0);
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(CartEntry::total).sum()
    }

    fn quantity_of(&self, id: Uuid) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.line.quantity.value())
    }

    /// Sale to post when the cart is finalized.
    pub fn to_sale_request(&self, sale_date: String, payment_method: Option<PaymentMethod>) -> Result<SaleRequest> {
        if self.entries.is_empty() {
            return Err(AppError::Validation("The cart is empty".into()));
        }

        let items = self
            .entries
            .iter()
            .map(|e| SaleItemRequest {
                product_id: e.product_id,
                description: e.line.description.clone(),
                unit: e.line.unit.clone(),
                quantity: e.line.quantity.value(),
                unit_price: e.line.unit_price.value(),
                total: e.total(),
            })
            .collect();

        Ok(SaleRequest {
            customer_id: None,
            customer_name: POS_CUSTOMER_NAME.to_string(),
            sale_date,
            status: SaleStatus::Paid,
            items,
            total: self.total(),
            payment_method,
            notes: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: f64) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("Product {}", id),
            qr_code: Some(format!("QR{}", id)),
            unit_price: price,
            stock_quantity: stock,
            ..CatalogItem::default()
        }
    }

    // ========== Product Tests ==========

    #[test]
    fn test_adding_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 4.5, 10.0);

        cart.add_product(&p).unwrap();
        cart.add_product(&p).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].line.quantity.value(), 2.0);
        assert_eq!(cart.entries()[0].qr_code.as_deref(), Some("QR1"));
        assert_eq!(cart.total(), 9.0);
    }

    #[test]
    fn test_out_of_stock_product_is_refused() {
        let mut cart = Cart::new();
        let err = cart.add_product(&product(2, 4.5, 0.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stepper_to_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 4.5, 10.0)).unwrap();
        let id = cart.entries()[0].id;

        cart.increment(id);
        assert_eq!(cart.entries()[0].line.quantity.value(), 2.0);

        cart.decrement(id);
        cart.decrement(id);
        assert!(cart.is_empty());
    }

    // ========== Manual Item Tests ==========

    #[test]
    fn test_manual_item_defaults() {
        let mut cart = Cart::new();
        cart.add_manual(ManualItem {
            name: " Gift wrap ".into(),
            unit_price: Some(3.0),
            ..ManualItem::default()
        })
        .unwrap();

        let entry = &cart.entries()[0];
        assert!(entry.manual);
        assert_eq!(entry.line.description, "Gift wrap");
        assert_eq!(entry.line.unit, "un");
        assert_eq!(entry.line.quantity.value(), 1.0);
    }

    #[test]
    fn test_manual_item_requires_name_and_price() {
        let mut cart = Cart::new();
        assert!(cart
            .add_manual(ManualItem {
                name: "".into(),
                unit_price: Some(3.0),
                ..ManualItem::default()
            })
            .is_err());
        assert!(cart
            .add_manual(ManualItem {
                name: "Gift wrap".into(),
                ..ManualItem::default()
            })
            .is_err());
        assert!(cart.is_empty());
    }

    // ========== Checkout Tests ==========

    #[test]
    fn test_sale_request_is_paid_pos_sale() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 10.0, 5.0)).unwrap();
        cart.add_product(&product(1, 10.0, 5.0)).unwrap();
        cart.add_manual(ManualItem {
            name: "Bag".into(),
            unit_price: Some(0.5),
            quantity: Some(2.0),
            ..ManualItem::default()
        })
        .unwrap();

        let request = cart
            .to_sale_request("2024-05-01".into(), Some(PaymentMethod::Pix))
            .unwrap();

        assert_eq!(request.customer_name, "Venda PDV");
        assert_eq!(request.status, SaleStatus::Paid);
        assert_eq!(request.sale_date, "2024-05-01");
        assert_eq!(request.total, 21.0);
        assert_eq!(request.items[0].product_id, Some(1));
        assert_eq!(request.items[0].total, 20.0);
        assert_eq!(request.items[1].product_id, None);
    }

    #[test]
    fn test_empty_cart_cannot_be_sold() {
        assert!(Cart::new().to_sale_request("2024-05-01".into(), None).is_err());
    }
}
