//! # Line-Item Calculator
//!
//! Rows of a quote, sale or service order. A row's total is always derived from its
//! quantity and unit price and never stored. Amounts are plain `f64`; rounding happens
//! only when formatting for display.

use shared::dto::{CatalogItem, ItemType};

use super::numeric::NumericField;

pub const DEFAULT_UNIT: &str = "un";

pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

/// Sum of every row's total.
pub fn document_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::total).sum()
}

/// Catalog entry a row was filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRef {
    pub id: i64,
    pub kind: ItemType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub unit: String,
    pub quantity: NumericField,
    pub unit_price: NumericField,
    pub catalog: Option<CatalogRef>,
}

impl Default for LineItem {
    fn default() -> Self {
        Self::blank()
    }
}

impl LineItem {
    /// Empty row: quantity 1, no price.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            quantity: NumericField::from_value(1.0),
            unit_price: NumericField::default(),
            catalog: None,
        }
    }

    pub fn new(description: impl Into<String>, unit: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            unit: unit.into(),
            quantity: NumericField::from_value(quantity),
            unit_price: NumericField::from_value(unit_price),
            catalog: None,
        }
    }

    /// Fill the row from a catalog entry.
    ///
    /// Description, unit and unit price are overwritten; quantity is left as typed.
    pub fn apply_catalog(&mut self, item: &CatalogItem) {
        self.description = item.name.clone();
        self.unit = item
            .unit
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UNIT.to_string());
        self.unit_price.set_value(item.unit_price);
        self.catalog = Some(CatalogRef {
            id: item.id,
            kind: item.item_type,
        });
    }

    pub fn total(&self) -> f64 {
        line_total(self.quantity.value(), self.unit_price.value())
    }

    pub fn is_service(&self) -> bool {
        matches!(self.catalog, Some(CatalogRef { kind: ItemType::Service, .. }))
    }
}

/// Ordered rows of one document draft.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItems {
    rows: Vec<LineItem>,
}

impl Default for LineItems {
    /// One blank row, which is how every document form starts.
    fn default() -> Self {
        Self {
            rows: vec![LineItem::blank()],
        }
    }
}

impl LineItems {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<LineItem>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, item: LineItem) {
        self.rows.push(item);
    }

    pub fn push_blank(&mut self) {
        self.rows.push(LineItem::blank());
    }

    /// Remove row `index`, keeping the others in order. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        self.rows.get_mut(index)
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [LineItem] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        document_total(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> LineItems {
        LineItems::from_rows(vec![
            LineItem::new("Widget", "un", 2.0, 10.0),
            LineItem::new("Screw", "un", 1.0, 5.0),
            LineItem::new("Gift", "un", 0.0, 20.0),
        ])
    }

    // ========== Total Tests ==========

    #[test]
    fn test_row_totals_and_document_total() {
        let items = rows();
        let totals: Vec<f64> = items.rows().iter().map(LineItem::total).collect();

        assert_eq!(totals, vec![20.0, 5.0, 0.0]);
        assert_eq!(items.total(), 25.0);
        assert_eq!(items.total(), items.total());
    }

    #[test]
    fn test_editing_quantity_recomputes_total() {
        let mut items = rows();
        items.get_mut(1).unwrap().quantity.set_raw("3");
        assert_eq!(items.rows()[1].total(), 15.0);
        assert_eq!(items.total(), 35.0);
    }

    #[test]
    fn test_editing_description_keeps_total() {
        let mut items = rows();
        let row = items.get_mut(0).unwrap();
        row.description = "Large widget".into();
        row.unit = "cx".into();
        assert_eq!(items.total(), 25.0);
    }

    #[test]
    fn test_empty_document_total_is_zero() {
        assert_eq!(LineItems::empty().total(), 0.0);
    }

    // ========== Catalog Selection Tests ==========

    #[test]
    fn test_catalog_selection_overwrites_price_and_keeps_quantity() {
        let mut row = LineItem::new("Old", "un", 3.0, 1.0);
        let item = CatalogItem {
            id: 42,
            name: "Oil change".into(),
            unit: Some("h".into()),
            unit_price: 15.50,
            item_type: ItemType::Service,
            ..CatalogItem::default()
        };

        row.apply_catalog(&item);

        assert_eq!(row.description, "Oil change");
        assert_eq!(row.unit, "h");
        assert_eq!(row.unit_price.value(), 15.5);
        assert_eq!(row.quantity.value(), 3.0);
        assert_eq!(row.total(), 46.5);
        assert_eq!(row.catalog, Some(CatalogRef { id: 42, kind: ItemType::Service }));
        assert!(row.is_service());
    }

    #[test]
    fn test_catalog_without_unit_uses_default() {
        let mut row = LineItem::blank();
        row.apply_catalog(&CatalogItem {
            id: 1,
            name: "Bolt".into(),
            unit_price: 2.0,
            ..CatalogItem::default()
        });
        assert_eq!(row.unit, DEFAULT_UNIT);
        assert!(!row.is_service());
    }

    // ========== Removal Tests ==========

    #[test]
    fn test_remove_is_stable() {
        let mut items = rows();
        let removed = items.remove(1).unwrap();

        assert_eq!(removed.description, "Screw");
        let names: Vec<&str> = items.rows().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gift"]);
        assert_eq!(items.total(), 20.0);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut items = rows();
        assert!(items.remove(9).is_none());
        assert_eq!(items.len(), 3);
    }
}
