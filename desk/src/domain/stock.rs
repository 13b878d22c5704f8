//! Low-stock predicate for catalog tables and alerts.

use shared::dto::CatalogItem;

/// At or below the minimum counts as low.
pub fn is_low_stock(item: &CatalogItem) -> bool {
    item.stock_quantity <= item.min_stock
}

pub fn low_stock(items: &[CatalogItem]) -> Vec<&CatalogItem> {
    items.iter().filter(|item| is_low_stock(item)).collect()
}
