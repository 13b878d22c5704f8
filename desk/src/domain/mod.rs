//! # Domain Logic
//!
//! Pure, UI-free rules: numeric form inputs, line-item arithmetic, the point-of-sale
//! cart, low-stock and dashboard derivations, currency display and file-input checks.

pub mod cart;
pub mod dashboard;
pub mod files;
pub mod line_items;
pub mod money;
pub mod numeric;
pub mod stock;

pub use cart::{Cart, CartEntry, ManualItem};
pub use line_items::{document_total, line_total, CatalogRef, LineItem, LineItems};
pub use money::format_brl;
pub use numeric::NumericField;
