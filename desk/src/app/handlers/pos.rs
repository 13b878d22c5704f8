//! # Point-of-Sale Handlers
//!
//! Cart edits are synchronous; the code lookup and the final sale go to the backend.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{CatalogItem, Sale};
use uuid::Uuid;

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::forms::ManualItemForm;
use crate::app::state::{AppState, ToastLevel};
use crate::app::tasks::{lookups, TaskContext};
use crate::core::error::{AppError, Result};

/// Add one unit of `item`; out-of-stock products raise a warning toast instead.
pub(crate) fn add_product(state: &mut AppState, item: &CatalogItem) {
    match state.pos.cart.add_product(item) {
        Ok(()) => tracing::debug!(product_id = item.id, "Added to cart"),
        Err(err) => state.toast(ToastLevel::Warning, err.user_message("Could not add the product")),
    }
}

pub(crate) fn add_manual(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let item = state.pos.checkout.manual.to_item();
    match state.pos.cart.add_manual(item) {
        Ok(()) => state.pos.checkout.manual = ManualItemForm::default(),
        Err(err) => state.toast(ToastLevel::Warning, err.user_message("Could not add the item")),
    }
}

pub(crate) fn set_quantity(state: &Arc<RwLock<AppState>>, id: Uuid, quantity: f64) {
    state.write().pos.cart.set_quantity(id, quantity);
}

pub(crate) fn increment(state: &Arc<RwLock<AppState>>, id: Uuid) {
    state.write().pos.cart.increment(id);
}

pub(crate) fn decrement(state: &Arc<RwLock<AppState>>, id: Uuid) {
    state.write().pos.cart.decrement(id);
}

pub(crate) fn remove(state: &Arc<RwLock<AppState>>, id: Uuid) {
    state.write().pos.cart.remove(id);
}

pub(crate) fn clear_cart(state: &Arc<RwLock<AppState>>) {
    state.write().pos.cart.clear();
}

/// Look up the typed QR/bar code.
pub(crate) fn lookup_code(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let code = {
        let mut state = state.write();
        let code = state.pos.checkout.code.trim().to_string();
        if code.is_empty() || state.pos.lookup_pending {
            return;
        }
        state.pos.lookup_pending = true;
        code
    };

    ctx.spawn(move |api| async move {
        let result = api.find_by_code(&code).await;
        AppEvent::CodeLookup { code, result }
    });
}

pub(crate) fn on_code_lookup(state: &mut AppState, code: &str, result: Result<CatalogItem>) {
    state.pos.lookup_pending = false;
    match result {
        Ok(item) => {
            state.pos.checkout.code.clear();
            add_product(state, &item);
        }
        Err(AppError::NotFound) => {
            tracing::debug!(code, "No product for scanned code");
            state.toast(ToastLevel::Warning, format!("No product found for code {}", code));
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not look up the code")),
    }
}

/// Post the cart as one PAID sale dated today.
pub(crate) fn finalize(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let request = {
        let mut state = state.write();
        if state.pos.finalizing {
            return;
        }
        let payment = state.pos.checkout.payment_method;
        match state.pos.cart.to_sale_request(lib_utils::today_iso(), Some(payment)) {
            Ok(request) => {
                state.pos.finalizing = true;
                request
            }
            Err(err) => {
                state.toast(ToastLevel::Warning, err.user_message("The cart is empty"));
                return;
            }
        }
    };

    tracing::info!(items = request.items.len(), total = request.total, "Finalizing point-of-sale sale");
    ctx.spawn(move |api| async move { AppEvent::SaleFinalized(api.create_sale(request).await) });
}

pub(crate) fn on_sale_finalized(state: &mut AppState, ctx: &TaskContext, result: Result<Sale>) {
    state.pos.finalizing = false;
    match result {
        Ok(sale) => {
            state.pos.cart.clear();
            state.toast(ToastLevel::Success, format!("Sale #{} completed", sale.id));
            // Stock levels moved
            lookups::fetch_catalog(ctx);
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not finalize the sale")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::ThemeMode;

    fn product(stock: f64) -> CatalogItem {
        CatalogItem {
            id: 8,
            name: "Brake pad".into(),
            unit_price: 45.0,
            stock_quantity: stock,
            ..CatalogItem::default()
        }
    }

    #[test]
    fn test_out_of_stock_raises_warning() {
        let mut state = AppState::new(ThemeMode::Dark);

        add_product(&mut state, &product(0.0));

        assert!(state.pos.cart.is_empty());
        assert_eq!(state.pending_toasts[0].level, ToastLevel::Warning);
        assert!(state.pending_toasts[0].message.contains("out of stock"));
    }

    #[test]
    fn test_lookup_not_found_keeps_code() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.pos.checkout.code = "789".into();
        state.pos.lookup_pending = true;

        on_code_lookup(&mut state, "789", Err(AppError::NotFound));

        assert!(!state.pos.lookup_pending);
        assert_eq!(state.pos.checkout.code, "789");
        assert_eq!(state.pending_toasts[0].message, "No product found for code 789");
    }

    #[test]
    fn test_lookup_hit_adds_and_clears_code() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.pos.checkout.code = "789".into();

        on_code_lookup(&mut state, "789", Ok(product(3.0)));
        on_code_lookup(&mut state, "789", Ok(product(3.0)));

        assert_eq!(state.pos.cart.len(), 1);
        assert_eq!(state.pos.cart.total(), 90.0);
        assert!(state.pos.checkout.code.is_empty());
    }

    #[tokio::test]
    async fn test_finalized_sale_clears_cart() {
        let (tx, _rx) = async_channel::unbounded();
        let ctx = TaskContext {
            api: Arc::new(crate::test_support::StubApi::default()),
            tx,
            epoch: Some(1),
        };
        let mut state = AppState::new(ThemeMode::Dark);
        add_product(&mut state, &product(2.0));
        state.pos.finalizing = true;

        on_sale_finalized(&mut state, &ctx, Ok(Sale { id: 41, ..Sale::default() }));

        assert!(state.pos.cart.is_empty());
        assert!(!state.pos.finalizing);
        assert_eq!(state.pending_toasts[0].message, "Sale #41 completed");
    }
}
