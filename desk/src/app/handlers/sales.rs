//! # Sales Handlers
//!
//! List with filters, create/edit form, delete and status change.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{Customer, CatalogItem, Sale, SaleStatus};

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::forms::SaleForm;
use crate::app::state::{AppState, Banner, ToastLevel};
use crate::app::tasks::{lookups, TaskContext};
use crate::core::error::Result;

pub(crate) fn load_sales(state: &mut AppState, ctx: &TaskContext) {
    state.sales.loading = true;
    lookups::fetch_sales(ctx, state.sales.filter.clone());
}

pub(crate) fn on_sales_loaded(state: &mut AppState, result: Result<Vec<Sale>>) {
    state.sales.loading = false;
    match result {
        Ok(sales) => state.sales.sales = sales,
        Err(err) => state.sales.banner = Some(Banner::error(failure_message(&err, "Could not load sales"))),
    }
}

/// Lookups feed the sales, service order and POS pickers; a failure only costs the picker.
pub(crate) fn on_customers_loaded(state: &mut AppState, result: Result<Vec<Customer>>) {
    match result {
        Ok(customers) => state.lookups.customers = customers,
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not load customers")),
    }
}

pub(crate) fn on_catalog_loaded(state: &mut AppState, result: Result<Vec<CatalogItem>>) {
    match result {
        Ok(catalog) => state.lookups.catalog = catalog,
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not load the catalog")),
    }
}

pub(crate) fn open_new(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.form = Some(SaleForm::default());
    state.sales.errors.clear();
}

pub(crate) fn open_edit(state: &Arc<RwLock<AppState>>, sale: &Sale) {
    let mut state = state.write();
    state.sales.form = Some(SaleForm::edit(sale));
    state.sales.errors.clear();
}

pub(crate) fn close_form(state: &Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.sales.form = None;
    state.sales.errors.clear();
}

pub(crate) fn submit_sale(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let (editing, request) = {
        let mut state = state.write();
        if state.sales.pending {
            return;
        }
        let Some(form) = state.sales.form.clone() else {
            return;
        };
        let errors = form.validate();
        if !errors.is_empty() {
            state.sales.errors = errors;
            state.toast(ToastLevel::Error, "Please fix the highlighted fields");
            return;
        }
        state.sales.errors.clear();
        state.sales.pending = true;
        (form.editing, form.to_request())
    };

    ctx.spawn(move |api| async move {
        let result = match editing {
            Some(id) => api.update_sale(id, request).await,
            None => api.create_sale(request).await,
        };
        AppEvent::SaleSaved(result)
    });
}

pub(crate) fn on_sale_saved(state: &mut AppState, ctx: &TaskContext, result: Result<Sale>) {
    state.sales.pending = false;
    match result {
        Ok(sale) => {
            let updated = state.sales.form.as_ref().is_some_and(|f| f.editing.is_some());
            tracing::info!(sale_id = sale.id, updated, "Sale saved");
            state.sales.form = None;
            state.toast(ToastLevel::Success, if updated { "Sale updated" } else { "Sale created" });
            load_sales(state, ctx);
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not save the sale")),
    }
}

pub(crate) fn delete_sale(state: &Arc<RwLock<AppState>>, ctx: &TaskContext, id: i64) {
    {
        let mut state = state.write();
        if state.sales.pending {
            return;
        }
        state.sales.pending = true;
    }
    ctx.spawn(move |api| async move { AppEvent::SaleDeleted(api.delete_sale(id).await) });
}

pub(crate) fn change_status(state: &Arc<RwLock<AppState>>, ctx: &TaskContext, id: i64, status: SaleStatus) {
    {
        let mut state = state.write();
        if state.sales.pending {
            return;
        }
        state.sales.pending = true;
    }
    ctx.spawn(move |api| async move { AppEvent::SaleStatusChanged(api.update_sale_status(id, status).await) });
}

pub(crate) fn on_sale_changed(state: &mut AppState, ctx: &TaskContext, result: Result<()>, success: &str, fallback: &str) {
    state.sales.pending = false;
    match result {
        Ok(()) => {
            state.toast(ToastLevel::Success, success);
            load_sales(state, ctx);
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, fallback)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::ThemeMode;
    use crate::test_support::StubApi;

    #[tokio::test]
    async fn test_invalid_sale_keeps_form_and_reports_fields() {
        // Arrange
        let (tx, rx) = async_channel::unbounded();
        let ctx = TaskContext {
            api: Arc::new(StubApi::default()),
            tx,
            epoch: Some(2),
        };
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Light)));
        open_new(&state);

        // Act
        submit_sale(&state, &ctx);

        // Assert
        let state = state.read();
        assert!(state.sales.form.is_some());
        assert!(state.sales.errors.contains_key("customerId"));
        assert!(!state.sales.pending);
        assert_eq!(state.pending_toasts.len(), 1);
        assert!(rx.is_empty());
    }

    #[tokio::test]
    async fn test_saved_sale_closes_form_and_reloads() {
        let (tx, rx) = async_channel::unbounded();
        let ctx = TaskContext {
            api: Arc::new(StubApi::default()),
            tx,
            epoch: Some(2),
        };
        let mut state = AppState::new(ThemeMode::Light);
        state.sales.form = Some(SaleForm::default());
        state.sales.pending = true;

        on_sale_saved(&mut state, &ctx, Ok(Sale::default()));

        assert!(state.sales.form.is_none());
        assert!(state.sales.loading);
        let envelope = rx.recv().await.expect("reload should report in test");
        assert!(matches!(envelope.event, AppEvent::SalesLoaded(Ok(_))));
        assert_eq!(envelope.epoch, Some(2));
    }
}
