//! # Finance Handlers
//!
//! Customers, catalog, stock, entries and quotes. All five screens render the same
//! snapshot; every successful create or delete resets its form and reloads the snapshot.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::forms::{CatalogForm, CustomerForm, EntryForm, QuoteForm, StockAdjustForm};
use crate::app::state::{AppState, Banner, FinanceSnapshot, FinanceState};
use crate::app::tasks::{self, TaskContext};
use crate::core::error::Result;
use crate::domain::files;

pub(crate) fn load_finance(state: &mut AppState, ctx: &TaskContext) {
    state.finance.loading = true;
    tasks::finance::fetch_finance(ctx);
}

pub(crate) fn on_finance_loaded(state: &mut AppState, result: Result<FinanceSnapshot>) {
    state.finance.loading = false;
    match result {
        Ok(snapshot) => state.finance.data = snapshot,
        Err(err) => {
            state.finance.banner = Some(Banner::error(failure_message(&err, "Could not load the finance module")));
        }
    }
}

/// Validate with `build`, then mark the finance view busy. `None` when the draft was
/// rejected or another call is still running.
fn begin<T>(
    state: &Arc<RwLock<AppState>>,
    build: impl FnOnce(&FinanceState) -> Result<T>,
) -> Option<T> {
    let mut state = state.write();
    if state.finance.pending {
        return None;
    }
    match build(&state.finance) {
        Ok(request) => {
            state.finance.pending = true;
            state.finance.banner = None;
            Some(request)
        }
        Err(err) => {
            state.finance.banner = Some(Banner::error(err.user_message("Please check the form")));
            None
        }
    }
}

/// Shared tail of every create/delete result.
fn finish<T>(
    state: &mut AppState,
    ctx: &TaskContext,
    result: Result<T>,
    success: &str,
    fallback: &str,
    reset: impl FnOnce(&mut FinanceState),
) {
    state.finance.pending = false;
    match result {
        Ok(_) => {
            reset(&mut state.finance);
            state.finance.banner = Some(Banner::success(success));
            load_finance(state, ctx);
        }
        Err(err) => {
            state.finance.banner = Some(Banner::error(failure_message(&err, fallback)));
        }
    }
}

// region: --- Customers

pub(crate) fn submit_customer(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    if let Some(request) = begin(state, |f| f.customer_form.to_request()) {
        ctx.spawn(move |api| async move { AppEvent::CustomerCreated(api.create_customer(request).await) });
    }
}

pub(crate) fn delete_customer(state: &Arc<RwLock<AppState>>, ctx: &TaskContext, id: i64) {
    if begin(state, |_| Ok(())).is_some() {
        ctx.spawn(move |api| async move { AppEvent::CustomerDeleted(api.delete_customer(id).await) });
    }
}

pub(crate) fn on_customer_created<T>(state: &mut AppState, ctx: &TaskContext, result: Result<T>) {
    finish(state, ctx, result, "Customer saved", "Could not save the customer", |f| {
        f.customer_form = CustomerForm::default();
    });
}

pub(crate) fn on_customer_deleted(state: &mut AppState, ctx: &TaskContext, result: Result<()>) {
    finish(state, ctx, result, "Customer removed", "Could not remove the customer", |_| {});
}

// endregion: --- Customers

// region: --- Catalog

/// Attach a picked product image to the catalog draft.
pub(crate) fn pick_catalog_image(state: &Arc<RwLock<AppState>>, path: &Path) {
    let mut state = state.write();
    match files::read_image(path) {
        Ok(data_url) => {
            state.finance.catalog_form.image = Some(data_url);
            state.finance.banner = None;
        }
        Err(err) => state.finance.banner = Some(Banner::error(err.user_message("Could not read the image"))),
    }
}

pub(crate) fn submit_catalog_item(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    if let Some(request) = begin(state, |f| f.catalog_form.to_request()) {
        ctx.spawn(move |api| async move { AppEvent::CatalogItemCreated(api.create_catalog_item(request).await) });
    }
}

pub(crate) fn on_catalog_item_created<T>(state: &mut AppState, ctx: &TaskContext, result: Result<T>) {
    finish(state, ctx, result, "Catalog item saved", "Could not save the catalog item", |f| {
        f.catalog_form = CatalogForm::default();
    });
}

// endregion: --- Catalog

// region: --- Stock

pub(crate) fn submit_stock_adjustment(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    if let Some((item_id, request)) = begin(state, |f| f.stock_form.to_request()) {
        tracing::info!(item_id, kind = ?request.movement_type, quantity = request.quantity, "Adjusting stock");
        ctx.spawn(move |api| async move { AppEvent::StockAdjusted(api.adjust_stock(item_id, request).await) });
    }
}

pub(crate) fn on_stock_adjusted(state: &mut AppState, ctx: &TaskContext, result: Result<()>) {
    finish(state, ctx, result, "Stock updated", "Could not adjust the stock", |f| {
        f.stock_form = StockAdjustForm::default();
    });
}

// endregion: --- Stock

// region: --- Entries

pub(crate) fn submit_entry(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    if let Some(request) = begin(state, |f| f.entry_form.to_request()) {
        ctx.spawn(move |api| async move { AppEvent::EntryCreated(api.create_entry(request).await) });
    }
}

pub(crate) fn on_entry_created<T>(state: &mut AppState, ctx: &TaskContext, result: Result<T>) {
    finish(state, ctx, result, "Entry saved", "Could not save the entry", |f| {
        f.entry_form = EntryForm::default();
    });
}

// endregion: --- Entries

// region: --- Quotes

pub(crate) fn submit_quote(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    if let Some(request) = begin(state, |f| f.quote_form.to_request()) {
        ctx.spawn(move |api| async move { AppEvent::QuoteCreated(api.create_quote(request).await) });
    }
}

pub(crate) fn delete_quote(state: &Arc<RwLock<AppState>>, ctx: &TaskContext, id: i64) {
    if begin(state, |_| Ok(())).is_some() {
        ctx.spawn(move |api| async move { AppEvent::QuoteDeleted(api.delete_quote(id).await) });
    }
}

pub(crate) fn on_quote_created<T>(state: &mut AppState, ctx: &TaskContext, result: Result<T>) {
    finish(state, ctx, result, "Quote saved", "Could not save the quote", |f| {
        f.quote_form = QuoteForm::default();
    });
}

pub(crate) fn on_quote_deleted(state: &mut AppState, ctx: &TaskContext, result: Result<()>) {
    finish(state, ctx, result, "Quote removed", "Could not remove the quote", |_| {});
}

// endregion: --- Quotes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::session::ThemeMode;
    use crate::test_support::StubApi;

    fn ctx() -> (TaskContext, async_channel::Receiver<crate::app::events::Envelope>) {
        let (tx, rx) = async_channel::unbounded();
        let ctx = TaskContext {
            api: Arc::new(StubApi::default()),
            tx,
            epoch: Some(1),
        };
        (ctx, rx)
    }

    // ========== Submit Tests ==========

    #[tokio::test]
    async fn test_invalid_customer_is_not_sent() {
        // Arrange
        let (ctx, rx) = ctx();
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Dark)));

        // Act
        submit_customer(&state, &ctx);

        // Assert
        let state = state.read();
        assert!(!state.finance.pending);
        assert_eq!(state.finance.banner, Some(Banner::error("Name is required")));
        assert!(rx.is_empty());
    }

    #[tokio::test]
    async fn test_pending_blocks_second_submit() {
        let (ctx, _rx) = ctx();
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Dark)));
        state.write().finance.customer_form.name = "Ana".into();

        submit_customer(&state, &ctx);
        assert!(state.read().finance.pending);

        state.write().finance.customer_form.name = "Bruno".into();
        submit_customer(&state, &ctx);
        // Form untouched, no banner: the second click was ignored
        assert_eq!(state.read().finance.banner, None);
    }

    // ========== Result Tests ==========

    #[tokio::test]
    async fn test_success_resets_form_and_reloads() {
        // Arrange
        let (ctx, rx) = ctx();
        let mut state = AppState::new(ThemeMode::Dark);
        state.finance.pending = true;
        state.finance.customer_form.name = "Ana".into();

        // Act
        on_customer_created(&mut state, &ctx, Ok(()));

        // Assert
        assert!(!state.finance.pending);
        assert!(state.finance.loading);
        assert_eq!(state.finance.customer_form, CustomerForm::default());
        assert_eq!(state.finance.banner, Some(Banner::success("Customer saved")));

        let envelope = rx.recv().await.expect("reload should report in test");
        assert!(matches!(envelope.event, AppEvent::FinanceLoaded(_)));
    }

    #[tokio::test]
    async fn test_failure_keeps_form() {
        let (ctx, _rx) = ctx();
        let mut state = AppState::new(ThemeMode::Dark);
        state.finance.pending = true;
        state.finance.entry_form.description = "Rent".into();

        on_entry_created::<()>(
            &mut state,
            &ctx,
            Err(AppError::Server {
                status: 400,
                message: Some("Amount too large".into()),
            }),
        );

        assert_eq!(state.finance.entry_form.description, "Rent");
        assert_eq!(state.finance.banner, Some(Banner::error("Amount too large")));
        assert!(!state.finance.loading);
    }

    #[test]
    fn test_snapshot_failure_sets_banner() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.finance.loading = true;

        on_finance_loaded(&mut state, Err(AppError::Network("refused".into())));

        assert!(!state.finance.loading);
        assert_eq!(
            state.finance.banner,
            Some(Banner::error("Could not load the finance module"))
        );
    }
}
