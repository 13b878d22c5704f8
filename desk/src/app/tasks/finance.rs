//! Finance snapshot: six requests joined, failing as a whole.

use std::sync::Arc;

use super::TaskContext;
use crate::app::events::AppEvent;
use crate::app::state::FinanceSnapshot;
use crate::core::error::Result;
use crate::core::service::ApiService;

pub(crate) fn fetch_finance(ctx: &TaskContext) {
    ctx.spawn(|api| async move { AppEvent::FinanceLoaded(load_snapshot(api).await) });
}

pub(crate) async fn load_snapshot(api: Arc<dyn ApiService>) -> Result<FinanceSnapshot> {
    let started = std::time::Instant::now();
    let (summary, customers, catalog, movements, entries, quotes) = tokio::try_join!(
        api.finance_summary(),
        api.list_customers(),
        api.list_catalog(),
        api.list_stock_movements(),
        api.list_entries(),
        api.list_quotes(),
    )?;

    tracing::debug!(
        customers = customers.len(),
        catalog = catalog.len(),
        entries = entries.len(),
        quotes = quotes.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Finance snapshot loaded"
    );

    Ok(FinanceSnapshot {
        summary,
        customers,
        catalog,
        movements,
        entries,
        quotes,
    })
}
