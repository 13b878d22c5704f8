//! Dashboard fetches: five independent requests, each reporting on its own.

use super::TaskContext;
use crate::app::events::AppEvent;

/// Number of requests [`fetch_dashboard`] starts
pub const DASHBOARD_SLICES: u8 = 5;

pub(crate) fn fetch_dashboard(ctx: &TaskContext) {
    tracing::debug!(epoch = ?ctx.epoch, "Fetching dashboard slices");

    ctx.spawn(|api| async move { AppEvent::DashboardSummary(api.finance_summary().await) });
    ctx.spawn(|api| async move { AppEvent::DashboardStats(api.sales_stats().await) });
    ctx.spawn(|api| async move { AppEvent::DashboardChart(api.sales_chart().await) });
    ctx.spawn(|api| async move { AppEvent::DashboardTopProducts(api.top_products().await) });
    ctx.spawn(|api| async move { AppEvent::DashboardRecentSales(api.recent_sales().await) });
}
