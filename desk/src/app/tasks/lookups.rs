//! Customers, catalog, sales and service orders for the picker-driven screens.
//!
//! Each list is its own request; a failed one leaves the others in place.

use shared::dto::SaleFilter;

use super::TaskContext;
use crate::app::events::AppEvent;

pub(crate) fn fetch_lookups(ctx: &TaskContext) {
    ctx.spawn(|api| async move { AppEvent::LookupCustomers(api.list_customers().await) });
    ctx.spawn(|api| async move { AppEvent::LookupCatalog(api.list_catalog().await) });
}

pub(crate) fn fetch_catalog(ctx: &TaskContext) {
    ctx.spawn(|api| async move { AppEvent::LookupCatalog(api.list_catalog().await) });
}

pub(crate) fn fetch_sales(ctx: &TaskContext, filter: SaleFilter) {
    ctx.spawn(|api| async move { AppEvent::SalesLoaded(api.list_sales(filter).await) });
}

pub(crate) fn fetch_service_orders(ctx: &TaskContext) {
    ctx.spawn(|api| async move { AppEvent::ServiceOrdersLoaded(api.list_service_orders().await) });
}
