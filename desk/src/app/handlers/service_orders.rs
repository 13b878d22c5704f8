//! # Service Order Handlers

use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{ServiceOrder, ServiceOrderStatus};

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::forms::ServiceOrderForm;
use crate::app::state::{AppState, Banner, ToastLevel};
use crate::app::tasks::{lookups, TaskContext};
use crate::core::error::Result;

pub(crate) fn load_orders(state: &mut AppState, ctx: &TaskContext) {
    state.service_orders.loading = true;
    lookups::fetch_service_orders(ctx);
}

pub(crate) fn on_orders_loaded(state: &mut AppState, result: Result<Vec<ServiceOrder>>) {
    state.service_orders.loading = false;
    match result {
        Ok(orders) => state.service_orders.orders = orders,
        Err(err) => {
            state.service_orders.banner = Some(Banner::error(failure_message(&err, "Could not load service orders")));
        }
    }
}

pub(crate) fn open_form(state: &Arc<RwLock<AppState>>) {
    state.write().service_orders.form = Some(ServiceOrderForm::default());
}

pub(crate) fn close_form(state: &Arc<RwLock<AppState>>) {
    state.write().service_orders.form = None;
}

pub(crate) fn submit_order(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let request = {
        let mut state = state.write();
        if state.service_orders.pending {
            return;
        }
        let Some(form) = state.service_orders.form.as_ref() else {
            return;
        };
        match form.to_request() {
            Ok(request) => {
                state.service_orders.pending = true;
                state.service_orders.banner = None;
                request
            }
            Err(err) => {
                state.service_orders.banner = Some(Banner::error(err.user_message("Please check the form")));
                return;
            }
        }
    };

    ctx.spawn(move |api| async move { AppEvent::ServiceOrderCreated(api.create_service_order(request).await) });
}

pub(crate) fn on_order_created(state: &mut AppState, ctx: &TaskContext, result: Result<ServiceOrder>) {
    state.service_orders.pending = false;
    match result {
        Ok(order) => {
            tracing::info!(order_id = order.id, "Service order created");
            state.service_orders.form = None;
            state.service_orders.banner = Some(Banner::success("Service order created"));
            load_orders(state, ctx);
        }
        Err(err) => {
            state.service_orders.banner = Some(Banner::error(failure_message(&err, "Could not create the service order")));
        }
    }
}

pub(crate) fn change_status(state: &Arc<RwLock<AppState>>, ctx: &TaskContext, id: i64, status: ServiceOrderStatus) {
    {
        let mut state = state.write();
        if state.service_orders.pending {
            return;
        }
        state.service_orders.pending = true;
    }
    ctx.spawn(move |api| async move {
        AppEvent::ServiceOrderStatusChanged(api.update_service_order_status(id, status).await)
    });
}

pub(crate) fn on_status_changed(state: &mut AppState, ctx: &TaskContext, result: Result<()>) {
    state.service_orders.pending = false;
    match result {
        Ok(()) => {
            state.toast(ToastLevel::Success, "Status updated");
            load_orders(state, ctx);
        }
        Err(err) => state.toast(ToastLevel::Error, failure_message(&err, "Could not update the status")),
    }
}
