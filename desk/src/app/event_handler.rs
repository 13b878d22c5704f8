//! # Event Handler
//!
//! Applies async results to the application state.
//!
//! Results that touch the session (login, restore, profile save, expiry and any
//! rejected token) are handled here on [`App`]. Everything else goes to the domain
//! result handlers in [`crate::app::handlers`].

use shared::dto::{AuthResponse, Profile, SessionUser};

use crate::app::events::AppEvent;
use crate::app::handlers::{self, dashboard::on_slice};
use crate::app::state::{Banner, Screen};
use crate::app::App;
use crate::app::forms::profile::session_user;
use crate::core::error::{AppError, Result};

const EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
const REJECTED_MESSAGE: &str = "Your session is no longer valid. Please sign in again.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Apply one async result.
    ///
    /// The state lock is taken per event and released before the next one.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), "Handling event");

        // Off the protected area the session is already gone: a second expiry report is
        // a no-op and rejected results go to their own handlers as plain failures
        if event.ends_session() && self.current_screen().requires_auth() {
            let message = if matches!(event, AppEvent::SessionExpired) {
                EXPIRED_MESSAGE
            } else {
                REJECTED_MESSAGE
            };
            self.end_session(message);
            return;
        }

        let ctx = self.ctx();
        match event {
            // ---- auth ----
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::RegisterResult(result) => {
                handlers::auth::on_register_result(&mut self.state.write(), &ctx, result);
            }
            AppEvent::ForgotPasswordResult(result) => {
                handlers::auth::on_forgot_password_result(&mut self.state.write(), result);
            }
            AppEvent::ResetPasswordResult(result) => {
                handlers::auth::on_reset_password_result(&mut self.state.write(), &ctx, result);
            }
            AppEvent::RedirectToLogin => self.navigate(Screen::Login),
            AppEvent::SessionRestored(result) => self.handle_session_restored(result),
            AppEvent::SessionExpired => {
                tracing::debug!("Session already ended, ignoring expiry");
            }

            // ---- dashboard ----
            AppEvent::DashboardSummary(result) => {
                on_slice(&mut self.state.write(), "summary", result.map(Some), |d, v| d.summary = v);
            }
            AppEvent::DashboardStats(result) => {
                on_slice(&mut self.state.write(), "stats", result.map(Some), |d, v| d.stats = v);
            }
            AppEvent::DashboardChart(result) => {
                on_slice(&mut self.state.write(), "chart", result, |d, v| d.chart = v);
            }
            AppEvent::DashboardTopProducts(result) => {
                on_slice(&mut self.state.write(), "top_products", result, |d, v| d.top_products = v);
            }
            AppEvent::DashboardRecentSales(result) => {
                on_slice(&mut self.state.write(), "recent_sales", result, |d, v| d.recent_sales = v);
            }

            // ---- finance ----
            AppEvent::FinanceLoaded(result) => {
                handlers::finance::on_finance_loaded(&mut self.state.write(), result);
            }
            AppEvent::CustomerCreated(result) => {
                handlers::finance::on_customer_created(&mut self.state.write(), &ctx, result);
            }
            AppEvent::CustomerDeleted(result) => {
                handlers::finance::on_customer_deleted(&mut self.state.write(), &ctx, result);
            }
            AppEvent::CatalogItemCreated(result) => {
                handlers::finance::on_catalog_item_created(&mut self.state.write(), &ctx, result);
            }
            AppEvent::StockAdjusted(result) => {
                handlers::finance::on_stock_adjusted(&mut self.state.write(), &ctx, result);
            }
            AppEvent::EntryCreated(result) => {
                handlers::finance::on_entry_created(&mut self.state.write(), &ctx, result);
            }
            AppEvent::QuoteCreated(result) => {
                handlers::finance::on_quote_created(&mut self.state.write(), &ctx, result);
            }
            AppEvent::QuoteDeleted(result) => {
                handlers::finance::on_quote_deleted(&mut self.state.write(), &ctx, result);
            }

            // ---- sales / service orders / pos ----
            AppEvent::LookupCustomers(result) => {
                handlers::sales::on_customers_loaded(&mut self.state.write(), result);
            }
            AppEvent::LookupCatalog(result) => {
                handlers::sales::on_catalog_loaded(&mut self.state.write(), result);
            }
            AppEvent::SalesLoaded(result) => {
                handlers::sales::on_sales_loaded(&mut self.state.write(), result);
            }
            AppEvent::SaleSaved(result) => {
                handlers::sales::on_sale_saved(&mut self.state.write(), &ctx, result);
            }
            AppEvent::SaleDeleted(result) => {
                handlers::sales::on_sale_changed(
                    &mut self.state.write(),
                    &ctx,
                    result,
                    "Sale deleted",
                    "Could not delete the sale",
                );
            }
            AppEvent::SaleStatusChanged(result) => {
                handlers::sales::on_sale_changed(
                    &mut self.state.write(),
                    &ctx,
                    result,
                    "Status updated",
                    "Could not update the status",
                );
            }
            AppEvent::ServiceOrdersLoaded(result) => {
                handlers::service_orders::on_orders_loaded(&mut self.state.write(), result);
            }
            AppEvent::ServiceOrderCreated(result) => {
                handlers::service_orders::on_order_created(&mut self.state.write(), &ctx, result);
            }
            AppEvent::ServiceOrderStatusChanged(result) => {
                handlers::service_orders::on_status_changed(&mut self.state.write(), &ctx, result);
            }
            AppEvent::CodeLookup { code, result } => {
                handlers::pos::on_code_lookup(&mut self.state.write(), &code, result);
            }
            AppEvent::SaleFinalized(result) => {
                handlers::pos::on_sale_finalized(&mut self.state.write(), &ctx, result);
            }

            // ---- profile / settings / nfe ----
            AppEvent::ProfileLoaded(result) => {
                handlers::profile::on_profile_loaded(&mut self.state.write(), result);
            }
            AppEvent::ProfileSaved(result) => {
                let user = handlers::profile::on_profile_saved(&mut self.state.write(), result);
                if let Some(user) = user {
                    self.cache_user(&user);
                }
            }
            AppEvent::SettingsLoaded(result) => {
                handlers::settings::on_settings_loaded(&mut self.state.write(), result);
            }
            AppEvent::SettingsSaved(result) => {
                handlers::settings::on_settings_saved(&mut self.state.write(), result);
            }
            AppEvent::NfeImported(result) => {
                handlers::nfe::on_imported(&mut self.state.write(), result);
            }
            AppEvent::PdfSaved(result) => {
                handlers::pdf::on_saved(&mut self.state.write(), result);
            }
        }
    }
}

impl App {
    fn handle_login_result(&mut self, result: Result<AuthResponse>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let auth = match result {
            Ok(auth) => auth,
            Err(err) => {
                let message = match &err {
                    AppError::Unauthorized(None) => "Invalid email or password".to_string(),
                    other => handlers::failure_message(other, "Could not sign in"),
                };
                let mut state = self.state.write();
                state.auth.pending = false;
                state.auth.banner = Some(Banner::error(message));
                return;
            }
        };

        let user = SessionUser::from(&auth);
        if let Err(err) = self.session.save_session(&auth.token, auth.expires_in, &user) {
            tracing::error!(error = %err, "Could not persist the session");
            let mut state = self.state.write();
            state.auth.pending = false;
            state.auth.banner = Some(Banner::error("Could not store the session on this machine"));
            return;
        }

        {
            let mut state = self.state.write();
            state.auth.pending = false;
            state.auth.login = Default::default();
            state.user = Some(user);
        }
        tracing::info!(email = %auth.email, "Signed in");
        self.navigate(Screen::Dashboard);
    }

    /// A stored session was found at startup and the backend answered `/auth/me`.
    ///
    /// Rejections never get here. A network failure keeps the cached user.
    fn handle_session_restored(&mut self, result: Result<Profile>) {
        match result {
            Ok(profile) => {
                let user = session_user(&profile);
                self.cache_user(&user);
                self.state.write().user = Some(user);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not refresh the stored session user");
            }
        }
    }

    fn cache_user(&self, user: &SessionUser) {
        if let Err(err) = self.session.set_user(user) {
            tracing::warn!(error = %err, "Could not cache the session user");
        }
    }
}
