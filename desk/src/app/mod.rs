//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async task handlers,
//! the session guard, and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - drain events, enforce the guard       │   │
//! │  │  - navigate() - guard, epoch bump, on-enter loads    │   │
//! │  │  - handle_*() - user actions, delegated to handlers  │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - written only on this thread                       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//!                         │ Envelope { epoch, event }
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - one ApiService call per task                             │
//! │  - ExpiryWatcher ticking once per second                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## View Epochs
//!
//! Every navigation bumps `view_epoch`. Loads started from a view carry the epoch
//! that was current when they were spawned, and [`App::on_tick`] drops any result
//! whose epoch no longer matches. Navigating away is how in-flight loads are
//! cancelled; their results are simply never applied.
//!
//! Writes go through `App::mutation_ctx` and carry no epoch. Their results always
//! land, so a submit followed by navigation still clears its pending flag.
//!
//! ## Session
//!
//! The [`SessionGuard`] is consulted on every protected navigation and on every
//! frame that renders a protected screen. A rejected token on any response ends the
//! session the same way expiry does: storage cleared, per-user state dropped, login
//! screen with a warning toast.

pub mod event_handler;
pub mod events;
pub mod forms;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::{AppEvent, Envelope};
pub use forms::FieldErrors;
pub use handlers::pdf::PdfDocument;
pub use state::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::{CatalogItem, Sale, SaleFilter, SaleStatus, ServiceOrderStatus};
use uuid::Uuid;

use crate::core::service::ApiService;
use crate::services::session::{
    ExpiryWatcher, GuardState, SessionGuard, SessionStore, ThemeMode, ThemePreference,
};
use tasks::TaskContext;

/// Main application orchestrator.
///
/// Owns the event channel, the session guard and the expiry watcher. The UI reads
/// [`App::state`] and calls the `handle_*` methods; nothing else mutates state.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for the shortest possible time; never across an `.await`.
    pub state: Arc<RwLock<AppState>>,

    /// Receives task results; polled in [`App::on_tick`] with `try_recv`.
    event_rx: Receiver<Envelope>,

    /// Cloned into every [`TaskContext`].
    event_tx: Sender<Envelope>,

    api: Arc<dyn ApiService>,
    session: Arc<SessionStore>,
    guard: SessionGuard,
    theme: ThemePreference,

    /// Alive only while a protected screen is shown
    watcher: Option<ExpiryWatcher>,
}

impl App {
    /// Create the application and restore a stored session if one is still valid.
    ///
    /// Must be called inside a Tokio runtime context; see [`crate::utils::runtime`].
    pub fn new(api: Arc<dyn ApiService>, session: Arc<SessionStore>, theme: ThemePreference) -> Self {
        let (event_tx, event_rx) = unbounded();
        let state = AppState::new(theme.load());

        let mut app = Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            api,
            guard: SessionGuard::new(session.clone()),
            session,
            theme,
            watcher: None,
        };
        app.restore_session();
        app
    }

    fn restore_session(&mut self) {
        match self.guard.enforce() {
            GuardState::Authenticated => {
                tracing::info!("Stored session found, restoring");
                self.state.write().user = self.session.user();
                self.navigate(Screen::Dashboard);
                self.detached_ctx()
                    .spawn(|api| async move { AppEvent::SessionRestored(api.me().await) });
            }
            GuardState::Unauthenticated => {
                tracing::info!("No valid stored session, showing login");
                self.navigate(Screen::Login);
            }
        }
    }

    /// Context for tasks whose result belongs to the current view.
    pub(crate) fn ctx(&self) -> TaskContext {
        TaskContext {
            api: self.api.clone(),
            tx: self.event_tx.clone(),
            epoch: Some(self.state.read().view_epoch),
        }
    }

    /// Context for tasks whose result must survive navigation.
    fn detached_ctx(&self) -> TaskContext {
        TaskContext {
            api: self.api.clone(),
            tx: self.event_tx.clone(),
            epoch: None,
        }
    }

    /// Context for writes. The server may already have applied them, so their result is
    /// delivered even after the view is left: pending flags clear and forms reset on
    /// confirmed success.
    pub(crate) fn mutation_ctx(&self) -> TaskContext {
        self.detached_ctx()
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    /// Process pending results and re-check the session. Called every frame.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(envelope) = self.event_rx.try_recv() {
            processed += 1;
            self.handle_envelope(envelope);
        }
        if processed > 0 {
            tracing::trace!(processed, "on_tick: processed events");
        }

        if self.current_screen().requires_auth() && self.guard.enforce() == GuardState::Unauthenticated {
            tracing::info!("Session no longer valid on a protected screen");
            self.handle_event(AppEvent::SessionExpired);
        }
    }

    /// Apply `envelope` unless it belongs to a view that has since been left.
    pub fn handle_envelope(&mut self, envelope: Envelope) {
        let current = self.state.read().view_epoch;
        if envelope.is_stale(current) {
            tracing::debug!(
                event = envelope.event.name(),
                epoch = ?envelope.epoch,
                current,
                "Dropping result for a view that is no longer shown"
            );
            return;
        }
        self.handle_event(envelope.event);
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Show `screen`, starting its loads.
    ///
    /// Protected screens without a valid session land on the login form instead.
    pub fn navigate(&mut self, screen: Screen) {
        let target = if screen.requires_auth() && self.guard.enforce() == GuardState::Unauthenticated {
            tracing::info!(requested = ?screen, "Not authenticated, redirecting to login");
            Screen::Login
        } else {
            screen
        };

        {
            let mut state = self.state.write();
            state.view_epoch += 1;
            state.current_screen = target;
            tracing::debug!(screen = ?target, epoch = state.view_epoch, "Navigated");
        }

        if target.requires_auth() {
            self.ensure_watcher();
        } else {
            self.watcher = None;
        }

        self.enter(target);
    }

    fn ensure_watcher(&mut self) {
        if self.watcher.as_ref().is_some_and(|w| !w.is_finished()) {
            return;
        }
        let tx = self.event_tx.clone();
        self.watcher = Some(ExpiryWatcher::spawn(self.guard.clone(), move || {
            let envelope = Envelope {
                epoch: None,
                event: AppEvent::SessionExpired,
            };
            if tx.try_send(envelope).is_err() {
                tracing::debug!("Event channel closed before expiry could be reported");
            }
        }));
    }

    /// On-enter loads for `screen`.
    fn enter(&mut self, screen: Screen) {
        let ctx = self.ctx();
        let mut state = self.state.write();
        match screen {
            Screen::Login | Screen::Register | Screen::ForgotPassword | Screen::ResetPassword => {
                state.auth.banner = None;
                state.auth.pending = false;
            }
            Screen::Dashboard => handlers::dashboard::load_dashboard(&mut state, &ctx),
            Screen::Customers | Screen::Catalog | Screen::Stock | Screen::Entries | Screen::Quotes => {
                state.finance.banner = None;
                handlers::finance::load_finance(&mut state, &ctx);
            }
            Screen::Sales => {
                handlers::sales::load_sales(&mut state, &ctx);
                tasks::lookups::fetch_lookups(&ctx);
            }
            Screen::ServiceOrders => {
                handlers::service_orders::load_orders(&mut state, &ctx);
                tasks::lookups::fetch_lookups(&ctx);
            }
            Screen::PointOfSale => {
                // A lookup issued from the previous visit reports to a dead epoch
                state.pos.lookup_pending = false;
                tasks::lookups::fetch_catalog(&ctx);
            }
            Screen::Profile => handlers::profile::load_profile(&mut state, &ctx),
            Screen::Settings => handlers::settings::load_settings(&mut state, &ctx),
            Screen::NfeImport => {}
        }
    }

    /// Clear the session and return to the login form with a warning.
    pub(crate) fn end_session(&mut self, message: &str) {
        tracing::info!(reason = message, "Ending session");
        if let Err(e) = self.session.clear_session() {
            tracing::error!(error = %e, "Failed to clear session");
        }
        self.watcher = None;
        {
            let mut state = self.state.write();
            state.clear_user_data();
            state.toast(ToastLevel::Warning, message);
        }
        self.navigate(Screen::Login);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle screen change from the side navigation
    pub fn handle_screen_change(&mut self, screen: Screen) {
        self.navigate(screen);
    }

    /// Reload the current screen
    pub fn handle_refresh(&mut self) {
        let screen = self.current_screen();
        self.navigate(screen);
    }

    pub fn handle_logout(&mut self) {
        tracing::info!("Signing out");
        if let Err(e) = self.session.clear_session() {
            tracing::error!(error = %e, "Failed to clear session on logout");
        }
        self.watcher = None;
        {
            let mut state = self.state.write();
            state.clear_user_data();
            state.toast(ToastLevel::Info, "Signed out");
        }
        self.navigate(Screen::Login);
    }

    /// Flip light/dark and remember the choice; it outlives the session.
    pub fn handle_theme_toggle(&mut self) {
        let mode = {
            let mut state = self.state.write();
            state.theme = state.theme.toggled();
            state.theme
        };
        if let Err(e) = self.theme.save(mode) {
            tracing::warn!(error = %e, "Could not persist theme preference");
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.read().theme
    }

    // ---- auth ----

    pub fn handle_login_submit(&mut self) {
        handlers::auth::submit_login(&self.state, &self.ctx());
    }

    pub fn handle_register_submit(&mut self) {
        handlers::auth::submit_register(&self.state, &self.ctx());
    }

    pub fn handle_forgot_password_submit(&mut self) {
        handlers::auth::submit_forgot_password(&self.state, &self.ctx());
    }

    pub fn handle_reset_password_submit(&mut self) {
        handlers::auth::submit_reset_password(&self.state, &self.ctx());
    }

    // ---- finance ----

    pub fn handle_customer_submit(&mut self) {
        handlers::finance::submit_customer(&self.state, &self.mutation_ctx());
    }

    pub fn handle_customer_delete(&mut self, id: i64) {
        handlers::finance::delete_customer(&self.state, &self.mutation_ctx(), id);
    }

    pub fn handle_catalog_image_pick(&mut self, path: &Path) {
        handlers::finance::pick_catalog_image(&self.state, path);
    }

    pub fn handle_catalog_submit(&mut self) {
        handlers::finance::submit_catalog_item(&self.state, &self.mutation_ctx());
    }

    pub fn handle_stock_adjust_submit(&mut self) {
        handlers::finance::submit_stock_adjustment(&self.state, &self.mutation_ctx());
    }

    pub fn handle_entry_submit(&mut self) {
        handlers::finance::submit_entry(&self.state, &self.mutation_ctx());
    }

    pub fn handle_quote_submit(&mut self) {
        handlers::finance::submit_quote(&self.state, &self.mutation_ctx());
    }

    pub fn handle_quote_delete(&mut self, id: i64) {
        handlers::finance::delete_quote(&self.state, &self.mutation_ctx(), id);
    }

    /// Save a document PDF to `target`, picked by the caller in a save dialog.
    pub fn handle_pdf_download(&mut self, document: PdfDocument, target: PathBuf) {
        handlers::pdf::download(&self.detached_ctx(), document, target);
    }

    // ---- sales ----

    pub fn handle_sales_filter_apply(&mut self, filter: SaleFilter) {
        let ctx = self.ctx();
        let mut state = self.state.write();
        state.sales.filter = filter;
        handlers::sales::load_sales(&mut state, &ctx);
    }

    pub fn handle_sale_new(&mut self) {
        handlers::sales::open_new(&self.state);
    }

    pub fn handle_sale_edit(&mut self, sale: &Sale) {
        handlers::sales::open_edit(&self.state, sale);
    }

    pub fn handle_sale_form_close(&mut self) {
        handlers::sales::close_form(&self.state);
    }

    pub fn handle_sale_submit(&mut self) {
        handlers::sales::submit_sale(&self.state, &self.mutation_ctx());
    }

    pub fn handle_sale_delete(&mut self, id: i64) {
        handlers::sales::delete_sale(&self.state, &self.mutation_ctx(), id);
    }

    pub fn handle_sale_status_change(&mut self, id: i64, status: SaleStatus) {
        handlers::sales::change_status(&self.state, &self.mutation_ctx(), id, status);
    }

    // ---- service orders ----

    pub fn handle_service_order_new(&mut self) {
        handlers::service_orders::open_form(&self.state);
    }

    pub fn handle_service_order_form_close(&mut self) {
        handlers::service_orders::close_form(&self.state);
    }

    pub fn handle_service_order_submit(&mut self) {
        handlers::service_orders::submit_order(&self.state, &self.mutation_ctx());
    }

    pub fn handle_service_order_status_change(&mut self, id: i64, status: ServiceOrderStatus) {
        handlers::service_orders::change_status(&self.state, &self.mutation_ctx(), id, status);
    }

    // ---- point of sale ----

    pub fn handle_cart_add_product(&mut self, item: &CatalogItem) {
        handlers::pos::add_product(&mut self.state.write(), item);
    }

    pub fn handle_cart_add_manual(&mut self) {
        handlers::pos::add_manual(&self.state);
    }

    pub fn handle_cart_set_quantity(&mut self, id: Uuid, quantity: f64) {
        handlers::pos::set_quantity(&self.state, id, quantity);
    }

    pub fn handle_cart_increment(&mut self, id: Uuid) {
        handlers::pos::increment(&self.state, id);
    }

    pub fn handle_cart_decrement(&mut self, id: Uuid) {
        handlers::pos::decrement(&self.state, id);
    }

    pub fn handle_cart_remove(&mut self, id: Uuid) {
        handlers::pos::remove(&self.state, id);
    }

    pub fn handle_cart_clear(&mut self) {
        handlers::pos::clear_cart(&self.state);
    }

    pub fn handle_code_lookup(&mut self) {
        handlers::pos::lookup_code(&self.state, &self.ctx());
    }

    pub fn handle_sale_finalize(&mut self) {
        handlers::pos::finalize(&self.state, &self.mutation_ctx());
    }

    // ---- profile ----

    pub fn handle_avatar_pick(&mut self, path: &Path) {
        handlers::profile::pick_avatar(&self.state, path);
    }

    pub fn handle_avatar_remove(&mut self) {
        handlers::profile::remove_avatar(&self.state);
    }

    pub fn handle_profile_submit(&mut self) {
        handlers::profile::submit_profile(&self.state, &self.mutation_ctx());
    }

    // ---- settings ----

    pub fn handle_settings_tab(&mut self, tab: SettingsTab) {
        handlers::settings::select_tab(&self.state, tab);
    }

    pub fn handle_logo_pick(&mut self, path: &Path) {
        handlers::settings::pick_logo(&self.state, path);
    }

    pub fn handle_settings_submit(&mut self) {
        handlers::settings::submit_settings(&self.state, &self.mutation_ctx());
    }

    // ---- nfe ----

    pub fn handle_nfe_pick(&mut self, path: &Path) {
        handlers::nfe::pick_file(&self.state, path);
    }

    pub fn handle_nfe_reset(&mut self) {
        handlers::nfe::reset(&self.state);
    }

    pub fn handle_nfe_upload(&mut self) {
        handlers::nfe::upload(&self.state, &self.mutation_ctx());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::session::{KeyValueStore, ManualClock, MemoryStore};
    use crate::test_support::StubApi;
    use shared::dto::{AuthResponse, SessionUser, SystemConfig};
    use std::time::Duration;

    struct Fixture {
        app: App,
        clock: Arc<ManualClock>,
        session: Arc<SessionStore>,
        store: Arc<MemoryStore>,
    }

    fn fixture_with(api: StubApi, signed_in_for: Option<i64>) -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let session = Arc::new(SessionStore::new(store.clone(), clock.clone()));
        if let Some(secs) = signed_in_for {
            let user = SessionUser {
                name: "Ana".into(),
                email: "ana@shop.com".into(),
                avatar_base64: None,
            };
            session
                .save_session("stored-token", secs, &user)
                .expect("save should succeed in test");
        }
        let theme = ThemePreference::new(store.clone() as Arc<dyn KeyValueStore>);
        let app = App::new(Arc::new(api), session.clone(), theme);
        Fixture { app, clock, session, store }
    }

    fn fixture(signed_in_for: Option<i64>) -> Fixture {
        fixture_with(StubApi::default(), signed_in_for)
    }

    // ========== Startup Tests ==========

    #[tokio::test]
    async fn test_startup_without_session_shows_login() {
        let f = fixture(None);

        assert_eq!(f.app.current_screen(), Screen::Login);
        assert!(f.app.watcher.is_none());
    }

    #[tokio::test]
    async fn test_startup_with_session_restores_dashboard() {
        let f = fixture(Some(3600));

        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ana"));
        assert_eq!(state.dashboard.pending, tasks::dashboard::DASHBOARD_SLICES);
        drop(state);
        assert!(f.app.watcher.is_some());
    }

    #[tokio::test]
    async fn test_startup_with_expired_session_clears_it() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let session = Arc::new(SessionStore::new(store.clone(), clock.clone()));
        session
            .save_session("old", 10, &SessionUser::default())
            .expect("save should succeed in test");
        clock.advance(Duration::from_secs(11));

        let app = App::new(
            Arc::new(StubApi::default()),
            session.clone(),
            ThemePreference::new(store),
        );

        assert_eq!(app.current_screen(), Screen::Login);
        assert!(session.token().is_none());
    }

    // ========== Guard Tests ==========

    #[tokio::test]
    async fn test_protected_navigation_without_session_lands_on_login() {
        let mut f = fixture(None);

        f.app.navigate(Screen::Sales);

        assert_eq!(f.app.current_screen(), Screen::Login);
    }

    #[tokio::test]
    async fn test_expiry_redirects_on_next_tick() {
        // Arrange
        let mut f = fixture(Some(60));
        f.app.navigate(Screen::Customers);

        // Act
        f.clock.advance(Duration::from_secs(61));
        f.app.on_tick();

        // Assert
        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(state.user.is_none());
        assert_eq!(state.pending_toasts.last().map(|t| t.level), Some(ToastLevel::Warning));
        drop(state);
        assert!(f.session.token().is_none());
        assert!(f.app.watcher.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_result_ends_session() {
        let mut f = fixture(Some(3600));
        f.app.navigate(Screen::Sales);
        let epoch = f.app.state.read().view_epoch;

        f.app.handle_envelope(Envelope {
            epoch: Some(epoch),
            event: AppEvent::SalesLoaded(Err(AppError::Unauthorized(None))),
        });

        assert_eq!(f.app.current_screen(), Screen::Login);
        assert!(f.session.token().is_none());
        assert!(f.app.state.read().sales.sales.is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_on_restore_keeps_session() {
        let mut f = fixture(Some(3600));

        f.app.handle_envelope(Envelope {
            epoch: None,
            event: AppEvent::SessionRestored(Err(AppError::Network("offline".into()))),
        });

        assert_eq!(f.app.current_screen(), Screen::Dashboard);
        assert!(f.session.token().is_some());
    }

    #[tokio::test]
    async fn test_expiry_reported_twice_ends_session_once() {
        let mut f = fixture(Some(60));
        f.app.navigate(Screen::Customers);
        f.clock.advance(Duration::from_secs(61));
        f.app.on_tick();
        let epoch = f.app.state.read().view_epoch;
        let toasts = f.app.state.read().pending_toasts.len();

        f.app.handle_envelope(Envelope {
            epoch: None,
            event: AppEvent::SessionExpired,
        });

        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(state.view_epoch, epoch);
        assert_eq!(state.pending_toasts.len(), toasts);
    }

    #[tokio::test]
    async fn test_rejection_on_public_screen_is_a_plain_failure() {
        let mut f = fixture(None);
        f.app.navigate(Screen::Register);
        f.app.state.write().auth.pending = true;

        f.app.handle_event(AppEvent::RegisterResult(Err(AppError::Unauthorized(None))));

        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Register);
        assert!(!state.auth.pending);
        assert!(state.auth.banner.is_some());
    }

    // ========== Epoch Tests ==========

    #[tokio::test]
    async fn test_stale_result_is_dropped() {
        // Arrange
        let mut f = fixture(Some(3600));
        f.app.navigate(Screen::Settings);
        let old_epoch = f.app.state.read().view_epoch;
        f.app.navigate(Screen::Dashboard);

        let config = SystemConfig {
            company_name: "Oficina Central".into(),
            ..SystemConfig::default()
        };

        // Act
        f.app.handle_envelope(Envelope {
            epoch: Some(old_epoch),
            event: AppEvent::SettingsLoaded(Ok(config.clone())),
        });

        // Assert
        assert_ne!(f.app.state.read().settings.config.company_name, "Oficina Central");

        let current = f.app.state.read().view_epoch;
        f.app.handle_envelope(Envelope {
            epoch: Some(current),
            event: AppEvent::SettingsLoaded(Ok(config)),
        });
        assert_eq!(f.app.state.read().settings.config.company_name, "Oficina Central");
    }

    async fn settle(app: &mut App) {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
        app.on_tick();
    }

    #[tokio::test]
    async fn test_finalized_sale_lands_after_leaving_pos() {
        // Arrange
        let api = StubApi::default();
        let calls = api.calls.clone();
        let mut f = fixture_with(api, Some(3600));
        f.app.navigate(Screen::PointOfSale);
        f.app.handle_cart_add_product(&CatalogItem {
            id: 8,
            name: "Brake pad".into(),
            unit_price: 45.0,
            stock_quantity: 3.0,
            ..CatalogItem::default()
        });

        // Act
        f.app.handle_sale_finalize();
        f.app.navigate(Screen::Dashboard);
        f.app.navigate(Screen::PointOfSale);
        settle(&mut f.app).await;

        // Assert
        {
            let state = f.app.state.read();
            assert!(!state.pos.finalizing);
            assert!(state.pos.cart.is_empty());
            assert!(state.pending_toasts.iter().any(|t| t.level == ToastLevel::Success));
        }
        assert_eq!(calls.lock().iter().filter(|c| **c == "create_sale").count(), 1);

        // The screen takes a new sale afterwards
        f.app.handle_cart_add_product(&CatalogItem {
            id: 9,
            name: "Oil filter".into(),
            unit_price: 30.0,
            stock_quantity: 5.0,
            ..CatalogItem::default()
        });
        f.app.handle_sale_finalize();
        assert!(f.app.state.read().pos.finalizing);
        settle(&mut f.app).await;
        assert!(!f.app.state.read().pos.finalizing);
        assert_eq!(calls.lock().iter().filter(|c| **c == "create_sale").count(), 2);
    }

    #[tokio::test]
    async fn test_finance_submit_is_retryable_after_refresh() {
        let api = StubApi::default();
        let calls = api.calls.clone();
        let mut f = fixture_with(api, Some(3600));
        f.app.navigate(Screen::Customers);
        f.app.state.write().finance.customer_form.name = "Oficina Central".into();

        f.app.handle_customer_submit();
        f.app.handle_refresh();
        settle(&mut f.app).await;

        {
            let state = f.app.state.read();
            assert!(!state.finance.pending);
            assert!(state.finance.customer_form.name.is_empty());
        }

        f.app.state.write().finance.customer_form.name = "Auto Peças".into();
        f.app.handle_customer_submit();
        assert!(f.app.state.read().finance.pending);
        assert_eq!(calls.lock().iter().filter(|c| **c == "create_customer").count(), 2);
    }

    #[tokio::test]
    async fn test_code_lookup_flag_resets_on_reentry() {
        let mut f = fixture(Some(3600));
        f.app.navigate(Screen::PointOfSale);
        f.app.state.write().pos.lookup_pending = true;

        f.app.navigate(Screen::Dashboard);
        f.app.navigate(Screen::PointOfSale);

        assert!(!f.app.state.read().pos.lookup_pending);
    }

    // ========== Login Tests ==========

    #[tokio::test]
    async fn test_login_success_saves_session() {
        let mut f = fixture(None);
        f.app.state.write().auth.pending = true;

        f.app.handle_event(AppEvent::LoginResult(Ok(AuthResponse {
            token: "fresh".into(),
            token_type: "Bearer".into(),
            expires_in: 7200,
            name: "Bruno".into(),
            email: "bruno@shop.com".into(),
        })));

        assert_eq!(f.session.token().as_deref(), Some("fresh"));
        assert_eq!(f.session.expires_at(), Some(1_700_000_000_000 + 7_200_000));
        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("bruno@shop.com"));
        assert!(!state.auth.pending);
    }

    #[tokio::test]
    async fn test_login_rejection_shows_banner() {
        let mut f = fixture(None);

        f.app.handle_event(AppEvent::LoginResult(Err(AppError::Unauthorized(None))));

        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(state.auth.banner, Some(Banner::error("Invalid email or password")));
        assert!(state.pending_toasts.is_empty());
    }

    // ========== Logout / Theme Tests ==========

    #[tokio::test]
    async fn test_logout_clears_session_and_user_data() {
        let mut f = fixture(Some(3600));
        f.app.state.write().finance.loading = true;

        f.app.handle_logout();

        assert!(f.session.token().is_none());
        assert!(f.session.user().is_none());
        let state = f.app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(state.user.is_none());
        assert!(!state.finance.loading);
    }

    #[tokio::test]
    async fn test_theme_toggle_outlives_logout() {
        let mut f = fixture(Some(3600));

        f.app.handle_theme_toggle();
        f.app.handle_logout();

        assert_eq!(f.app.theme(), ThemeMode::Light);
        assert_eq!(ThemePreference::new(f.store.clone()).load(), ThemeMode::Light);
    }

    // ========== Task Round Trip ==========

    #[tokio::test]
    async fn test_restored_profile_refreshes_cached_user() {
        let api = StubApi {
            profile: shared::dto::Profile {
                name: "Ana Souza".into(),
                email: "ana@shop.com".into(),
                ..Default::default()
            },
            ..StubApi::default()
        };
        let mut f = fixture_with(api, Some(3600));

        settle(&mut f.app).await;

        assert_eq!(f.session.user().map(|u| u.name), Some("Ana Souza".to_string()));
        assert_eq!(f.app.state.read().user.as_ref().map(|u| u.name.as_str()), Some("Ana Souza"));
    }
}
