//! # Application State Types
//!
//! All state-related types for the application: screens, banners and toasts, the auth
//! forms, and one slice per business screen. [`AppState`] is `Clone` so the UI can render
//! from a snapshot without holding the lock.

use shared::dto::{
    CatalogItem, Customer, FinanceSummary, FinancialEntry, NfeImportResult, Profile, Quote,
    RecentSale, Sale, SaleFilter, SalesChart, SalesStats, ServiceOrder, SessionUser,
    StockMovement, SystemConfig, TopProduct,
};

use crate::app::forms::{
    CatalogForm, CheckoutForm, CustomerForm, EntryForm, FieldErrors, ForgotPasswordForm,
    LoginForm, ProfileForm, QuoteForm, RegisterForm, ResetPasswordForm, SaleForm,
    ServiceOrderForm, StockAdjustForm,
};
use crate::domain::Cart;
use crate::services::session::ThemeMode;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Profile,
    Customers,
    Catalog,
    Stock,
    Entries,
    Quotes,
    PointOfSale,
    ServiceOrders,
    Sales,
    NfeImport,
    Settings,
}

impl Screen {
    /// Protected screens in side navigation order
    pub fn nav() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::PointOfSale,
            Screen::Sales,
            Screen::ServiceOrders,
            Screen::Quotes,
            Screen::Customers,
            Screen::Catalog,
            Screen::Stock,
            Screen::Entries,
            Screen::NfeImport,
            Screen::Settings,
            Screen::Profile,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign in",
            Screen::Register => "Create account",
            Screen::ForgotPassword => "Forgot password",
            Screen::ResetPassword => "Reset password",
            Screen::Dashboard => "Dashboard",
            Screen::Profile => "Profile",
            Screen::Customers => "Customers",
            Screen::Catalog => "Catalog",
            Screen::Stock => "Stock",
            Screen::Entries => "Financial entries",
            Screen::Quotes => "Quotes",
            Screen::PointOfSale => "Point of sale",
            Screen::ServiceOrders => "Service orders",
            Screen::Sales => "Sales",
            Screen::NfeImport => "NFe import",
            Screen::Settings => "Settings",
        }
    }

    /// Every screen except the four auth forms needs a live session.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Screen::Login | Screen::Register | Screen::ForgotPassword | Screen::ResetPassword
        )
    }

    /// Screens that render from the shared finance snapshot
    pub fn uses_finance_snapshot(&self) -> bool {
        matches!(
            self,
            Screen::Customers | Screen::Catalog | Screen::Stock | Screen::Entries | Screen::Quotes
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// Inline message at the top of a view; a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Stacking notification, handed to the UI's toast manager on the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Login, register and password recovery forms.
///
/// Only one is on screen at a time, so they share the banner and the pending flag.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub forgot: ForgotPasswordForm,
    pub reset: ResetPasswordForm,
    /// Reset token echoed by development backends
    pub reset_token_hint: Option<String>,
    pub banner: Option<Banner>,
    pub pending: bool,
}

/// Dashboard slices; each one is filled by its own request.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Option<FinanceSummary>,
    pub stats: Option<SalesStats>,
    pub chart: SalesChart,
    pub top_products: Vec<TopProduct>,
    pub recent_sales: Vec<RecentSale>,
    /// Slices still in flight
    pub pending: u8,
}

/// Result of the finance join-all
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceSnapshot {
    pub summary: FinanceSummary,
    pub customers: Vec<Customer>,
    pub catalog: Vec<CatalogItem>,
    pub movements: Vec<StockMovement>,
    pub entries: Vec<FinancialEntry>,
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, Default)]
pub struct FinanceState {
    pub data: FinanceSnapshot,
    pub loading: bool,
    /// A create/delete is in flight
    pub pending: bool,
    pub banner: Option<Banner>,
    pub customer_form: CustomerForm,
    pub catalog_form: CatalogForm,
    pub stock_form: StockAdjustForm,
    pub entry_form: EntryForm,
    pub quote_form: QuoteForm,
    pub catalog_search: String,
}

/// Customers and catalog for pickers on the sales, service order and POS screens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub customers: Vec<Customer>,
    pub catalog: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Default)]
pub struct SalesState {
    pub sales: Vec<Sale>,
    pub filter: SaleFilter,
    /// Open create/edit form
    pub form: Option<SaleForm>,
    pub errors: FieldErrors,
    pub loading: bool,
    pub pending: bool,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceOrdersState {
    pub orders: Vec<ServiceOrder>,
    pub form: Option<ServiceOrderForm>,
    pub loading: bool,
    pub pending: bool,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Default)]
pub struct PosState {
    pub cart: Cart,
    pub checkout: CheckoutForm,
    pub lookup_pending: bool,
    pub finalizing: bool,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub form: ProfileForm,
    pub loading: bool,
    pub pending: bool,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Company,
    Printing,
    System,
    Nfe,
}

impl SettingsTab {
    pub fn all() -> &'static [SettingsTab] {
        &[SettingsTab::Company, SettingsTab::Printing, SettingsTab::System, SettingsTab::Nfe]
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Company => "Company",
            SettingsTab::Printing => "Printing",
            SettingsTab::System => "System",
            SettingsTab::Nfe => "NFe",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub config: SystemConfig,
    pub tab: SettingsTab,
    pub loading: bool,
    pub pending: bool,
    pub banner: Option<Banner>,
}

/// XML picked for import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct NfeState {
    pub file: Option<PickedFile>,
    pub result: Option<NfeImportResult>,
    pub pending: bool,
    pub banner: Option<Banner>,
}

/// Everything the UI renders.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Bumped on every navigation; results stamped with an older value are dropped
    pub view_epoch: u64,
    /// Cached session user, shown in the side navigation
    pub user: Option<SessionUser>,
    pub theme: ThemeMode,
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub finance: FinanceState,
    pub lookups: Lookups,
    pub sales: SalesState,
    pub service_orders: ServiceOrdersState,
    pub pos: PosState,
    pub profile: ProfileState,
    pub settings: SettingsState,
    pub nfe: NfeState,
    /// Toasts waiting to be shown
    pub pending_toasts: Vec<Toast>,
}

impl AppState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            current_screen: Screen::Login,
            view_epoch: 0,
            user: None,
            theme,
            auth: AuthState::default(),
            dashboard: DashboardState::default(),
            finance: FinanceState::default(),
            lookups: Lookups::default(),
            sales: SalesState::default(),
            service_orders: ServiceOrdersState::default(),
            pos: PosState::default(),
            profile: ProfileState::default(),
            settings: SettingsState::default(),
            nfe: NfeState::default(),
            pending_toasts: Vec::new(),
        }
    }

    pub fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.pending_toasts.push(Toast {
            level,
            message: message.into(),
        });
    }

    /// Drop every per-user slice; used when the session ends.
    pub fn clear_user_data(&mut self) {
        let theme = self.theme;
        let toasts = std::mem::take(&mut self.pending_toasts);
        *self = Self::new(theme);
        self.pending_toasts = toasts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_screens_are_public() {
        assert!(!Screen::Login.requires_auth());
        assert!(!Screen::ResetPassword.requires_auth());
        assert!(Screen::Dashboard.requires_auth());
        assert!(Screen::nav().iter().all(Screen::requires_auth));
    }

    #[test]
    fn test_finance_screens_share_snapshot() {
        let shared: Vec<_> = Screen::nav()
            .iter()
            .filter(|s| s.uses_finance_snapshot())
            .collect();
        assert_eq!(shared.len(), 5);
        assert!(!Screen::Sales.uses_finance_snapshot());
    }

    #[test]
    fn test_clear_user_data_keeps_theme_and_toasts() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.user = Some(SessionUser::default());
        state.toast(ToastLevel::Warning, "Session expired");
        state.finance.loading = true;

        state.clear_user_data();

        assert!(state.user.is_none());
        assert!(!state.finance.loading);
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_eq!(state.pending_toasts.len(), 1);
    }
}
