//! # Application Events
//!
//! Results of async tasks, sent to the UI thread over the event channel. Every event
//! travels inside an [`Envelope`] stamped with the view epoch of the screen that asked
//! for it.

use std::path::PathBuf;

use shared::dto::{
    AuthResponse, CatalogItem, Customer, FinanceSummary, FinancialEntry, ForgotPasswordResponse,
    MessageResponse, NfeImportResult, Profile, Quote, RecentSale, Sale, SalesChart, SalesStats,
    ServiceOrder, SystemConfig, TopProduct, UpdateProfileResponse,
};

use crate::app::state::FinanceSnapshot;
use crate::core::error::{AppError, Result};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    // ---- auth ----
    LoginResult(Result<AuthResponse>),
    RegisterResult(Result<MessageResponse>),
    ForgotPasswordResult(Result<ForgotPasswordResponse>),
    ResetPasswordResult(Result<MessageResponse>),
    /// Delayed hop back to the login form after register/reset
    RedirectToLogin,
    /// `GET /auth/me` for a session found at startup
    SessionRestored(Result<Profile>),
    /// The expiry watcher saw the token lapse
    SessionExpired,

    // ---- dashboard ----
    DashboardSummary(Result<FinanceSummary>),
    DashboardStats(Result<SalesStats>),
    DashboardChart(Result<SalesChart>),
    DashboardTopProducts(Result<Vec<TopProduct>>),
    DashboardRecentSales(Result<Vec<RecentSale>>),

    // ---- finance ----
    FinanceLoaded(Result<FinanceSnapshot>),
    CustomerCreated(Result<Customer>),
    CustomerDeleted(Result<()>),
    CatalogItemCreated(Result<CatalogItem>),
    StockAdjusted(Result<()>),
    EntryCreated(Result<FinancialEntry>),
    QuoteCreated(Result<Quote>),
    QuoteDeleted(Result<()>),

    // ---- sales / service orders / pos ----
    LookupCustomers(Result<Vec<Customer>>),
    LookupCatalog(Result<Vec<CatalogItem>>),
    SalesLoaded(Result<Vec<Sale>>),
    SaleSaved(Result<Sale>),
    SaleDeleted(Result<()>),
    SaleStatusChanged(Result<()>),
    ServiceOrdersLoaded(Result<Vec<ServiceOrder>>),
    ServiceOrderCreated(Result<ServiceOrder>),
    ServiceOrderStatusChanged(Result<()>),
    CodeLookup { code: String, result: Result<CatalogItem> },
    SaleFinalized(Result<Sale>),

    // ---- profile / settings / nfe ----
    ProfileLoaded(Result<Profile>),
    ProfileSaved(Result<UpdateProfileResponse>),
    SettingsLoaded(Result<SystemConfig>),
    SettingsSaved(Result<SystemConfig>),
    NfeImported(Result<NfeImportResult>),

    /// PDF written to the path picked in the save dialog
    PdfSaved(Result<PathBuf>),
}

impl AppEvent {
    /// The error carried by this event, if it is a failed result.
    pub fn error(&self) -> Option<&AppError> {
        fn err<T>(result: &Result<T>) -> Option<&AppError> {
            result.as_ref().err()
        }

        match self {
            AppEvent::LoginResult(r) => err(r),
            AppEvent::RegisterResult(r) | AppEvent::ResetPasswordResult(r) => err(r),
            AppEvent::ForgotPasswordResult(r) => err(r),
            AppEvent::SessionRestored(r) | AppEvent::ProfileLoaded(r) => err(r),
            AppEvent::RedirectToLogin | AppEvent::SessionExpired => None,
            AppEvent::DashboardSummary(r) => err(r),
            AppEvent::DashboardStats(r) => err(r),
            AppEvent::DashboardChart(r) => err(r),
            AppEvent::DashboardTopProducts(r) => err(r),
            AppEvent::DashboardRecentSales(r) => err(r),
            AppEvent::FinanceLoaded(r) => err(r),
            AppEvent::CustomerCreated(r) => err(r),
            AppEvent::CustomerDeleted(r)
            | AppEvent::StockAdjusted(r)
            | AppEvent::QuoteDeleted(r)
            | AppEvent::SaleDeleted(r)
            | AppEvent::SaleStatusChanged(r)
            | AppEvent::ServiceOrderStatusChanged(r) => err(r),
            AppEvent::CatalogItemCreated(r) => err(r),
            AppEvent::CodeLookup { result, .. } => err(result),
            AppEvent::EntryCreated(r) => err(r),
            AppEvent::QuoteCreated(r) => err(r),
            AppEvent::LookupCustomers(r) => err(r),
            AppEvent::LookupCatalog(r) => err(r),
            AppEvent::SalesLoaded(r) => err(r),
            AppEvent::SaleSaved(r) | AppEvent::SaleFinalized(r) => err(r),
            AppEvent::ServiceOrdersLoaded(r) => err(r),
            AppEvent::ServiceOrderCreated(r) => err(r),
            AppEvent::ProfileSaved(r) => err(r),
            AppEvent::SettingsLoaded(r) | AppEvent::SettingsSaved(r) => err(r),
            AppEvent::NfeImported(r) => err(r),
            AppEvent::PdfSaved(r) => err(r),
        }
    }

    /// A 401/403 anywhere but the login form ends the session. A profile fetch that
    /// fails for any reason other than the network does too.
    pub fn ends_session(&self) -> bool {
        match self {
            AppEvent::LoginResult(_) => false,
            AppEvent::SessionExpired => true,
            AppEvent::ProfileLoaded(Err(err)) | AppEvent::SessionRestored(Err(err)) => {
                !matches!(err, AppError::Network(_))
            }
            other => other.error().is_some_and(AppError::is_unauthorized),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::RegisterResult(_) => "RegisterResult",
            AppEvent::ForgotPasswordResult(_) => "ForgotPasswordResult",
            AppEvent::ResetPasswordResult(_) => "ResetPasswordResult",
            AppEvent::RedirectToLogin => "RedirectToLogin",
            AppEvent::SessionRestored(_) => "SessionRestored",
            AppEvent::SessionExpired => "SessionExpired",
            AppEvent::DashboardSummary(_) => "DashboardSummary",
            AppEvent::DashboardStats(_) => "DashboardStats",
            AppEvent::DashboardChart(_) => "DashboardChart",
            AppEvent::DashboardTopProducts(_) => "DashboardTopProducts",
            AppEvent::DashboardRecentSales(_) => "DashboardRecentSales",
            AppEvent::FinanceLoaded(_) => "FinanceLoaded",
            AppEvent::CustomerCreated(_) => "CustomerCreated",
            AppEvent::CustomerDeleted(_) => "CustomerDeleted",
            AppEvent::CatalogItemCreated(_) => "CatalogItemCreated",
            AppEvent::StockAdjusted(_) => "StockAdjusted",
            AppEvent::EntryCreated(_) => "EntryCreated",
            AppEvent::QuoteCreated(_) => "QuoteCreated",
            AppEvent::QuoteDeleted(_) => "QuoteDeleted",
            AppEvent::LookupCustomers(_) => "LookupCustomers",
            AppEvent::LookupCatalog(_) => "LookupCatalog",
            AppEvent::SalesLoaded(_) => "SalesLoaded",
            AppEvent::SaleSaved(_) => "SaleSaved",
            AppEvent::SaleDeleted(_) => "SaleDeleted",
            AppEvent::SaleStatusChanged(_) => "SaleStatusChanged",
            AppEvent::ServiceOrdersLoaded(_) => "ServiceOrdersLoaded",
            AppEvent::ServiceOrderCreated(_) => "ServiceOrderCreated",
            AppEvent::ServiceOrderStatusChanged(_) => "ServiceOrderStatusChanged",
            AppEvent::CodeLookup { .. } => "CodeLookup",
            AppEvent::SaleFinalized(_) => "SaleFinalized",
            AppEvent::ProfileLoaded(_) => "ProfileLoaded",
            AppEvent::ProfileSaved(_) => "ProfileSaved",
            AppEvent::SettingsLoaded(_) => "SettingsLoaded",
            AppEvent::SettingsSaved(_) => "SettingsSaved",
            AppEvent::NfeImported(_) => "NfeImported",
            AppEvent::PdfSaved(_) => "PdfSaved",
        }
    }
}

/// An event plus the view epoch it belongs to.
///
/// `epoch: None` marks results that outlive any single view (session restore, expiry).
#[derive(Debug, Clone)]
pub struct Envelope {
    pub epoch: Option<u64>,
    pub event: AppEvent,
}

impl Envelope {
    pub fn is_stale(&self, current_epoch: u64) -> bool {
        self.epoch.is_some_and(|epoch| epoch != current_epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejection_does_not_end_session() {
        let event = AppEvent::LoginResult(Err(AppError::Unauthorized(Some("Bad credentials".into()))));
        assert!(!event.ends_session());
    }

    #[test]
    fn test_unauthorized_result_ends_session() {
        let event = AppEvent::SalesLoaded(Err(AppError::Unauthorized(None)));
        assert!(event.ends_session());
        assert!(!AppEvent::SalesLoaded(Err(AppError::NotFound)).ends_session());
        assert!(AppEvent::SessionExpired.ends_session());
    }

    #[test]
    fn test_rejected_profile_fetch_ends_session() {
        assert!(AppEvent::ProfileLoaded(Err(AppError::NotFound)).ends_session());
        assert!(AppEvent::SessionRestored(Err(AppError::Decode("bad".into()))).ends_session());
        assert!(!AppEvent::ProfileLoaded(Err(AppError::Network("offline".into()))).ends_session());
    }

    #[test]
    fn test_envelope_staleness() {
        let stamped = Envelope {
            epoch: Some(3),
            event: AppEvent::RedirectToLogin,
        };
        assert!(stamped.is_stale(4));
        assert!(!stamped.is_stale(3));

        let detached = Envelope {
            epoch: None,
            event: AppEvent::SessionExpired,
        };
        assert!(!detached.is_stale(99));
    }
}
