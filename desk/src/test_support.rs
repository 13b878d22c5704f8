//! In-memory [`ApiService`] for handler and orchestrator tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::dto::{
    AuthResponse, CatalogItem, CatalogItemRequest, Customer, CustomerRequest, FinanceSummary,
    FinancialEntry, FinancialEntryRequest, ForgotPasswordResponse, MessageResponse,
    NfeImportResult, Profile, Quote, QuoteRequest, RecentSale, Sale, SaleFilter, SaleRequest,
    SaleStatus, SalesChart, SalesStats, ServiceOrder, ServiceOrderRequest, ServiceOrderStatus,
    StockAdjustmentRequest, StockMovement, SystemConfig, TopProduct, UpdateProfileRequest,
    UpdateProfileResponse,
};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Answers every call with an empty success unless told otherwise.
#[derive(Default)]
pub struct StubApi {
    /// Returned by `login`; `None` rejects the credentials
    pub login_response: Option<AuthResponse>,
    /// Returned by `me` and `get_profile`
    pub profile: Profile,
    /// Catalog item returned by `find_by_code` when the code matches its `qr_code`
    pub coded_item: Option<CatalogItem>,
    /// Every other call fails with this error when set
    pub fail_with: Option<AppError>,
    /// Names of the calls made, in order
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl StubApi {
    fn answer<T: Default>(&self, call: &'static str) -> Result<T> {
        self.calls.lock().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(T::default()),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ApiService for StubApi {
    async fn login(&self, _email: String, _password: String) -> Result<AuthResponse> {
        self.calls.lock().push("login");
        self.login_response
            .clone()
            .ok_or_else(|| AppError::Unauthorized(Some("Invalid credentials".into())))
    }

    async fn register(&self, _name: String, _email: String, _password: String) -> Result<MessageResponse> {
        self.answer("register")
    }

    async fn forgot_password(&self, _email: String) -> Result<ForgotPasswordResponse> {
        self.answer("forgot_password")
    }

    async fn reset_password(&self, _token: String, _new_password: String) -> Result<MessageResponse> {
        self.answer("reset_password")
    }

    async fn me(&self) -> Result<Profile> {
        self.answer::<()>("me")?;
        Ok(self.profile.clone())
    }

    async fn get_profile(&self) -> Result<Profile> {
        self.answer::<()>("get_profile")?;
        Ok(self.profile.clone())
    }

    async fn update_profile(&self, _request: UpdateProfileRequest) -> Result<UpdateProfileResponse> {
        self.answer("update_profile")
    }

    async fn finance_summary(&self) -> Result<FinanceSummary> {
        self.answer("finance_summary")
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.answer("list_customers")
    }

    async fn create_customer(&self, _request: CustomerRequest) -> Result<Customer> {
        self.answer("create_customer")
    }

    async fn delete_customer(&self, _id: i64) -> Result<()> {
        self.answer("delete_customer")
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogItem>> {
        self.answer("list_catalog")
    }

    async fn create_catalog_item(&self, _request: CatalogItemRequest) -> Result<CatalogItem> {
        self.answer("create_catalog_item")
    }

    async fn find_by_code(&self, code: &str) -> Result<CatalogItem> {
        self.answer::<()>("find_by_code")?;
        self.coded_item
            .clone()
            .filter(|item| item.qr_code.as_deref() == Some(code))
            .ok_or(AppError::NotFound)
    }

    async fn adjust_stock(&self, _item_id: i64, _request: StockAdjustmentRequest) -> Result<()> {
        self.answer("adjust_stock")
    }

    async fn list_stock_movements(&self) -> Result<Vec<StockMovement>> {
        self.answer("list_stock_movements")
    }

    async fn list_entries(&self) -> Result<Vec<FinancialEntry>> {
        self.answer("list_entries")
    }

    async fn create_entry(&self, _request: FinancialEntryRequest) -> Result<FinancialEntry> {
        self.answer("create_entry")
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.answer("list_quotes")
    }

    async fn create_quote(&self, _request: QuoteRequest) -> Result<Quote> {
        self.answer("create_quote")
    }

    async fn delete_quote(&self, _id: i64) -> Result<()> {
        self.answer("delete_quote")
    }

    async fn quote_pdf(&self, _id: i64) -> Result<Vec<u8>> {
        self.answer("quote_pdf")
    }

    async fn list_sales(&self, _filter: SaleFilter) -> Result<Vec<Sale>> {
        self.answer("list_sales")
    }

    async fn create_sale(&self, _request: SaleRequest) -> Result<Sale> {
        self.answer("create_sale")
    }

    async fn update_sale(&self, _id: i64, _request: SaleRequest) -> Result<Sale> {
        self.answer("update_sale")
    }

    async fn delete_sale(&self, _id: i64) -> Result<()> {
        self.answer("delete_sale")
    }

    async fn update_sale_status(&self, _id: i64, _status: SaleStatus) -> Result<()> {
        self.answer("update_sale_status")
    }

    async fn sale_pdf(&self, _id: i64) -> Result<Vec<u8>> {
        self.answer("sale_pdf")
    }

    async fn list_service_orders(&self) -> Result<Vec<ServiceOrder>> {
        self.answer("list_service_orders")
    }

    async fn create_service_order(&self, _request: ServiceOrderRequest) -> Result<ServiceOrder> {
        self.answer("create_service_order")
    }

    async fn update_service_order_status(&self, _id: i64, _status: ServiceOrderStatus) -> Result<()> {
        self.answer("update_service_order_status")
    }

    async fn service_order_pdf(&self, _id: i64) -> Result<Vec<u8>> {
        self.answer("service_order_pdf")
    }

    async fn sales_stats(&self) -> Result<SalesStats> {
        self.answer("sales_stats")
    }

    async fn sales_chart(&self) -> Result<SalesChart> {
        self.answer("sales_chart")
    }

    async fn top_products(&self) -> Result<Vec<TopProduct>> {
        self.answer("top_products")
    }

    async fn recent_sales(&self) -> Result<Vec<RecentSale>> {
        self.answer("recent_sales")
    }

    async fn get_settings(&self) -> Result<SystemConfig> {
        self.answer("get_settings")
    }

    async fn save_settings(&self, config: SystemConfig) -> Result<SystemConfig> {
        self.answer::<()>("save_settings")?;
        Ok(config)
    }

    async fn upload_nfe(&self, _file_name: String, _content: Vec<u8>) -> Result<NfeImportResult> {
        self.answer("upload_nfe")
    }
}
