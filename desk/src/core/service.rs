//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The app only ever talks to the backend through [`ApiService`]; tests swap in
//! stubs, the binary uses [`crate::services::api::ApiClient`].

use async_trait::async_trait;
use shared::dto::{
    AuthResponse, CatalogItem, CatalogItemRequest, Customer, CustomerRequest, FinanceSummary,
    FinancialEntry, FinancialEntryRequest, ForgotPasswordResponse, MessageResponse,
    NfeImportResult, Profile, Quote, QuoteRequest, RecentSale, Sale, SaleFilter, SaleRequest,
    SaleStatus, SalesChart, SalesStats, ServiceOrder, ServiceOrderRequest, ServiceOrderStatus,
    StockAdjustmentRequest, StockMovement, SystemConfig, TopProduct, UpdateProfileRequest,
    UpdateProfileResponse,
};

use crate::core::error::Result;

/// Every backend call the client makes.
///
/// Implementations attach the current bearer token themselves; callers never pass it.
#[async_trait]
pub trait ApiService: Send + Sync {
    // ---- auth ----
    async fn login(&self, email: String, password: String) -> Result<AuthResponse>;
    async fn register(&self, name: String, email: String, password: String) -> Result<MessageResponse>;
    async fn forgot_password(&self, email: String) -> Result<ForgotPasswordResponse>;
    async fn reset_password(&self, token: String, new_password: String) -> Result<MessageResponse>;
    /// Profile of the token's owner; used to restore a stored session
    async fn me(&self) -> Result<Profile>;

    // ---- profile ----
    async fn get_profile(&self) -> Result<Profile>;
    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UpdateProfileResponse>;

    // ---- finance ----
    async fn finance_summary(&self) -> Result<FinanceSummary>;
    async fn list_customers(&self) -> Result<Vec<Customer>>;
    async fn create_customer(&self, request: CustomerRequest) -> Result<Customer>;
    async fn delete_customer(&self, id: i64) -> Result<()>;
    async fn list_catalog(&self) -> Result<Vec<CatalogItem>>;
    async fn create_catalog_item(&self, request: CatalogItemRequest) -> Result<CatalogItem>;
    /// Look up a catalog item by its QR/bar code; `NotFound` when no item matches
    async fn find_by_code(&self, code: &str) -> Result<CatalogItem>;
    async fn adjust_stock(&self, item_id: i64, request: StockAdjustmentRequest) -> Result<()>;
    async fn list_stock_movements(&self) -> Result<Vec<StockMovement>>;
    async fn list_entries(&self) -> Result<Vec<FinancialEntry>>;
    async fn create_entry(&self, request: FinancialEntryRequest) -> Result<FinancialEntry>;
    async fn list_quotes(&self) -> Result<Vec<Quote>>;
    async fn create_quote(&self, request: QuoteRequest) -> Result<Quote>;
    async fn delete_quote(&self, id: i64) -> Result<()>;
    async fn quote_pdf(&self, id: i64) -> Result<Vec<u8>>;

    // ---- sales ----
    async fn list_sales(&self, filter: SaleFilter) -> Result<Vec<Sale>>;
    async fn create_sale(&self, request: SaleRequest) -> Result<Sale>;
    async fn update_sale(&self, id: i64, request: SaleRequest) -> Result<Sale>;
    async fn delete_sale(&self, id: i64) -> Result<()>;
    async fn update_sale_status(&self, id: i64, status: SaleStatus) -> Result<()>;
    async fn sale_pdf(&self, id: i64) -> Result<Vec<u8>>;

    // ---- service orders ----
    async fn list_service_orders(&self) -> Result<Vec<ServiceOrder>>;
    async fn create_service_order(&self, request: ServiceOrderRequest) -> Result<ServiceOrder>;
    async fn update_service_order_status(&self, id: i64, status: ServiceOrderStatus) -> Result<()>;
    async fn service_order_pdf(&self, id: i64) -> Result<Vec<u8>>;

    // ---- dashboard ----
    async fn sales_stats(&self) -> Result<SalesStats>;
    async fn sales_chart(&self) -> Result<SalesChart>;
    async fn top_products(&self) -> Result<Vec<TopProduct>>;
    async fn recent_sales(&self) -> Result<Vec<RecentSale>>;

    // ---- settings ----
    async fn get_settings(&self) -> Result<SystemConfig>;
    async fn save_settings(&self, config: SystemConfig) -> Result<SystemConfig>;

    // ---- nfe ----
    async fn upload_nfe(&self, file_name: String, content: Vec<u8>) -> Result<NfeImportResult>;
}
