//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::{
    AuthResponse, CatalogItem, CatalogItemRequest, Customer, CustomerRequest, ErrorResponse,
    FinanceSummary, FinancialEntry, FinancialEntryRequest, ForgotPasswordResponse,
    MessageResponse, NfeImportResult, Profile, Quote, QuoteRequest, RecentSale, Sale, SaleFilter,
    SaleRequest, SaleStatus, SalesChart, SalesStats, ServiceOrder, ServiceOrderRequest,
    ServiceOrderStatus, StockAdjustmentRequest, StockMovement, SystemConfig, TopProduct,
    UpdateProfileRequest, UpdateProfileResponse,
};

use super::{auth, dashboard, finance, nfe, profile, sales, service_orders, settings};
use crate::core::config::{normalize_base_url, DeskConfig};
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::session::SessionStore;

/// HTTP client for the business backend.
///
/// One connection pool for the whole app. The bearer token is read from the
/// [`SessionStore`] on every request, so a login or logout takes effect on the next call
/// without rebuilding the client. Nothing is retried.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: &DeskConfig, session: Arc<SessionStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.api_url),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send one request and map non-2xx statuses to [`AppError`].
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response> {
        let start = Instant::now();
        let request = build(self.authorize(self.client.request(method.clone(), self.url(path))));

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path, error = %e, "Request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if status.is_success() {
            tracing::debug!(method = %method, path, status = status.as_u16(), duration_ms, "Request completed");
            Ok(response)
        } else {
            let err = Self::error_from(response).await;
            tracing::warn!(method = %method, path, status = status.as_u16(), duration_ms, error = %err, "Request rejected");
            Err(err)
        }
    }

    async fn error_from(response: Response) -> AppError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.text().map(str::to_string));

        match status {
            401 | 403 => AppError::Unauthorized(message),
            404 => AppError::NotFound,
            _ => AppError::Server { status, message },
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| AppError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, |b| b).await?;
        Self::decode(response).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send(Method::GET, path, |b| b.query(query)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, |b| b.json(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, |b| b.json(body)).await?;
        Self::decode(response).await
    }

    /// Request whose response body is ignored.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<()> {
        self.send(method, path, build).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send_empty(Method::DELETE, path, |b| b).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, path, |b| b).await?;
        let bytes = response.bytes().await.map_err(AppError::from)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn register(&self, name: String, email: String, password: String) -> Result<MessageResponse> {
        auth::register(self, name, email, password).await
    }

    async fn forgot_password(&self, email: String) -> Result<ForgotPasswordResponse> {
        auth::forgot_password(self, email).await
    }

    async fn reset_password(&self, token: String, new_password: String) -> Result<MessageResponse> {
        auth::reset_password(self, token, new_password).await
    }

    async fn me(&self) -> Result<Profile> {
        auth::me(self).await
    }

    async fn get_profile(&self) -> Result<Profile> {
        profile::get_profile(self).await
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<UpdateProfileResponse> {
        profile::update_profile(self, request).await
    }

    async fn finance_summary(&self) -> Result<FinanceSummary> {
        finance::summary(self).await
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        finance::list_customers(self).await
    }

    async fn create_customer(&self, request: CustomerRequest) -> Result<Customer> {
        finance::create_customer(self, request).await
    }

    async fn delete_customer(&self, id: i64) -> Result<()> {
        finance::delete_customer(self, id).await
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogItem>> {
        finance::list_catalog(self).await
    }

    async fn create_catalog_item(&self, request: CatalogItemRequest) -> Result<CatalogItem> {
        finance::create_catalog_item(self, request).await
    }

    async fn find_by_code(&self, code: &str) -> Result<CatalogItem> {
        finance::find_by_code(self, code).await
    }

    async fn adjust_stock(&self, item_id: i64, request: StockAdjustmentRequest) -> Result<()> {
        finance::adjust_stock(self, item_id, request).await
    }

    async fn list_stock_movements(&self) -> Result<Vec<StockMovement>> {
        finance::list_stock_movements(self).await
    }

    async fn list_entries(&self) -> Result<Vec<FinancialEntry>> {
        finance::list_entries(self).await
    }

    async fn create_entry(&self, request: FinancialEntryRequest) -> Result<FinancialEntry> {
        finance::create_entry(self, request).await
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        finance::list_quotes(self).await
    }

    async fn create_quote(&self, request: QuoteRequest) -> Result<Quote> {
        finance::create_quote(self, request).await
    }

    async fn delete_quote(&self, id: i64) -> Result<()> {
        finance::delete_quote(self, id).await
    }

    async fn quote_pdf(&self, id: i64) -> Result<Vec<u8>> {
        finance::quote_pdf(self, id).await
    }

    async fn list_sales(&self, filter: SaleFilter) -> Result<Vec<Sale>> {
        sales::list_sales(self, filter).await
    }

    async fn create_sale(&self, request: SaleRequest) -> Result<Sale> {
        sales::create_sale(self, request).await
    }

    async fn update_sale(&self, id: i64, request: SaleRequest) -> Result<Sale> {
        sales::update_sale(self, id, request).await
    }

    async fn delete_sale(&self, id: i64) -> Result<()> {
        sales::delete_sale(self, id).await
    }

    async fn update_sale_status(&self, id: i64, status: SaleStatus) -> Result<()> {
        sales::update_sale_status(self, id, status).await
    }

    async fn sale_pdf(&self, id: i64) -> Result<Vec<u8>> {
        sales::sale_pdf(self, id).await
    }

    async fn list_service_orders(&self) -> Result<Vec<ServiceOrder>> {
        service_orders::list_service_orders(self).await
    }

    async fn create_service_order(&self, request: ServiceOrderRequest) -> Result<ServiceOrder> {
        service_orders::create_service_order(self, request).await
    }

    async fn update_service_order_status(&self, id: i64, status: ServiceOrderStatus) -> Result<()> {
        service_orders::update_status(self, id, status).await
    }

    async fn service_order_pdf(&self, id: i64) -> Result<Vec<u8>> {
        service_orders::service_order_pdf(self, id).await
    }

    async fn sales_stats(&self) -> Result<SalesStats> {
        dashboard::sales_stats(self).await
    }

    async fn sales_chart(&self) -> Result<SalesChart> {
        dashboard::sales_chart(self).await
    }

    async fn top_products(&self) -> Result<Vec<TopProduct>> {
        dashboard::top_products(self).await
    }

    async fn recent_sales(&self) -> Result<Vec<RecentSale>> {
        dashboard::recent_sales(self).await
    }

    async fn get_settings(&self) -> Result<SystemConfig> {
        settings::get_settings(self).await
    }

    async fn save_settings(&self, config: SystemConfig) -> Result<SystemConfig> {
        settings::save_settings(self, config).await
    }

    async fn upload_nfe(&self, file_name: String, content: Vec<u8>) -> Result<NfeImportResult> {
        nfe::upload(self, file_name, content).await
    }
}
