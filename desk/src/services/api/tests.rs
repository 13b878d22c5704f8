//! # API Client Tests
//!
//! Runs [`ApiClient`] against an in-process axum stub of the backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::dto::{SaleFilter, SaleStatus, SessionUser};

use super::ApiClient;
use crate::core::error::AppError;
use crate::core::service::ApiService;
use crate::core::DeskConfig;
use crate::services::session::{ManualClock, MemoryStore, SessionStore};

/// Everything the stub observed
#[derive(Clone, Default)]
struct Seen {
    authorization: Arc<Mutex<Vec<Option<String>>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn list_customers(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    seen.authorization.lock().push(auth);
    Json(json!([{ "id": 1, "name": "Ana Souza", "email": "ana@shop.com" }]))
}

async fn list_sales(State(seen): State<Seen>, Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    seen.queries.lock().push(query);
    Json(json!([]))
}

async fn sale_status(State(seen): State<Seen>, Query(query): Query<HashMap<String, String>>) -> StatusCode {
    seen.queries.lock().push(query);
    StatusCode::NO_CONTENT
}

async fn expired() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" })))
}

async fn forbidden() -> StatusCode {
    StatusCode::FORBIDDEN
}

async fn rejected_customer() -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "Name is required" })))
}

async fn unknown_code() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn login() -> Json<Value> {
    Json(json!({
        "token": "jwt-abc",
        "type": "Bearer",
        "expiresIn": 3600,
        "name": "Ana",
        "email": "ana@shop.com"
    }))
}

async fn pdf() -> Vec<u8> {
    b"%PDF-1.4 stub".to_vec()
}

/// Start the stub and return a client pointed at it plus the session it reads from.
async fn spawn_stub() -> (ApiClient, Arc<SessionStore>, Seen) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/api/finance/customers", get(list_customers).post(rejected_customer))
        .route("/api/finance/summary", get(expired))
        .route("/api/finance/entries", get(forbidden))
        .route("/api/finance/catalog/qrcode/{code}", get(unknown_code))
        .route("/api/finance/sales", get(list_sales))
        .route("/api/finance/sales/{id}/status", patch(sale_status))
        .route("/api/finance/quotes/{id}/pdf", get(pdf))
        .route("/api/auth/login", post(login))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Binding stub listener should succeed in test");
    let addr = listener
        .local_addr()
        .expect("Stub listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    let session = Arc::new(SessionStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(1_700_000_000_000)),
    ));
    let config = DeskConfig {
        api_url: format!("http://{}/api/", addr),
        ..DeskConfig::default()
    };
    let client = ApiClient::new(&config, session.clone()).expect("Client should build in test");
    (client, session, seen)
}

fn sign_in(session: &SessionStore) {
    let user = SessionUser {
        name: "Ana".into(),
        email: "ana@shop.com".into(),
        avatar_base64: None,
    };
    session
        .save_session("jwt-abc", 3600, &user)
        .expect("Saving session should succeed in test");
}

// ========== Bearer Header Tests ==========

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    // Arrange
    let (client, _session, seen) = spawn_stub().await;

    // Act
    let customers = client.list_customers().await.unwrap();

    // Assert
    assert_eq!(customers.len(), 1);
    assert_eq!(seen.authorization.lock().as_slice(), &[None]);
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    // Arrange
    let (client, session, seen) = spawn_stub().await;
    sign_in(&session);

    // Act
    let customers = client.list_customers().await.unwrap();

    // Assert
    assert_eq!(customers[0].name, "Ana Souza");
    assert_eq!(
        seen.authorization.lock().as_slice(),
        &[Some("Bearer jwt-abc".to_string())]
    );
}

#[tokio::test]
async fn test_logout_stops_sending_token() {
    let (client, session, seen) = spawn_stub().await;
    sign_in(&session);
    client.list_customers().await.unwrap();

    session.clear_session().unwrap();
    client.list_customers().await.unwrap();

    let recorded = seen.authorization.lock().clone();
    assert_eq!(recorded, vec![Some("Bearer jwt-abc".to_string()), None]);
}

// ========== Status Mapping Tests ==========

#[tokio::test]
async fn test_401_maps_to_unauthorized_with_message() {
    let (client, session, _seen) = spawn_stub().await;
    sign_in(&session);

    let err = client.finance_summary().await.unwrap_err();

    assert_eq!(err, AppError::Unauthorized(Some("Token expired".to_string())));
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_403_without_body_maps_to_unauthorized() {
    let (client, _session, _seen) = spawn_stub().await;

    let err = client.list_entries().await.unwrap_err();

    assert_eq!(err, AppError::Unauthorized(None));
}

#[tokio::test]
async fn test_server_error_field_is_extracted() {
    let (client, _session, _seen) = spawn_stub().await;

    let err = client
        .create_customer(shared::dto::CustomerRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        AppError::Server {
            status: 400,
            message: Some("Name is required".to_string())
        }
    );
    assert_eq!(err.user_message("Could not save customer"), "Name is required");
}

#[tokio::test]
async fn test_unknown_code_maps_to_not_found() {
    let (client, _session, _seen) = spawn_stub().await;

    let err = client.find_by_code("0000").await.unwrap_err();

    assert_eq!(err, AppError::NotFound);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let session = Arc::new(SessionStore::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
    ));
    let config = DeskConfig {
        api_url: "http://127.0.0.1:1/api".to_string(),
        ..DeskConfig::default()
    };
    let client = ApiClient::new(&config, session).unwrap();

    let err = client.list_customers().await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)), "got {:?}", err);
}

// ========== Endpoint Shape Tests ==========

#[tokio::test]
async fn test_login_decodes_auth_response() {
    let (client, _session, _seen) = spawn_stub().await;

    let auth = client
        .login("ana@shop.com".into(), "secret1".into())
        .await
        .unwrap();

    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.expires_in, 3600);
}

#[tokio::test]
async fn test_sale_filter_is_sent_as_query() {
    let (client, _session, seen) = spawn_stub().await;

    client
        .list_sales(SaleFilter {
            status: Some(SaleStatus::Cancelled),
            search: Some(" Ana ".into()),
        })
        .await
        .unwrap();
    client
        .update_sale_status(7, SaleStatus::Paid)
        .await
        .unwrap();

    let queries = seen.queries.lock().clone();
    assert_eq!(queries[0].get("status").map(String::as_str), Some("CANCELLED"));
    assert_eq!(queries[0].get("search").map(String::as_str), Some("Ana"));
    assert_eq!(queries[1].get("status").map(String::as_str), Some("PAID"));
}

#[tokio::test]
async fn test_pdf_download_returns_raw_bytes() {
    let (client, _session, _seen) = spawn_stub().await;

    let bytes = client.quote_pdf(3).await.unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}
