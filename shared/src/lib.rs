//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the desktop client and the business
//! management REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, password recovery, session user
//!   - **[`dto::profile`]**: User profile read/update
//!   - **[`dto::finance`]**: Customers, catalog, stock, entries, quotes, summary
//!   - **[`dto::sales`]**: Sales and sale items
//!   - **[`dto::service_orders`]**: Service orders and their items
//!   - **[`dto::dashboard`]**: Dashboard aggregates
//!   - **[`dto::settings`]**: System configuration
//!   - **[`dto::nfe`]**: NFe XML import results
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON:
//! - Field names use **snake_case** in Rust and `#[serde(rename_all = "camelCase")]` on the wire
//! - Status enums serialize as SCREAMING_SNAKE_CASE strings (`"IN_PROGRESS"`)
//! - Optional fields are omitted from requests when `None`
//! - Response structs use `#[serde(default)]` so partial payloads still decode
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "owner@shop.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:8080/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
