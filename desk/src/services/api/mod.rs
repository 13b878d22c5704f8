//! # Backend API Client Module
//!
//! HTTP client for the business REST backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs             - Module exports and documentation
//! ├── client.rs          - ApiClient, request helpers, status mapping
//! ├── auth.rs            - login, register, password recovery, /auth/me
//! ├── profile.rs         - profile read/update
//! ├── finance.rs         - customers, catalog, stock, entries, quotes
//! ├── sales.rs           - sales CRUD, status, PDF
//! ├── service_orders.rs  - service orders
//! ├── dashboard.rs       - dashboard aggregates
//! ├── settings.rs        - system configuration
//! └── nfe.rs             - NFe XML upload
//! ```

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod finance;
pub mod nfe;
pub mod profile;
pub mod sales;
pub mod service_orders;
pub mod settings;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
