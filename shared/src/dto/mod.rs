//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the desktop client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, password reset, cached session user
//! - [`profile`] - Profile read/update payloads
//! - [`finance`] - Customers, catalog items, stock movements, entries, quotes, summary
//! - [`sales`] - Sales and sale items
//! - [`service_orders`] - Service orders
//! - [`dashboard`] - Dashboard aggregates (sales stats, chart, top products, recent sales)
//! - [`settings`] - System configuration
//! - [`nfe`] - NFe XML import result
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "owner@shop.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "tokenType": "Bearer",
//!   "expiresIn": 7200,
//!   "name": "Maria",
//!   "email": "owner@shop.com"
//! }
//! ```

pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod nfe;
pub mod profile;
pub mod sales;
pub mod service_orders;
pub mod settings;

pub use auth::*;
pub use dashboard::*;
pub use finance::*;
pub use nfe::*;
pub use profile::*;
pub use sales::*;
pub use service_orders::*;
pub use settings::*;
