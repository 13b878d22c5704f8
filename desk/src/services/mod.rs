//! # Services
//!
//! Everything that talks to the outside world: the backend REST API and the local
//! session storage file.

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{SessionGuard, SessionStore};
