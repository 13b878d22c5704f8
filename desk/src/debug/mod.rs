//! # Logging Infrastructure
//!
//! File-based structured logging for the desktop client.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup, after .env is loaded
//! debug::init();
//!
//! // Log with structured fields
//! tracing::info!(path = "/finance/summary", status = 200, "Request completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `bizdesk=info,warn`)
//! - `BIZDESK_LOG_DIR`: Directory of the daily log files (default `logs`)
//! - `BIZDESK_LOG_FORMAT`: `text` (default) or `json`

pub mod config;
pub mod logger;

pub use config::{DebugConfig, LogFormat};
pub use logger::init;
