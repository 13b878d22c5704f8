//! Core types shared by every layer: errors, configuration and service traits.

pub mod config;
pub mod error;
pub mod service;

pub use config::DeskConfig;
pub use error::{AppError, Result};
pub use service::ApiService;
