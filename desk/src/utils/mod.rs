//! # Utility Functions
//!
//! - **[`runtime`]**: the process-wide tokio runtime
//! - **[`validation`]**: form field checks returning [`validation::ValidationResult`]

pub mod runtime;
pub mod validation;
