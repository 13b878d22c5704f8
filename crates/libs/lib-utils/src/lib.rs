//! # Utilities Library
//!
//! Shared utility functions for environment variables, dates, base64 data URLs, and
//! input validation.

pub mod b64;
pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64_encode, data_url_encode};
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{now_utc, now_millis, today_iso, add_days_iso, format_date_br};
pub use validation::{validate_not_empty, validate_email, validate_min_length};
