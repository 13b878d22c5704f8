//! # Event Handlers
//!
//! User actions and result application, organized by domain.
//!
//! Action handlers validate the draft, set the view's pending flag and spawn the request.
//! Result handlers (`on_*`) run on the UI thread with the state write-locked; they
//! clear the pending flag, update the slice and pick the message to show.

pub mod auth;
pub mod dashboard;
pub mod finance;
pub mod nfe;
pub mod pdf;
pub mod pos;
pub mod profile;
pub mod sales;
pub mod service_orders;
pub mod settings;

use crate::core::error::AppError;

/// Log a failed request and turn it into the text for the user.
pub(crate) fn failure_message(err: &AppError, fallback: &str) -> String {
    tracing::warn!(error = %err, "{}", fallback);
    err.user_message(fallback)
}
