//! # Form Drafts
//!
//! Editable copies of everything a screen submits. Drafts validate and build the wire
//! request; they are reset to their defaults only after the backend confirms success.

pub mod auth;
pub mod finance;
pub mod pos;
pub mod profile;
pub mod sales;
pub mod service_orders;

pub use auth::{ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm};
pub use finance::{CatalogForm, CustomerForm, EntryForm, QuoteForm, StockAdjustForm};
pub use pos::{CheckoutForm, ManualItemForm};
pub use profile::ProfileForm;
pub use sales::{FieldErrors, SaleForm};
pub use service_orders::{ServiceOrderForm, ServiceOrderRow};
