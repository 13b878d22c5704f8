//! # BizDesk - Library Root
//!
//! A **native desktop client** for small-business management: customers, a product
//! and service catalog with stock, financial entries, quotes, sales, service orders,
//! a point-of-sale checkout and NFe purchase imports. All data lives behind a REST
//! backend; this crate holds the session, the forms and the screens.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              bizdesk (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui_plot      - Dashboard sales chart                │
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client                          │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON, bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: orchestrator, state, form drafts, async tasks and result handlers
//! - **core**: errors, configuration and the [`core::ApiService`] trait
//! - **debug**: file logging and the panic hook
//! - **domain**: UI-free rules (line items, cart, money, stock)
//! - **services**: the REST client and the local session store
//! - **ui**: eframe app, screens, widgets and theme
//! - **utils**: the tokio runtime and form validators
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   ├── services::api (HTTP requests)
//!   │   ├── services::session (token, expiry, cached user)
//!   │   └── domain (totals, cart, validation inputs)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (one per screen)
//!       ├── widgets::* (forms, tables, nav, toasts)
//!       └── theme (light/dark palettes)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The UI never awaits. User actions spawn tokio tasks that call the backend and send
//! an [`app::AppEvent`] back over an async channel; the next frame applies it to the
//! state. See [`app`] for view epochs and session handling.

pub mod app;
pub mod core;
pub mod debug;
pub mod domain;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use core::{AppError, DeskConfig, Result};
pub use ui::DeskUi;
