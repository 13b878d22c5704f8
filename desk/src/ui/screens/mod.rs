//! # Screen Modules
//!
//! One module per screen. Every screen follows the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, palette: &Palette) {
//!     // 1. Read from the cloned state snapshot
//!     // 2. Edit local copies of the screen's form drafts
//!     // 3. Write the drafts back in one short lock scope
//!     // 4. Call app.handle_* for whatever was clicked
//! }
//! ```
//!
//! Drafts are written back before any `handle_*` call, so a handler that changes
//! the draft (a reset after success, a picked image) is never overwritten by the
//! frame's stale copy. The state lock is never held while a handler runs, since
//! handlers take it themselves.

pub mod auth;
pub mod catalog;
pub mod customers;
pub mod dashboard;
pub mod entries;
pub mod nfe;
pub mod pos;
pub mod profile;
pub mod quotes;
pub mod sales;
pub mod service_orders;
pub mod settings;
pub mod stock;

use egui::Ui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Palette;

/// Dispatch to the current screen
pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    match state.current_screen {
        Screen::Login | Screen::Register | Screen::ForgotPassword | Screen::ResetPassword => {
            auth::render(ui, state, app, palette)
        }
        Screen::Dashboard => dashboard::render(ui, state, app, palette),
        Screen::Profile => profile::render(ui, state, app, palette),
        Screen::Customers => customers::render(ui, state, app, palette),
        Screen::Catalog => catalog::render(ui, state, app, palette),
        Screen::Stock => stock::render(ui, state, app, palette),
        Screen::Entries => entries::render(ui, state, app, palette),
        Screen::Quotes => quotes::render(ui, state, app, palette),
        Screen::PointOfSale => pos::render(ui, state, app, palette),
        Screen::ServiceOrders => service_orders::render(ui, state, app, palette),
        Screen::Sales => sales::render(ui, state, app, palette),
        Screen::NfeImport => nfe::render(ui, state, app, palette),
        Screen::Settings => settings::render(ui, state, app, palette),
    }
}
