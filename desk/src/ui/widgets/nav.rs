//! # Side Navigation
//!
//! Left panel shown on every protected screen: signed-in user, screen list, theme
//! toggle and sign out.

use egui::{RichText, Ui};

use crate::app::{AppState, Screen};
use crate::services::session::ThemeMode;
use crate::ui::theme::Palette;

/// What the user clicked in the side panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Go(Screen),
    Refresh,
    ToggleTheme,
    Logout,
}

pub fn render_side_nav(ctx: &egui::Context, state: &AppState, palette: &Palette) -> Option<NavAction> {
    let mut action = None;

    egui::SidePanel::left("side_nav")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("BizDesk").heading().strong().color(palette.accent));
            if let Some(user) = &state.user {
                ui.label(RichText::new(&user.name).strong());
                ui.colored_label(palette.dim, RichText::new(&user.email).small());
            }
            ui.add_space(8.0);
            ui.separator();

            for screen in Screen::nav() {
                let active = state.current_screen == *screen;
                if nav_entry(ui, screen.title(), active, palette) && !active {
                    action = Some(NavAction::Go(*screen));
                }
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.add_space(8.0);
                if ui.button("Sign out").clicked() {
                    action = Some(NavAction::Logout);
                }
                let theme_label = match state.theme {
                    ThemeMode::Dark => "Light mode",
                    ThemeMode::Light => "Dark mode",
                };
                if ui.button(theme_label).clicked() {
                    action = Some(NavAction::ToggleTheme);
                }
                if ui.button("Refresh").clicked() {
                    action = Some(NavAction::Refresh);
                }
            });
        });

    action
}

fn nav_entry(ui: &mut Ui, title: &str, active: bool, palette: &Palette) -> bool {
    let text = if active {
        RichText::new(title).strong().color(palette.accent)
    } else {
        RichText::new(title)
    };
    ui.selectable_label(active, text).clicked()
}
