//! # GUI Rendering Framework
//!
//! [`DeskUi`] is the `eframe::App`. Every frame it drains async results into the
//! state, hands queued toasts to the notification manager and renders the current
//! screen from a cloned snapshot of the state.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::App;
use theme::Palette;
use widgets::nav::{self, NavAction};
use widgets::notifications::NotificationManager;

/// Repaint at least this often so results and session expiry show up without input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

pub struct DeskUi {
    app: App,
    notifications: NotificationManager,
}

impl DeskUi {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        theme::apply(&cc.egui_ctx, app.theme());
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for DeskUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        let toasts = std::mem::take(&mut self.app.state.write().pending_toasts);
        for toast in &toasts {
            self.notifications.push(toast);
        }

        theme::apply(ctx, self.app.theme());
        render(ctx, &mut self.app);
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

/// Main render function - called every frame
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Rendering happens without holding the lock
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };
    let palette = Palette::for_mode(state.theme);

    if state.current_screen.requires_auth() {
        if let Some(action) = nav::render_side_nav(ctx, &state, &palette) {
            match action {
                NavAction::Go(screen) => app.handle_screen_change(screen),
                NavAction::Refresh => app.handle_refresh(),
                NavAction::ToggleTheme => app.handle_theme_toggle(),
                NavAction::Logout => app.handle_logout(),
            }
            // The snapshot is stale now; draw the new screen next frame
            ctx.request_repaint();
            egui::CentralPanel::default().show(ctx, |_ui| {});
            return;
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| screens::render(ui, &state, app, &palette));
    });
}
