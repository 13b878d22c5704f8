//! # Notifications Widget
//!
//! Toast notifications using egui-notify. Handlers queue [`Toast`]s on the state; the
//! UI moves them here once per frame.

use std::time::Duration;

use egui_notify::Toasts;

use crate::app::{Toast, ToastLevel};

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: &Toast) {
        let message = toast.message.clone();
        let shown = match toast.level {
            ToastLevel::Info => self.toasts.info(message),
            ToastLevel::Success => self.toasts.success(message),
            ToastLevel::Warning => self.toasts.warning(message),
            ToastLevel::Error => self.toasts.error(message),
        };
        shown.duration(Some(TOAST_DURATION));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
