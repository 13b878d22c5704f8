//! # Settings Handlers
//!
//! Load and save the backend system configuration. The theme toggle is not here; it is a
//! local preference handled by [`crate::app::App::handle_theme_toggle`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::SystemConfig;

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Banner, SettingsTab};
use crate::app::tasks::TaskContext;
use crate::core::error::Result;
use crate::domain::files;

pub(crate) fn load_settings(state: &mut AppState, ctx: &TaskContext) {
    state.settings.loading = true;
    ctx.spawn(|api| async move { AppEvent::SettingsLoaded(api.get_settings().await) });
}

pub(crate) fn on_settings_loaded(state: &mut AppState, result: Result<SystemConfig>) {
    state.settings.loading = false;
    match result {
        Ok(config) => state.settings.config = config,
        Err(err) => {
            state.settings.banner = Some(Banner::error(failure_message(&err, "Could not load the settings")));
        }
    }
}

pub(crate) fn select_tab(state: &Arc<RwLock<AppState>>, tab: SettingsTab) {
    state.write().settings.tab = tab;
}

pub(crate) fn pick_logo(state: &Arc<RwLock<AppState>>, path: &Path) {
    let mut state = state.write();
    match files::read_image(path) {
        Ok(data_url) => state.settings.config.logo_base64 = Some(data_url),
        Err(err) => state.settings.banner = Some(Banner::error(err.user_message("Could not read the image"))),
    }
}

pub(crate) fn submit_settings(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let config = {
        let mut state = state.write();
        if state.settings.pending {
            return;
        }
        if state.settings.config.company_name.trim().is_empty() {
            state.settings.tab = SettingsTab::Company;
            state.settings.banner = Some(Banner::error("Company name is required"));
            return;
        }
        if state.settings.config.system_name.trim().is_empty() {
            state.settings.tab = SettingsTab::System;
            state.settings.banner = Some(Banner::error("System name is required"));
            return;
        }
        state.settings.pending = true;
        state.settings.banner = None;
        state.settings.config.clone()
    };

    ctx.spawn(move |api| async move { AppEvent::SettingsSaved(api.save_settings(config).await) });
}

pub(crate) fn on_settings_saved(state: &mut AppState, result: Result<SystemConfig>) {
    state.settings.pending = false;
    match result {
        Ok(config) => {
            tracing::info!(nfe_enabled = config.nfe_enabled, "Settings saved");
            state.settings.config = config;
            state.settings.banner = Some(Banner::success("Settings saved"));
        }
        Err(err) => {
            state.settings.banner = Some(Banner::error(failure_message(&err, "Could not save the settings")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::ThemeMode;
    use crate::test_support::StubApi;

    #[tokio::test]
    async fn test_missing_company_name_jumps_to_company_tab() {
        let (tx, rx) = async_channel::unbounded();
        let ctx = TaskContext {
            api: Arc::new(StubApi::default()),
            tx,
            epoch: Some(1),
        };
        let state = Arc::new(RwLock::new(AppState::new(ThemeMode::Dark)));
        select_tab(&state, SettingsTab::Nfe);

        submit_settings(&state, &ctx);

        let state = state.read();
        assert_eq!(state.settings.tab, SettingsTab::Company);
        assert!(!state.settings.pending);
        assert!(rx.is_empty());
    }
}
