//! # Profile Handlers

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use shared::dto::{Profile, SessionUser, UpdateProfileResponse};

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::forms::{profile::session_user, ProfileForm};
use crate::app::state::{AppState, Banner};
use crate::app::tasks::TaskContext;
use crate::core::error::Result;
use crate::domain::files;

pub(crate) fn load_profile(state: &mut AppState, ctx: &TaskContext) {
    state.profile.loading = true;
    ctx.spawn(|api| async move { AppEvent::ProfileLoaded(api.get_profile().await) });
}

/// Rejections never get here: they end the session first.
pub(crate) fn on_profile_loaded(state: &mut AppState, result: Result<Profile>) {
    state.profile.loading = false;
    match result {
        Ok(profile) => {
            state.profile.form = ProfileForm::from(&profile);
            state.profile.profile = Some(profile);
        }
        Err(err) => {
            state.profile.banner = Some(Banner::error(failure_message(&err, "Could not load the profile")));
        }
    }
}

pub(crate) fn pick_avatar(state: &Arc<RwLock<AppState>>, path: &Path) {
    let mut state = state.write();
    match files::read_image(path) {
        Ok(data_url) => {
            state.profile.form.avatar = Some(data_url);
            state.profile.banner = None;
        }
        Err(err) => state.profile.banner = Some(Banner::error(err.user_message("Could not read the image"))),
    }
}

pub(crate) fn remove_avatar(state: &Arc<RwLock<AppState>>) {
    state.write().profile.form.remove_avatar();
}

pub(crate) fn submit_profile(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let request = {
        let mut state = state.write();
        if state.profile.pending {
            return;
        }
        match state.profile.form.to_request() {
            Ok(request) => {
                state.profile.pending = true;
                state.profile.banner = None;
                request
            }
            Err(err) => {
                state.profile.banner = Some(Banner::error(err.user_message("Please check the form")));
                return;
            }
        }
    };

    ctx.spawn(move |api| async move { AppEvent::ProfileSaved(api.update_profile(request).await) });
}

/// Returns the user to cache in the session when the save went through.
pub(crate) fn on_profile_saved(state: &mut AppState, result: Result<UpdateProfileResponse>) -> Option<SessionUser> {
    state.profile.pending = false;
    match result {
        Ok(response) => {
            let message = if response.message.trim().is_empty() {
                "Profile updated".to_string()
            } else {
                response.message
            };
            state.profile.banner = Some(Banner::success(message));

            // Older backends answer without the profile body
            let profile = if response.profile.name.is_empty() {
                let form = &state.profile.form;
                Profile {
                    name: form.name.trim().to_string(),
                    email: form.email.clone(),
                    phone: Some(form.phone.clone()),
                    city: Some(form.city.clone()),
                    bio: Some(form.bio.clone()),
                    avatar_base64: form.avatar.clone(),
                }
            } else {
                response.profile
            };

            let user = session_user(&profile);
            state.profile.form = ProfileForm::from(&profile);
            state.profile.profile = Some(profile);
            state.user = Some(user.clone());
            Some(user)
        }
        Err(err) => {
            state.profile.banner = Some(Banner::error(failure_message(&err, "Could not save the profile")));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::ThemeMode;

    #[test]
    fn test_saved_profile_updates_cached_user() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.profile.pending = true;
        state.profile.form = ProfileForm {
            name: "Ana Souza".into(),
            email: "ana@shop.com".into(),
            avatar: Some("data:image/png;base64,AAAA".into()),
            ..ProfileForm::default()
        };

        let user = on_profile_saved(
            &mut state,
            Ok(UpdateProfileResponse {
                message: String::new(),
                profile: Profile::default(),
            }),
        )
        .expect("save should succeed in test");

        assert_eq!(user.name, "Ana Souza");
        assert_eq!(user.avatar_base64.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(state.user, Some(user));
        assert_eq!(state.profile.banner, Some(Banner::success("Profile updated")));
    }

    #[test]
    fn test_failed_save_keeps_draft() {
        let mut state = AppState::new(ThemeMode::Dark);
        state.profile.form.name = "Ana".into();

        let user = on_profile_saved(&mut state, Err(crate::core::error::AppError::Network("down".into())));

        assert!(user.is_none());
        assert_eq!(state.profile.form.name, "Ana");
        assert!(state.user.is_none());
    }
}
