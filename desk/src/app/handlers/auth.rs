//! # Authentication Handlers
//!
//! Submission of the login, registration and password recovery forms. Applying a
//! successful login touches the session store, so that part lives on
//! [`crate::app::App`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use shared::dto::{ForgotPasswordResponse, MessageResponse};

use super::failure_message;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, Banner};
use crate::app::tasks::TaskContext;
use crate::core::error::Result;

/// Pause before leaving a confirmation message for the login form
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1200);

/// Handle login button click
pub(crate) fn submit_login(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let form = {
        let mut state = state.write();
        if state.auth.pending {
            return;
        }
        let form = state.auth.login.clone();
        if let Err(message) = form.validate() {
            state.auth.banner = Some(Banner::error(message));
            return;
        }
        state.auth.pending = true;
        state.auth.banner = None;
        form
    };

    ctx.spawn(move |api| async move {
        AppEvent::LoginResult(api.login(form.email.trim().to_string(), form.password).await)
    });
}

/// Handle register button click
pub(crate) fn submit_register(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let form = {
        let mut state = state.write();
        if state.auth.pending {
            return;
        }
        let form = state.auth.register.clone();
        if let Err(message) = form.validate() {
            state.auth.banner = Some(Banner::error(message));
            return;
        }
        state.auth.pending = true;
        state.auth.banner = None;
        form
    };

    ctx.spawn(move |api| async move {
        let result = api
            .register(form.name.trim().to_string(), form.email.trim().to_string(), form.password)
            .await;
        AppEvent::RegisterResult(result)
    });
}

pub(crate) fn submit_forgot_password(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let email = {
        let mut state = state.write();
        if state.auth.pending {
            return;
        }
        if let Err(message) = state.auth.forgot.validate() {
            state.auth.banner = Some(Banner::error(message));
            return;
        }
        state.auth.pending = true;
        state.auth.banner = None;
        state.auth.reset_token_hint = None;
        state.auth.forgot.email.trim().to_string()
    };

    ctx.spawn(move |api| async move { AppEvent::ForgotPasswordResult(api.forgot_password(email).await) });
}

pub(crate) fn submit_reset_password(state: &Arc<RwLock<AppState>>, ctx: &TaskContext) {
    let form = {
        let mut state = state.write();
        if state.auth.pending {
            return;
        }
        let form = state.auth.reset.clone();
        if let Err(message) = form.validate() {
            state.auth.banner = Some(Banner::error(message));
            return;
        }
        state.auth.pending = true;
        state.auth.banner = None;
        form
    };

    ctx.spawn(move |api| async move {
        AppEvent::ResetPasswordResult(api.reset_password(form.token.trim().to_string(), form.new_password).await)
    });
}

pub(crate) fn on_register_result(state: &mut AppState, ctx: &TaskContext, result: Result<MessageResponse>) {
    state.auth.pending = false;
    match result {
        Ok(response) => {
            tracing::info!("Account registered");
            state.auth.register = Default::default();
            state.auth.banner = Some(Banner::success(non_empty_or(
                response.message,
                "Account created. You can sign in now.",
            )));
            ctx.send_after(REDIRECT_DELAY, AppEvent::RedirectToLogin);
        }
        Err(err) => {
            state.auth.banner = Some(Banner::error(failure_message(&err, "Could not create the account")));
        }
    }
}

pub(crate) fn on_forgot_password_result(state: &mut AppState, result: Result<ForgotPasswordResponse>) {
    state.auth.pending = false;
    match result {
        Ok(response) => {
            state.auth.banner = Some(Banner::success(non_empty_or(
                response.message,
                "If the address is registered, a reset link is on its way.",
            )));
            if let Some(token) = response.reset_token.filter(|t| !t.is_empty()) {
                state.auth.reset.token = token.clone();
                state.auth.reset_token_hint = Some(token);
            }
        }
        Err(err) => {
            state.auth.banner = Some(Banner::error(failure_message(&err, "Could not request a password reset")));
        }
    }
}

pub(crate) fn on_reset_password_result(state: &mut AppState, ctx: &TaskContext, result: Result<MessageResponse>) {
    state.auth.pending = false;
    match result {
        Ok(response) => {
            state.auth.reset = Default::default();
            state.auth.reset_token_hint = None;
            state.auth.banner = Some(Banner::success(non_empty_or(response.message, "Password changed.")));
            ctx.send_after(REDIRECT_DELAY, AppEvent::RedirectToLogin);
        }
        Err(err) => {
            state.auth.banner = Some(Banner::error(failure_message(&err, "Could not reset the password")));
        }
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
