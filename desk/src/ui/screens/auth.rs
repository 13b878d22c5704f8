//! # Authentication Screens
//!
//! Login, registration and password recovery forms. All four share the banner and
//! the pending flag in [`crate::app::AuthState`].

use egui::Ui;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Palette;
use crate::ui::widgets::forms;

/// Render whichever auth form the current screen names
pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        forms::heading(ui, "BizDesk", palette);
        ui.set_max_width(320.0);
        forms::banner(ui, state.auth.banner.as_ref(), palette);

        match state.current_screen {
            Screen::Register => render_register(ui, state, app),
            Screen::ForgotPassword => render_forgot(ui, state, app, palette),
            Screen::ResetPassword => render_reset(ui, state, app),
            _ => render_login(ui, state, app),
        }
    });
}

fn enter_pressed(ui: &Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn render_login(ui: &mut Ui, state: &AppState, app: &mut App) {
    let mut form = state.auth.login.clone();

    forms::text_input(ui, "Email", &mut form.email, "you@company.com");
    ui.add_space(6.0);
    let password = forms::password_input(ui, "Password", &mut form.password);
    ui.add_space(12.0);

    let mut submit = forms::submit_button(ui, "Sign in", state.auth.pending);
    submit |= enter_pressed(ui, &password) && !state.auth.pending;

    ui.add_space(8.0);
    let mut go = None;
    ui.horizontal(|ui| {
        if ui.link("Create account").clicked() {
            go = Some(Screen::Register);
        }
        if ui.link("Forgot password?").clicked() {
            go = Some(Screen::ForgotPassword);
        }
    });

    app.state.write().auth.login = form;
    if submit {
        app.handle_login_submit();
    }
    if let Some(screen) = go {
        app.handle_screen_change(screen);
    }
}

fn render_register(ui: &mut Ui, state: &AppState, app: &mut App) {
    let mut form = state.auth.register.clone();

    forms::text_input(ui, "Name", &mut form.name, "Full name");
    forms::text_input(ui, "Email", &mut form.email, "you@company.com");
    forms::password_input(ui, "Password", &mut form.password);
    let confirm = forms::password_input(ui, "Confirm password", &mut form.confirm_password);
    ui.add_space(12.0);

    let mut submit = forms::submit_button(ui, "Create account", state.auth.pending);
    submit |= enter_pressed(ui, &confirm) && !state.auth.pending;
    let back = ui.link("Back to sign in").clicked();

    app.state.write().auth.register = form;
    if submit {
        app.handle_register_submit();
    }
    if back {
        app.handle_screen_change(Screen::Login);
    }
}

fn render_forgot(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let mut form = state.auth.forgot.clone();

    forms::hint(ui, "We will send a reset link to this address.", palette);
    let email = forms::text_input(ui, "Email", &mut form.email, "you@company.com");
    ui.add_space(12.0);

    let mut submit = forms::submit_button(ui, "Send reset link", state.auth.pending);
    submit |= enter_pressed(ui, &email) && !state.auth.pending;

    // Development backends echo the token instead of mailing it
    if let Some(token) = &state.auth.reset_token_hint {
        ui.add_space(6.0);
        forms::hint(ui, &format!("Reset token: {}", token), palette);
    }

    let mut go = None;
    ui.horizontal(|ui| {
        if ui.link("Back to sign in").clicked() {
            go = Some(Screen::Login);
        }
        if ui.link("I have a token").clicked() {
            go = Some(Screen::ResetPassword);
        }
    });

    app.state.write().auth.forgot = form;
    if submit {
        app.handle_forgot_password_submit();
    }
    if let Some(screen) = go {
        app.handle_screen_change(screen);
    }
}

fn render_reset(ui: &mut Ui, state: &AppState, app: &mut App) {
    let mut form = state.auth.reset.clone();

    forms::text_input(ui, "Reset token", &mut form.token, "Token from the email");
    forms::password_input(ui, "New password", &mut form.new_password);
    let confirm = forms::password_input(ui, "Confirm password", &mut form.confirm_password);
    ui.add_space(12.0);

    let mut submit = forms::submit_button(ui, "Reset password", state.auth.pending);
    submit |= enter_pressed(ui, &confirm) && !state.auth.pending;
    let back = ui.link("Back to sign in").clicked();

    app.state.write().auth.reset = form;
    if submit {
        app.handle_reset_password_submit();
    }
    if back {
        app.handle_screen_change(Screen::Login);
    }
}
