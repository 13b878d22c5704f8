//! # Profile Screen

use egui::{RichText, Ui};

use crate::app::{App, AppState};
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let profile = &state.profile;
    forms::heading(ui, "Profile", palette);
    forms::banner(ui, profile.banner.as_ref(), palette);
    if profile.loading {
        tables::loading(ui);
    }

    let mut form = profile.form.clone();
    let mut pick_avatar = false;
    let mut remove_avatar = false;

    ui.horizontal(|ui| {
        let initial = form.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 32.0, palette.accent);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(28.0),
            egui::Color32::WHITE,
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(&form.name).strong());
            ui.colored_label(palette.dim, &form.email);
            ui.horizontal(|ui| {
                if ui.button("Change photo...").clicked() {
                    pick_avatar = true;
                }
                if form.avatar.is_some() {
                    ui.colored_label(palette.success, "Photo set");
                    if ui.small_button("Remove photo").clicked() {
                        remove_avatar = true;
                    }
                }
            });
        });
    });
    ui.add_space(10.0);

    forms::text_input(ui, "Name", &mut form.name, "Full name");
    ui.label("Email");
    ui.add_enabled(false, egui::TextEdit::singleline(&mut form.email.clone()));
    forms::text_input(ui, "Phone", &mut form.phone, "Optional");
    forms::text_input(ui, "City", &mut form.city, "Optional");
    forms::multiline_input(ui, "Bio", &mut form.bio);
    ui.add_space(8.0);
    let submit = forms::submit_button(ui, "Save profile", profile.pending);

    app.state.write().profile.form = form;
    if pick_avatar {
        if let Some(path) = files::pick_image() {
            app.handle_avatar_pick(&path);
        }
    }
    if remove_avatar {
        app.handle_avatar_remove();
    }
    if submit {
        app.handle_profile_submit();
    }
}
