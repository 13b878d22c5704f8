//! # Settings Screen
//!
//! Backend system configuration in four tabs. Saving validates the required fields
//! and jumps to the tab holding the first missing one.

use egui::Ui;
use shared::dto::{NfeEnvironment, SystemConfig};

use crate::app::{App, AppState, SettingsTab};
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let settings = &state.settings;
    forms::heading(ui, "Settings", palette);
    forms::banner(ui, settings.banner.as_ref(), palette);
    if settings.loading {
        tables::loading(ui);
        return;
    }

    let mut tab = None;
    ui.horizontal(|ui| {
        for candidate in SettingsTab::all() {
            if ui.selectable_label(settings.tab == *candidate, candidate.title()).clicked() {
                tab = Some(*candidate);
            }
        }
    });
    ui.separator();

    let mut config = settings.config.clone();
    let mut pick_logo = false;
    match settings.tab {
        SettingsTab::Company => render_company(ui, &mut config, &mut pick_logo, palette),
        SettingsTab::Printing => render_printing(ui, &mut config),
        SettingsTab::System => render_system(ui, &mut config),
        SettingsTab::Nfe => render_nfe(ui, &mut config),
    }
    ui.add_space(10.0);
    let submit = forms::submit_button(ui, "Save settings", settings.pending);

    app.state.write().settings.config = config;
    if let Some(tab) = tab {
        app.handle_settings_tab(tab);
    }
    if pick_logo {
        if let Some(path) = files::pick_image() {
            app.handle_logo_pick(&path);
        }
    }
    if submit {
        app.handle_settings_submit();
    }
}

fn render_company(ui: &mut Ui, config: &mut SystemConfig, pick_logo: &mut bool, palette: &Palette) {
    egui::Grid::new("settings_company").num_columns(3).spacing([16.0, 6.0]).show(ui, |ui| {
        field(ui, "Company name", &mut config.company_name);
        field(ui, "CNPJ", &mut config.cnpj);
        field(ui, "State registration (IE)", &mut config.ie);
        ui.end_row();
        field(ui, "Municipal registration (IM)", &mut config.im);
        field(ui, "Address", &mut config.address);
        field(ui, "Number", &mut config.number);
        ui.end_row();
        field(ui, "Complement", &mut config.complement);
        field(ui, "District", &mut config.district);
        field(ui, "City", &mut config.city);
        ui.end_row();
        field(ui, "State", &mut config.state);
        field(ui, "ZIP code", &mut config.zip_code);
        field(ui, "Phone", &mut config.phone);
        ui.end_row();
        field(ui, "Email", &mut config.email);
        field(ui, "Website", &mut config.website);
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Choose logo...").clicked() {
            *pick_logo = true;
        }
        if config.logo_base64.is_some() {
            ui.colored_label(palette.success, "Logo set");
            if ui.small_button("Remove").clicked() {
                config.logo_base64 = None;
            }
        }
    });
}

fn render_printing(ui: &mut Ui, config: &mut SystemConfig) {
    egui::Grid::new("settings_printing").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
        field(ui, "Printer name", &mut config.printer_name);
        ui.end_row();
        ui.vertical(|ui| {
            ui.label("Paper width (mm)");
            ui.add(egui::DragValue::new(&mut config.paper_width).range(0..=1000));
        });
        ui.vertical(|ui| {
            ui.label("Paper height (mm, 0 = continuous)");
            ui.add(egui::DragValue::new(&mut config.paper_height).range(0..=2000));
        });
        ui.end_row();
        ui.vertical(|ui| {
            ui.label("Copies");
            ui.add(egui::DragValue::new(&mut config.copies).range(1..=10));
        });
        ui.checkbox(&mut config.auto_print, "Print automatically after a sale");
        ui.end_row();
    });
}

fn render_system(ui: &mut Ui, config: &mut SystemConfig) {
    egui::Grid::new("settings_system").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
        field(ui, "System name", &mut config.system_name);
        field(ui, "Currency", &mut config.default_currency);
        ui.end_row();
        field(ui, "Date format", &mut config.date_format);
        field(ui, "Time format", &mut config.time_format);
        ui.end_row();
    });
}

fn render_nfe(ui: &mut Ui, config: &mut SystemConfig) {
    ui.checkbox(&mut config.nfe_enabled, "Issue NFe");
    ui.add_enabled_ui(config.nfe_enabled, |ui| {
        egui::Grid::new("settings_nfe").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            field(ui, "API URL", &mut config.nfe_api_url);
            ui.vertical(|ui| {
                forms::password_input(ui, "API token", &mut config.nfe_api_token);
            });
            ui.end_row();
            field(ui, "Series", &mut config.nfe_series);
            ui.vertical(|ui| {
                ui.label("Last number");
                ui.add(egui::DragValue::new(&mut config.nfe_last_number));
            });
            ui.end_row();
            ui.vertical(|ui| {
                ui.label("Environment");
                forms::enum_combo(ui, "nfe_environment", &mut config.nfe_environment, NfeEnvironment::all(), NfeEnvironment::label);
            });
            ui.end_row();
        });
    });
}

fn field(ui: &mut Ui, label: &str, value: &mut String) {
    ui.vertical(|ui| {
        forms::text_input(ui, label, value, "");
    });
}
