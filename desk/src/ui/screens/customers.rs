//! # Customers Screen

use egui::Ui;

use crate::app::{App, AppState};
use crate::ui::theme::Palette;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let finance = &state.finance;
    forms::heading(ui, "Customers", palette);
    forms::banner(ui, finance.banner.as_ref(), palette);

    let mut form = finance.customer_form.clone();
    let mut submit = false;
    egui::CollapsingHeader::new("New customer")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("customer_form").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
                ui.vertical(|ui| {
                    forms::text_input(ui, "Name", &mut form.name, "Customer name");
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Email", &mut form.email, "Optional");
                });
                ui.end_row();
                ui.vertical(|ui| {
                    forms::text_input(ui, "Phone", &mut form.phone, "Optional");
                });
                ui.vertical(|ui| {
                    forms::multiline_input(ui, "Notes", &mut form.notes);
                });
                ui.end_row();
            });
            submit = forms::submit_button(ui, "Add customer", finance.pending);
        });
    app.state.write().finance.customer_form = form;

    ui.add_space(10.0);
    let customers = &finance.data.customers;
    let mut delete = None;
    if finance.loading && customers.is_empty() {
        tables::loading(ui);
    } else if customers.is_empty() {
        tables::empty_state(ui, "No customers yet", palette);
    } else {
        tables::data_table(ui, "customers", &["Name", "Email", "Phone", "Notes", ""], customers.len(), |i, row| {
            let customer = &customers[i];
            row.col(|ui| {
                ui.label(&customer.name);
            });
            row.col(|ui| {
                ui.label(customer.email.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(customer.phone.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(customer.notes.as_deref().unwrap_or(""));
            });
            row.col(|ui| {
                if ui.add_enabled(!finance.pending, egui::Button::new("Delete")).clicked() {
                    delete = Some(customer.id);
                }
            });
        });
    }

    if submit {
        app.handle_customer_submit();
    }
    if let Some(id) = delete {
        app.handle_customer_delete(id);
    }
}
