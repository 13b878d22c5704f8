//! # Quotes Screen

use egui::Ui;
use shared::dto::QuoteStatus;

use crate::app::{App, AppState, FieldErrors, PdfDocument};
use crate::domain::format_brl;
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, line_items, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let finance = &state.finance;
    forms::heading(ui, "Quotes", palette);
    forms::banner(ui, finance.banner.as_ref(), palette);

    let mut form = finance.quote_form.clone();
    let mut submit = false;
    egui::CollapsingHeader::new("New quote")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Customer");
                    if let Some(customer) = forms::customer_picker(ui, "quote_customer", &form.customer_name, &finance.data.customers) {
                        form.select_customer(customer);
                    }
                });
                ui.vertical(|ui| {
                    ui.label("Status");
                    forms::enum_combo(ui, "quote_status", &mut form.status, QuoteStatus::all(), QuoteStatus::label);
                });
            });
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    forms::date_input(ui, "Issue date", &mut form.issue_date);
                });
                ui.vertical(|ui| {
                    forms::date_input(ui, "Valid until", &mut form.valid_until);
                });
            });
            forms::multiline_input(ui, "Notes", &mut form.notes);
            ui.add_space(6.0);
            line_items::render_line_items(
                ui,
                "quote_items",
                &mut form.items,
                &finance.data.catalog,
                &FieldErrors::new(),
                palette,
            );
            ui.add_space(6.0);
            submit = forms::submit_button(ui, "Create quote", finance.pending);
        });
    app.state.write().finance.quote_form = form;

    ui.add_space(10.0);
    let quotes = &finance.data.quotes;
    let mut delete = None;
    let mut pdf = None;
    if finance.loading && quotes.is_empty() {
        tables::loading(ui);
    } else if quotes.is_empty() {
        tables::empty_state(ui, "No quotes yet", palette);
    } else {
        let headers = ["#", "Customer", "Status", "Issued", "Valid until", "Total", ""];
        tables::data_table(ui, "quotes", &headers, quotes.len(), |i, row| {
            let quote = &quotes[i];
            row.col(|ui| {
                ui.label(quote.id.to_string());
            });
            row.col(|ui| {
                ui.label(&quote.customer_name);
            });
            row.col(|ui| {
                ui.label(quote.status.label());
            });
            row.col(|ui| {
                ui.label(tables::date_text(quote.issue_date.as_deref()));
            });
            row.col(|ui| {
                ui.label(quote.valid_until.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(format_brl(quote.total));
            });
            row.col(|ui| {
                if ui.small_button("PDF").clicked() {
                    pdf = Some(PdfDocument::Quote(quote.id));
                }
                if ui.add_enabled(!finance.pending, egui::Button::new("Delete").small()).clicked() {
                    delete = Some(quote.id);
                }
            });
        });
    }

    if submit {
        app.handle_quote_submit();
    }
    if let Some(id) = delete {
        app.handle_quote_delete(id);
    }
    if let Some(document) = pdf {
        if let Some(target) = files::save_pdf(&document.file_name()) {
            app.handle_pdf_download(document, target);
        }
    }
}
