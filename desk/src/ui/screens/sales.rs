//! # Sales Screen
//!
//! Filterable sales list with inline status changes, plus a create/edit window that
//! highlights every invalid field at once.

use egui::Ui;
use shared::dto::{PaymentMethod, Sale, SaleFilter, SaleStatus};

use crate::app::{App, AppState, FieldErrors, PdfDocument};
use crate::app::forms::SaleForm;
use crate::domain::format_brl;
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, line_items, tables};

enum SalesAction {
    ApplyFilter(SaleFilter),
    New,
    Edit(Sale),
    Delete(i64),
    Status(i64, SaleStatus),
    Pdf(PdfDocument),
    Submit,
    Close,
}

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let sales = &state.sales;
    let mut actions = Vec::new();

    forms::heading(ui, "Sales", palette);
    forms::banner(ui, sales.banner.as_ref(), palette);

    let mut filter = sales.filter.clone();
    ui.horizontal(|ui| {
        ui.label("Status");
        let selected = filter.status.map(|s| s.label()).unwrap_or("All");
        egui::ComboBox::from_id_salt("sales_status_filter")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter.status, None, "All");
                for status in SaleStatus::all() {
                    ui.selectable_value(&mut filter.status, Some(*status), status.label());
                }
            });
        let mut search = filter.search.clone().unwrap_or_default();
        let response = ui.add(egui::TextEdit::singleline(&mut search).hint_text("Customer or notes"));
        filter.search = Some(search).filter(|s| !s.is_empty());
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Apply").clicked() || enter {
            actions.push(SalesAction::ApplyFilter(filter.clone()));
        }
        ui.separator();
        if ui.button("New sale").clicked() {
            actions.push(SalesAction::New);
        }
    });
    ui.add_space(8.0);

    let list = &sales.sales;
    if sales.loading && list.is_empty() {
        tables::loading(ui);
    } else if list.is_empty() {
        tables::empty_state(ui, "No sales found", palette);
    } else {
        let headers = ["#", "Customer", "Date", "Payment", "Total", "Status", ""];
        tables::data_table(ui, "sales", &headers, list.len(), |i, row| {
            let sale = &list[i];
            row.col(|ui| {
                ui.label(sale.id.to_string());
            });
            row.col(|ui| {
                ui.label(&sale.customer_name);
            });
            row.col(|ui| {
                ui.label(tables::date_text(sale.sale_date.as_deref()));
            });
            row.col(|ui| {
                ui.label(sale.payment_method.map(|p| p.label()).unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(format_brl(sale.total));
            });
            row.col(|ui| {
                let mut status = sale.status;
                forms::enum_combo(ui, &format!("sale_status_{}", sale.id), &mut status, SaleStatus::all(), SaleStatus::label);
                if status != sale.status {
                    actions.push(SalesAction::Status(sale.id, status));
                }
            });
            row.col(|ui| {
                if ui.small_button("Edit").clicked() {
                    actions.push(SalesAction::Edit(sale.clone()));
                }
                if ui.small_button("PDF").clicked() {
                    actions.push(SalesAction::Pdf(PdfDocument::Sale(sale.id)));
                }
                if ui.add_enabled(!sales.pending, egui::Button::new("Delete").small()).clicked() {
                    actions.push(SalesAction::Delete(sale.id));
                }
            });
        });
    }

    let mut form = sales.form.clone();
    if let Some(form) = form.as_mut() {
        render_form_window(ui.ctx(), state, form, &mut actions, palette);
    }

    {
        let mut guard = app.state.write();
        guard.sales.filter = filter;
        if form.is_some() {
            guard.sales.form = form;
        }
    }

    for action in actions {
        match action {
            SalesAction::ApplyFilter(filter) => app.handle_sales_filter_apply(filter),
            SalesAction::New => app.handle_sale_new(),
            SalesAction::Edit(sale) => app.handle_sale_edit(&sale),
            SalesAction::Delete(id) => app.handle_sale_delete(id),
            SalesAction::Status(id, status) => app.handle_sale_status_change(id, status),
            SalesAction::Pdf(document) => {
                if let Some(target) = files::save_pdf(&document.file_name()) {
                    app.handle_pdf_download(document, target);
                }
            }
            SalesAction::Submit => app.handle_sale_submit(),
            SalesAction::Close => app.handle_sale_form_close(),
        }
    }
}

fn render_form_window(
    ctx: &egui::Context,
    state: &AppState,
    form: &mut SaleForm,
    actions: &mut Vec<SalesAction>,
    palette: &Palette,
) {
    let errors: &FieldErrors = &state.sales.errors;
    let title = match form.editing {
        Some(id) => format!("Edit sale #{}", id),
        None => "New sale".to_string(),
    };
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("sale_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(760.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Customer");
                    if let Some(customer) = forms::customer_picker(ui, "sale_customer", &form.customer_name, &state.lookups.customers) {
                        form.select_customer(customer);
                    }
                    forms::field_error(ui, errors, "customerId", palette);
                });
                ui.vertical(|ui| {
                    forms::date_input(ui, "Date", &mut form.sale_date);
                    forms::field_error(ui, errors, "saleDate", palette);
                });
            });
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Status");
                    forms::enum_combo(ui, "sale_form_status", &mut form.status, SaleStatus::all(), SaleStatus::label);
                });
                ui.vertical(|ui| {
                    ui.label("Payment");
                    let selected = form.payment_method.map(|p| p.label()).unwrap_or("Not set");
                    egui::ComboBox::from_id_salt("sale_form_payment")
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut form.payment_method, None, "Not set");
                            for method in PaymentMethod::all() {
                                ui.selectable_value(&mut form.payment_method, Some(*method), method.label());
                            }
                        });
                });
            });
            forms::multiline_input(ui, "Notes", &mut form.notes);
            ui.add_space(6.0);
            line_items::render_line_items(ui, "sale_items", &mut form.items, &state.lookups.catalog, errors, palette);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let text = if form.editing.is_some() { "Save changes" } else { "Create sale" };
                if forms::submit_button(ui, text, state.sales.pending) {
                    actions.push(SalesAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(SalesAction::Close);
                }
            });
        });

    if !open {
        actions.push(SalesAction::Close);
    }
}
