//! # Service Orders Screen

use egui::Ui;
use shared::dto::ServiceOrderStatus;

use crate::app::forms::ServiceOrderForm;
use crate::app::{App, AppState, PdfDocument};
use crate::domain::format_brl;
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, line_items, tables};

enum OrderAction {
    New,
    Status(i64, ServiceOrderStatus),
    Pdf(PdfDocument),
    Submit,
    Close,
}

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let orders_state = &state.service_orders;
    let mut actions = Vec::new();

    forms::heading(ui, "Service orders", palette);
    forms::banner(ui, orders_state.banner.as_ref(), palette);
    if ui.button("New service order").clicked() {
        actions.push(OrderAction::New);
    }
    ui.add_space(8.0);

    let orders = &orders_state.orders;
    if orders_state.loading && orders.is_empty() {
        tables::loading(ui);
    } else if orders.is_empty() {
        tables::empty_state(ui, "No service orders yet", palette);
    } else {
        let headers = ["#", "Customer", "Technician", "Start", "Due", "Total", "Status", ""];
        tables::data_table(ui, "service_orders", &headers, orders.len(), |i, row| {
            let order = &orders[i];
            row.col(|ui| {
                ui.label(order.id.to_string());
            });
            row.col(|ui| {
                ui.label(&order.customer_name).on_hover_text(order.description.as_deref().unwrap_or(""));
            });
            row.col(|ui| {
                ui.label(order.assigned_technician.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(tables::date_text(order.start_date.as_deref()));
            });
            row.col(|ui| {
                ui.label(tables::date_text(order.estimated_end_date.as_deref()));
            });
            row.col(|ui| {
                ui.label(format_brl(order.total));
            });
            row.col(|ui| {
                let mut status = order.status;
                forms::enum_combo(
                    ui,
                    &format!("order_status_{}", order.id),
                    &mut status,
                    ServiceOrderStatus::all(),
                    ServiceOrderStatus::label,
                );
                if status != order.status {
                    actions.push(OrderAction::Status(order.id, status));
                }
            });
            row.col(|ui| {
                if ui.small_button("PDF").clicked() {
                    actions.push(OrderAction::Pdf(PdfDocument::ServiceOrder(order.id)));
                }
            });
        });
    }

    let mut form = orders_state.form.clone();
    if let Some(form) = form.as_mut() {
        render_form_window(ui.ctx(), state, form, &mut actions, palette);
    }
    if form.is_some() {
        app.state.write().service_orders.form = form;
    }

    for action in actions {
        match action {
            OrderAction::New => app.handle_service_order_new(),
            OrderAction::Status(id, status) => app.handle_service_order_status_change(id, status),
            OrderAction::Pdf(document) => {
                if let Some(target) = files::save_pdf(&document.file_name()) {
                    app.handle_pdf_download(document, target);
                }
            }
            OrderAction::Submit => app.handle_service_order_submit(),
            OrderAction::Close => app.handle_service_order_form_close(),
        }
    }
}

fn render_form_window(
    ctx: &egui::Context,
    state: &AppState,
    form: &mut ServiceOrderForm,
    actions: &mut Vec<OrderAction>,
    palette: &Palette,
) {
    let mut open = true;

    egui::Window::new("New service order")
        .id(egui::Id::new("service_order_form"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(820.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Customer");
                    if let Some(customer) =
                        forms::customer_picker(ui, "order_customer", &form.customer_name, &state.lookups.customers)
                    {
                        form.select_customer(customer);
                    }
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Phone", &mut form.customer_phone, "Optional");
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Address", &mut form.customer_address, "Optional");
                });
            });
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Status");
                    forms::enum_combo(ui, "order_form_status", &mut form.status, ServiceOrderStatus::all(), ServiceOrderStatus::label);
                });
                ui.vertical(|ui| {
                    forms::date_input(ui, "Start date", &mut form.start_date);
                });
                ui.vertical(|ui| {
                    forms::date_input(ui, "Estimated end", &mut form.estimated_end_date);
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Technician", &mut form.assigned_technician, "Optional");
                });
            });
            forms::multiline_input(ui, "Description", &mut form.description);
            forms::multiline_input(ui, "Technician notes", &mut form.technician_notes);

            ui.add_space(6.0);
            render_rows(ui, state, form);

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if forms::submit_button(ui, "Create order", state.service_orders.pending) {
                    actions.push(OrderAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(OrderAction::Close);
                }
            });
            forms::hint(ui, "Rows picked from the catalog follow its product/service type.", palette);
        });

    if !open {
        actions.push(OrderAction::Close);
    }
}

fn render_rows(ui: &mut Ui, state: &AppState, form: &mut ServiceOrderForm) {
    let mut remove = None;

    egui::Grid::new("order_rows").striped(true).spacing([8.0, 4.0]).show(ui, |ui| {
        for title in ["", "Item", "Unit", "Qty", "Unit price", "Total", "Details", "Service", ""] {
            ui.strong(title);
        }
        ui.end_row();

        for (index, row) in form.items.iter_mut().enumerate() {
            if let Some(item) = line_items::catalog_picker(ui, ("order_row", index), &state.lookups.catalog) {
                row.apply_catalog(item);
            }
            line_items::line_cells(ui, &mut row.line);
            ui.add_sized([160.0, 22.0], egui::TextEdit::singleline(&mut row.details));
            ui.checkbox(&mut row.is_service, "");
            if ui.small_button("Remove").clicked() {
                remove = Some(index);
            }
            ui.end_row();
        }
    });

    if let Some(index) = remove {
        form.remove_row(index);
    }
    ui.horizontal(|ui| {
        if ui.button("Add item").clicked() {
            form.push_row();
        }
        ui.add_space(16.0);
        ui.strong(format!("Total: {}", format_brl(form.total())));
    });
}
