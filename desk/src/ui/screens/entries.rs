//! # Financial Entries Screen

use egui::Ui;
use shared::dto::{EntryStatus, EntryType};

use crate::app::{App, AppState};
use crate::domain::format_brl;
use crate::ui::theme::Palette;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let finance = &state.finance;
    forms::heading(ui, "Financial entries", palette);
    forms::banner(ui, finance.banner.as_ref(), palette);

    let summary = &finance.data.summary;
    ui.horizontal(|ui| {
        ui.label(format!("Month {}", summary.month));
        ui.separator();
        ui.colored_label(palette.success, format!("Income {}", format_brl(summary.monthly_income)));
        ui.colored_label(palette.error, format!("Expenses {}", format_brl(summary.monthly_expense)));
        ui.label(format!("Balance {}", format_brl(summary.monthly_balance)));
        ui.colored_label(palette.warning, format!("Pending {}", format_brl(summary.total_pending)));
    });
    ui.add_space(8.0);

    let mut form = finance.entry_form.clone();
    let mut submit = false;
    egui::CollapsingHeader::new("New entry")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Type");
                    forms::enum_combo(ui, "entry_type", &mut form.entry_type, EntryType::all(), EntryType::label);
                });
                ui.vertical(|ui| {
                    ui.label("Status");
                    forms::enum_combo(ui, "entry_status", &mut form.status, EntryStatus::all(), EntryStatus::label);
                });
                ui.vertical(|ui| {
                    ui.label("Amount");
                    forms::numeric_cell(ui, &mut form.amount, 120.0);
                });
            });
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    forms::text_input(ui, "Description", &mut form.description, "What is this for?");
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Category", &mut form.category, "Optional");
                });
            });
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    forms::date_input(ui, "Due date", &mut form.due_date);
                });
                ui.vertical(|ui| {
                    forms::date_input(ui, "Paid date", &mut form.paid_date);
                });
            });
            ui.add_space(6.0);
            submit = forms::submit_button(ui, "Add entry", finance.pending);
        });
    app.state.write().finance.entry_form = form;

    ui.add_space(10.0);
    let entries = &finance.data.entries;
    if finance.loading && entries.is_empty() {
        tables::loading(ui);
    } else if entries.is_empty() {
        tables::empty_state(ui, "No entries yet", palette);
    } else {
        let headers = ["Description", "Category", "Type", "Status", "Amount", "Due", "Paid"];
        tables::data_table(ui, "entries", &headers, entries.len(), |i, row| {
            let entry = &entries[i];
            row.col(|ui| {
                ui.label(&entry.description);
            });
            row.col(|ui| {
                ui.label(&entry.category);
            });
            row.col(|ui| {
                ui.label(entry.entry_type.label());
            });
            row.col(|ui| {
                ui.label(entry.status.label());
            });
            row.col(|ui| {
                let color = match entry.entry_type {
                    EntryType::Income => palette.success,
                    EntryType::Expense => palette.error,
                };
                ui.colored_label(color, format_brl(entry.amount));
            });
            row.col(|ui| {
                ui.label(tables::date_text(entry.due_date.as_deref()));
            });
            row.col(|ui| {
                ui.label(tables::date_text(entry.paid_date.as_deref()));
            });
        });
    }

    if submit {
        app.handle_entry_submit();
    }
}
