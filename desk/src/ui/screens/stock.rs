//! # Stock Screen
//!
//! Low-stock alerts, manual adjustments and the movement history.

use egui::{RichText, Ui};
use shared::dto::{ItemType, StockMovementType};

use crate::app::{App, AppState};
use crate::domain::money::format_quantity;
use crate::domain::stock::low_stock;
use crate::ui::theme::Palette;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let finance = &state.finance;
    let catalog = &finance.data.catalog;
    forms::heading(ui, "Stock", palette);
    forms::banner(ui, finance.banner.as_ref(), palette);

    let products: Vec<_> = catalog.iter().filter(|i| i.item_type == ItemType::Product).cloned().collect();
    let low = low_stock(&products);
    if !low.is_empty() {
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, palette.warning))
            .show(ui, |ui| {
                ui.colored_label(palette.warning, RichText::new(format!("{} item(s) at or below minimum stock", low.len())).strong());
                for item in &low {
                    ui.label(format!(
                        "{}: {} (min {})",
                        item.name,
                        format_quantity(item.stock_quantity),
                        format_quantity(item.min_stock)
                    ));
                }
            });
        ui.add_space(8.0);
    }

    let mut form = finance.stock_form.clone();
    let mut submit = false;
    egui::CollapsingHeader::new("Adjust stock")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Item");
                    let selected = form
                        .selected(&products)
                        .map(|i| i.name.clone())
                        .unwrap_or_else(|| "Select an item".to_string());
                    egui::ComboBox::from_id_salt("stock_item")
                        .selected_text(selected)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for item in &products {
                                let text = format!("{} ({})", item.name, format_quantity(item.stock_quantity));
                                ui.selectable_value(&mut form.item_id, Some(item.id), text);
                            }
                        });
                });
                ui.vertical(|ui| {
                    ui.label("Movement");
                    forms::enum_combo(ui, "stock_movement", &mut form.movement_type, StockMovementType::all(), StockMovementType::label);
                });
                ui.vertical(|ui| {
                    let label = if form.movement_type == StockMovementType::Adjust { "New quantity" } else { "Quantity" };
                    ui.label(label);
                    forms::numeric_cell(ui, &mut form.quantity, 100.0);
                });
            });
            forms::text_input(ui, "Reason", &mut form.reason, "Optional");
            ui.add_space(6.0);
            submit = forms::submit_button(ui, "Apply", finance.pending);
        });
    app.state.write().finance.stock_form = form;

    ui.add_space(10.0);
    ui.strong("Movements");
    let movements = &finance.data.movements;
    if finance.loading && movements.is_empty() {
        tables::loading(ui);
    } else if movements.is_empty() {
        tables::empty_state(ui, "No stock movements yet", palette);
    } else {
        tables::data_table(ui, "movements", &["Date", "Item", "Type", "Quantity", "Reason"], movements.len(), |i, row| {
            let movement = &movements[i];
            row.col(|ui| {
                ui.label(tables::date_text(movement.created_at.as_deref()));
            });
            row.col(|ui| {
                ui.label(&movement.item_name);
            });
            row.col(|ui| {
                let color = match movement.movement_type {
                    StockMovementType::In => palette.success,
                    StockMovementType::Out => palette.error,
                    StockMovementType::Adjust => palette.info,
                };
                ui.colored_label(color, movement.movement_type.label());
            });
            row.col(|ui| {
                ui.label(format_quantity(movement.quantity));
            });
            row.col(|ui| {
                ui.label(movement.reason.as_deref().unwrap_or(""));
            });
        });
    }

    if submit {
        app.handle_stock_adjust_submit();
    }
}
