//! # Line Item Editor
//!
//! Editable rows shared by quotes, sales and service orders. Picking a catalog entry
//! overwrites the row's description, unit and price.

use egui::Ui;
use shared::dto::CatalogItem;

use crate::app::FieldErrors;
use crate::domain::{format_brl, LineItem, LineItems};
use crate::ui::theme::Palette;
use crate::ui::widgets::forms;

/// Combo listing the catalog; returns the entry picked this frame.
pub fn catalog_picker<'a>(ui: &mut Ui, id: impl std::hash::Hash, catalog: &'a [CatalogItem]) -> Option<&'a CatalogItem> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text("Catalog")
        .width(110.0)
        .show_ui(ui, |ui| {
            for item in catalog {
                let text = format!("{} ({})", item.name, format_brl(item.unit_price));
                if ui.selectable_label(false, text).clicked() {
                    picked = Some(item);
                }
            }
        });
    picked
}

/// Description, unit, quantity, price and total cells of one row.
pub fn line_cells(ui: &mut Ui, line: &mut LineItem) {
    ui.add_sized([200.0, 22.0], egui::TextEdit::singleline(&mut line.description).hint_text("Description"));
    ui.add_sized([50.0, 22.0], egui::TextEdit::singleline(&mut line.unit));
    forms::numeric_cell(ui, &mut line.quantity, 60.0);
    forms::numeric_cell(ui, &mut line.unit_price, 80.0);
    ui.label(format_brl(line.total()));
}

/// Full editor; `errors` keys follow `item-{index}-{field}`.
pub fn render_line_items(
    ui: &mut Ui,
    id: &str,
    items: &mut LineItems,
    catalog: &[CatalogItem],
    errors: &FieldErrors,
    palette: &Palette,
) {
    let mut remove = None;

    egui::Grid::new(id).striped(true).spacing([8.0, 4.0]).show(ui, |ui| {
        for title in ["", "Description", "Unit", "Qty", "Unit price", "Total", ""] {
            ui.strong(title);
        }
        ui.end_row();

        for (index, line) in items.rows_mut().iter_mut().enumerate() {
            if let Some(item) = catalog_picker(ui, (id, index), catalog) {
                line.apply_catalog(item);
            }
            line_cells(ui, line);
            if ui.small_button("Remove").clicked() {
                remove = Some(index);
            }
            ui.end_row();

            let messages: Vec<&String> = ["description", "quantity", "unitPrice"]
                .iter()
                .filter_map(|field| errors.get(&format!("item-{}-{}", index, field)))
                .collect();
            if !messages.is_empty() {
                ui.label("");
                let text = messages.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(" · ");
                ui.colored_label(palette.error, egui::RichText::new(text).small());
                ui.end_row();
            }
        }
    });

    if let Some(index) = remove {
        items.remove(index);
    }

    ui.horizontal(|ui| {
        if ui.button("Add item").clicked() {
            items.push_blank();
        }
        ui.add_space(16.0);
        ui.strong(format!("Total: {}", format_brl(items.total())));
    });
    forms::field_error(ui, errors, "items", palette);
}
