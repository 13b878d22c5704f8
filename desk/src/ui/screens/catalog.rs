//! # Catalog Screen
//!
//! Products and services with prices and stock levels. The search box filters the
//! table locally.

use egui::Ui;
use shared::dto::{CatalogItem, ItemType};

use crate::app::{App, AppState};
use crate::domain::format_brl;
use crate::domain::money::format_quantity;
use crate::domain::stock::is_low_stock;
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let finance = &state.finance;
    forms::heading(ui, "Catalog", palette);
    forms::banner(ui, finance.banner.as_ref(), palette);

    let mut form = finance.catalog_form.clone();
    let mut submit = false;
    let mut pick_image = false;
    egui::CollapsingHeader::new("New item")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("catalog_form").num_columns(3).spacing([16.0, 6.0]).show(ui, |ui| {
                ui.vertical(|ui| {
                    forms::text_input(ui, "Name", &mut form.name, "Item name");
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "SKU", &mut form.sku, "Optional");
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "QR / barcode", &mut form.qr_code, "Optional");
                });
                ui.end_row();

                ui.vertical(|ui| {
                    ui.label("Type");
                    forms::enum_combo(ui, "catalog_type", &mut form.item_type, ItemType::all(), ItemType::label);
                });
                ui.vertical(|ui| {
                    forms::text_input(ui, "Unit", &mut form.unit, "un");
                });
                ui.vertical(|ui| {
                    forms::numeric_input(ui, "Unit price", &mut form.unit_price);
                });
                ui.end_row();

                ui.vertical(|ui| {
                    forms::numeric_input(ui, "Cost price", &mut form.cost_price);
                });
                if form.item_type == ItemType::Product {
                    ui.vertical(|ui| {
                        forms::numeric_input(ui, "Stock", &mut form.stock_quantity);
                    });
                    ui.vertical(|ui| {
                        forms::numeric_input(ui, "Minimum stock", &mut form.min_stock);
                    });
                }
                ui.end_row();
            });
            forms::multiline_input(ui, "Description", &mut form.description);

            ui.horizontal(|ui| {
                if ui.button("Choose image...").clicked() {
                    pick_image = true;
                }
                if form.image.is_some() {
                    ui.colored_label(palette.success, "Image attached");
                    if ui.small_button("Remove").clicked() {
                        form.image = None;
                    }
                }
            });
            ui.add_space(6.0);
            submit = forms::submit_button(ui, "Add item", finance.pending);
        });

    let mut search = finance.catalog_search.clone();
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label("Search");
        ui.add(egui::TextEdit::singleline(&mut search).hint_text("Name, SKU or code"));
    });

    {
        let mut guard = app.state.write();
        guard.finance.catalog_form = form;
        guard.finance.catalog_search = search.clone();
    }

    let items: Vec<&CatalogItem> = finance
        .data
        .catalog
        .iter()
        .filter(|item| matches_search(item, &search))
        .collect();

    if finance.loading && finance.data.catalog.is_empty() {
        tables::loading(ui);
    } else if items.is_empty() {
        tables::empty_state(ui, "No catalog items", palette);
    } else {
        let headers = ["Name", "Type", "SKU", "Unit", "Price", "Stock", "Min"];
        tables::data_table(ui, "catalog", &headers, items.len(), |i, row| {
            let item = items[i];
            row.col(|ui| {
                ui.label(&item.name);
            });
            row.col(|ui| {
                ui.label(item.item_type.label());
            });
            row.col(|ui| {
                ui.label(item.sku.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(item.unit.as_deref().unwrap_or("-"));
            });
            row.col(|ui| {
                ui.label(format_brl(item.unit_price));
            });
            row.col(|ui| {
                let text = format_quantity(item.stock_quantity);
                if is_low_stock(item) {
                    ui.colored_label(palette.warning, text);
                } else {
                    ui.label(text);
                }
            });
            row.col(|ui| {
                ui.label(format_quantity(item.min_stock));
            });
        });
    }

    if pick_image {
        if let Some(path) = files::pick_image() {
            app.handle_catalog_image_pick(&path);
        }
    }
    if submit {
        app.handle_catalog_submit();
    }
}

pub(crate) fn matches_search(item: &CatalogItem, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [Some(&item.name), item.sku.as_ref(), item.qr_code.as_ref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_sku_and_code() {
        let item = CatalogItem {
            name: "Coffee Beans".into(),
            sku: Some("CB-01".into()),
            qr_code: Some("789100".into()),
            ..Default::default()
        };

        assert!(matches_search(&item, ""));
        assert!(matches_search(&item, "coffee"));
        assert!(matches_search(&item, "cb-0"));
        assert!(matches_search(&item, "7891"));
        assert!(!matches_search(&item, "tea"));
    }
}
