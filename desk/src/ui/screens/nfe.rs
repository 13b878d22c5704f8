//! # NFe Import Screen
//!
//! Upload a supplier's NFe XML; the backend creates or restocks the listed products.

use egui::{RichText, Ui};
use shared::dto::ImportedItemStatus;

use crate::app::{App, AppState};
use crate::domain::money::format_quantity;
use crate::ui::theme::Palette;
use crate::ui::widgets::{files, forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let nfe = &state.nfe;
    forms::heading(ui, "NFe import", palette);
    forms::banner(ui, nfe.banner.as_ref(), palette);
    forms::hint(ui, "Pick the XML of a purchase invoice to add its items to stock.", palette);
    ui.add_space(6.0);

    let mut pick = false;
    let mut upload = false;
    let mut reset = false;
    ui.horizontal(|ui| {
        if ui.add_enabled(!nfe.pending, egui::Button::new("Choose XML...")).clicked() {
            pick = true;
        }
        match &nfe.file {
            Some(file) => {
                ui.label(RichText::new(&file.name).strong());
                ui.colored_label(palette.dim, format!("{} KB", file.content.len().div_ceil(1024)));
                upload = forms::submit_button(ui, "Import", nfe.pending);
                if ui.add_enabled(!nfe.pending, egui::Button::new("Clear")).clicked() {
                    reset = true;
                }
            }
            None => {
                ui.colored_label(palette.dim, "No file selected");
            }
        }
    });

    if let Some(result) = &nfe.result {
        ui.add_space(10.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            let color = if result.success { palette.success } else { palette.warning };
            ui.colored_label(color, RichText::new(format!("NFe {}", result.nfe_number.as_deref().unwrap_or("-"))).strong());
            if let Some(issuer) = &result.issuer {
                ui.label(format!("Issuer: {}", issuer));
            }
            if let Some(key) = &result.nfe_key {
                ui.colored_label(palette.dim, RichText::new(key).monospace().small());
            }
            ui.label(format!(
                "{} item(s): {} created, {} restocked",
                result.total_items, result.items_imported, result.items_updated
            ));
        });

        ui.add_space(6.0);
        let items = &result.items;
        if !items.is_empty() {
            tables::data_table(ui, "nfe_items", &["Item", "Quantity", "Result", "Stock before", "Stock after"], items.len(), |i, row| {
                let item = &items[i];
                row.col(|ui| {
                    ui.label(&item.name);
                });
                row.col(|ui| {
                    ui.label(format_quantity(item.quantity));
                });
                row.col(|ui| {
                    match item.status {
                        ImportedItemStatus::Created => ui.colored_label(palette.success, "Created"),
                        ImportedItemStatus::Updated => ui.colored_label(palette.info, "Restocked"),
                    };
                });
                row.col(|ui| {
                    ui.label(item.old_stock.map(format_quantity).unwrap_or_else(|| "-".to_string()));
                });
                row.col(|ui| {
                    ui.label(format_quantity(item.new_stock));
                });
            });
        }
    }

    if pick {
        if let Some(path) = files::pick_xml() {
            app.handle_nfe_pick(&path);
        }
    }
    if reset {
        app.handle_nfe_reset();
    }
    if upload {
        app.handle_nfe_upload();
    }
}
