//! # Table Components
//!
//! Striped tables built on `egui_extras::TableBuilder`.

use egui::Ui;
use egui_extras::{Column, TableBuilder, TableRow};

use crate::ui::theme::Palette;

pub const ROW_HEIGHT: f32 = 24.0;

/// Render `count` rows under `headers`; `row` fills one row by index.
pub fn data_table(
    ui: &mut Ui,
    id: &str,
    headers: &[&str],
    count: usize,
    mut row: impl FnMut(usize, &mut TableRow<'_, '_>),
) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), headers.len().saturating_sub(1))
            .column(Column::remainder())
            .header(ROW_HEIGHT, |mut header| {
                for title in headers {
                    header.col(|ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, count, |mut table_row| {
                    let index = table_row.index();
                    row(index, &mut table_row);
                });
            });
    });
}

/// Shown instead of a table with no rows
pub fn empty_state(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(palette.dim, text);
        ui.add_space(20.0);
    });
}

pub fn loading(ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Loading...");
    });
}

/// Date column text: `DD/MM/YYYY`, or a dash when unset.
pub fn date_text(date: Option<&str>) -> String {
    date.map(lib_utils::format_date_br).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_text() {
        assert_eq!(date_text(Some("2024-03-05T10:00:00")), "05/03/2024");
        assert_eq!(date_text(None), "-");
    }
}
