//! # Form Components
//!
//! Reusable inputs for consistent forms across screens.

use egui::{Response, RichText, Ui};
use shared::dto::Customer;

use crate::app::{Banner, BannerKind, FieldErrors};
use crate::domain::NumericField;
use crate::ui::theme::Palette;

pub const FIELD_WIDTH: f32 = 260.0;

/// Labelled single-line text input
pub fn text_input(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> Response {
    ui.label(label);
    ui.add_sized(
        [FIELD_WIDTH, 24.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    )
}

pub fn password_input(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    ui.label(label);
    ui.add_sized(
        [FIELD_WIDTH, 24.0],
        egui::TextEdit::singleline(value).password(true),
    )
}

pub fn multiline_input(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    ui.label(label);
    ui.add_sized([FIELD_WIDTH, 60.0], egui::TextEdit::multiline(value))
}

/// `YYYY-MM-DD` text input
pub fn date_input(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    text_input(ui, label, value, "YYYY-MM-DD")
}

/// Numeric input; both `,` and `.` are accepted as the decimal separator.
pub fn numeric_input(ui: &mut Ui, label: &str, field: &mut NumericField) -> Response {
    ui.label(label);
    numeric_cell(ui, field, FIELD_WIDTH)
}

/// Unlabelled numeric input for table rows
pub fn numeric_cell(ui: &mut Ui, field: &mut NumericField, width: f32) -> Response {
    let response = ui.add_sized([width, 22.0], egui::TextEdit::singleline(field.raw_mut()));
    if response.changed() {
        field.commit();
    }
    response
}

/// Drop-down over a fixed set of enum values
pub fn enum_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    value: &mut T,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(label(value))
        .show_ui(ui, |ui| {
            for option in all {
                ui.selectable_value(value, *option, label(option));
            }
        });
}

pub fn submit_button(ui: &mut Ui, text: &str, pending: bool) -> bool {
    let text = if pending { "Working..." } else { text };
    ui.add_enabled(!pending, egui::Button::new(text)).clicked()
}

pub fn heading(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(RichText::new(text).heading().strong().color(palette.accent));
    ui.add_space(8.0);
}

pub fn banner(ui: &mut Ui, banner: Option<&Banner>, palette: &Palette) {
    let Some(banner) = banner else {
        return;
    };
    let color = match banner.kind {
        BannerKind::Info => palette.info,
        BannerKind::Success => palette.success,
        BannerKind::Error => palette.error,
    };
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.colored_label(color, &banner.text);
        });
    ui.add_space(6.0);
}

/// Inline message under a field, if `key` has one
pub fn field_error(ui: &mut Ui, errors: &FieldErrors, key: &str, palette: &Palette) {
    if let Some(message) = errors.get(key) {
        ui.colored_label(palette.error, RichText::new(message).small());
    }
}

pub fn hint(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.colored_label(palette.dim, RichText::new(text).small());
}

/// Customer combo for document forms; returns the customer picked this frame.
pub fn customer_picker<'a>(ui: &mut Ui, id: &str, current: &str, customers: &'a [Customer]) -> Option<&'a Customer> {
    let mut picked = None;
    let selected = if current.is_empty() { "Select a customer" } else { current };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(240.0)
        .show_ui(ui, |ui| {
            for customer in customers {
                if ui.selectable_label(customer.name == current, &customer.name).clicked() {
                    picked = Some(customer);
                }
            }
        });
    picked
}
