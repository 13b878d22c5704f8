//! # Point-of-Sale Screen
//!
//! Product grid on the left, cart and checkout on the right. Products can be added by
//! clicking, by typing a QR/bar code or as a manual line.

use egui::{RichText, Ui};
use shared::dto::{CatalogItem, ItemType, PaymentMethod};
use uuid::Uuid;

use super::catalog::matches_search;
use crate::app::{App, AppState};
use crate::domain::format_brl;
use crate::domain::money::format_quantity;
use crate::ui::theme::Palette;
use crate::ui::widgets::{forms, tables};

enum CartAction {
    Add(CatalogItem),
    AddManual,
    Lookup,
    SetQuantity(Uuid, f64),
    Increment(Uuid),
    Decrement(Uuid),
    Remove(Uuid),
    Clear,
    Finalize,
}

pub fn render(ui: &mut Ui, state: &AppState, app: &mut App, palette: &Palette) {
    let pos = &state.pos;
    let mut checkout = pos.checkout.clone();
    let mut actions = Vec::new();

    forms::heading(ui, "Point of sale", palette);
    forms::banner(ui, pos.banner.as_ref(), palette);

    ui.columns(2, |columns| {
        let left = &mut columns[0];
        left.horizontal(|ui| {
            ui.label("Code");
            let code = ui.add(egui::TextEdit::singleline(&mut checkout.code).hint_text("Scan or type a code"));
            if code.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.push(CartAction::Lookup);
            }
            if ui.add_enabled(!pos.lookup_pending, egui::Button::new("Find")).clicked() {
                actions.push(CartAction::Lookup);
            }
            if pos.lookup_pending {
                ui.spinner();
            }
        });
        left.horizontal(|ui| {
            ui.label("Search");
            ui.add(egui::TextEdit::singleline(&mut checkout.search).hint_text("Product name"));
        });
        left.add_space(6.0);
        render_products(left, state, &checkout.search, &mut actions, palette);

        left.add_space(8.0);
        egui::CollapsingHeader::new("Manual item").show(left, |ui| {
            let manual = &mut checkout.manual;
            forms::text_input(ui, "Name", &mut manual.name, "Item name");
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    forms::text_input(ui, "Unit", &mut manual.unit, "un");
                });
                ui.vertical(|ui| {
                    ui.label("Quantity");
                    forms::numeric_cell(ui, &mut manual.quantity, 70.0);
                });
                ui.vertical(|ui| {
                    ui.label("Unit price");
                    forms::numeric_cell(ui, &mut manual.unit_price, 90.0);
                });
            });
            if ui.button("Add to cart").clicked() {
                actions.push(CartAction::AddManual);
            }
        });

        let right = &mut columns[1];
        render_cart(right, state, &mut actions, palette);
        right.add_space(8.0);
        right.horizontal(|ui| {
            ui.label("Payment");
            forms::enum_combo(ui, "pos_payment", &mut checkout.payment_method, PaymentMethod::all(), PaymentMethod::label);
        });
        right.add_space(8.0);
        right.horizontal(|ui| {
            let can_finalize = !pos.cart.is_empty() && !pos.finalizing;
            let text = if pos.finalizing { "Finalizing..." } else { "Finalize sale" };
            if ui.add_enabled(can_finalize, egui::Button::new(RichText::new(text).strong())).clicked() {
                actions.push(CartAction::Finalize);
            }
            if ui.add_enabled(!pos.cart.is_empty(), egui::Button::new("Clear cart")).clicked() {
                actions.push(CartAction::Clear);
            }
        });
    });

    app.state.write().pos.checkout = checkout;
    for action in actions {
        match action {
            CartAction::Add(item) => app.handle_cart_add_product(&item),
            CartAction::AddManual => app.handle_cart_add_manual(),
            CartAction::Lookup => app.handle_code_lookup(),
            CartAction::SetQuantity(id, quantity) => app.handle_cart_set_quantity(id, quantity),
            CartAction::Increment(id) => app.handle_cart_increment(id),
            CartAction::Decrement(id) => app.handle_cart_decrement(id),
            CartAction::Remove(id) => app.handle_cart_remove(id),
            CartAction::Clear => app.handle_cart_clear(),
            CartAction::Finalize => app.handle_sale_finalize(),
        }
    }
}

fn render_products(ui: &mut Ui, state: &AppState, search: &str, actions: &mut Vec<CartAction>, palette: &Palette) {
    let products: Vec<&CatalogItem> = state
        .lookups
        .catalog
        .iter()
        .filter(|item| item.item_type == ItemType::Product && matches_search(item, search))
        .collect();

    if products.is_empty() {
        tables::empty_state(ui, "No products", palette);
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("pos_products")
        .max_height(360.0)
        .show(ui, |ui| {
            for item in products {
                ui.horizontal(|ui| {
                    let in_stock = item.stock_quantity > 0.0;
                    if ui.add_enabled(in_stock, egui::Button::new("+")).clicked() {
                        actions.push(CartAction::Add(item.clone()));
                    }
                    ui.label(RichText::new(&item.name).strong());
                    ui.label(format_brl(item.unit_price));
                    let stock = format!("{} in stock", format_quantity(item.stock_quantity));
                    if in_stock {
                        ui.colored_label(palette.dim, stock);
                    } else {
                        ui.colored_label(palette.error, "Out of stock");
                    }
                });
            }
        });
}

fn render_cart(ui: &mut Ui, state: &AppState, actions: &mut Vec<CartAction>, palette: &Palette) {
    let cart = &state.pos.cart;
    ui.strong(format!("Cart ({})", cart.len()));
    if cart.is_empty() {
        tables::empty_state(ui, "The cart is empty", palette);
        return;
    }

    egui::Grid::new("pos_cart").striped(true).spacing([8.0, 4.0]).show(ui, |ui| {
        for title in ["Item", "Qty", "", "Unit price", "Total", ""] {
            ui.strong(title);
        }
        ui.end_row();

        for entry in cart.entries() {
            ui.label(&entry.line.description);
            let mut quantity = entry.line.quantity.value();
            let drag = egui::DragValue::new(&mut quantity).speed(0.1).range(0.0..=f64::MAX);
            if ui.add(drag).changed() {
                actions.push(CartAction::SetQuantity(entry.id, quantity));
            }
            ui.horizontal(|ui| {
                if ui.small_button("-").clicked() {
                    actions.push(CartAction::Decrement(entry.id));
                }
                if ui.small_button("+").clicked() {
                    actions.push(CartAction::Increment(entry.id));
                }
            });
            ui.label(format_brl(entry.line.unit_price.value()));
            ui.label(format_brl(entry.total()));
            if ui.small_button("Remove").clicked() {
                actions.push(CartAction::Remove(entry.id));
            }
            ui.end_row();
        }
    });

    ui.add_space(6.0);
    ui.label(RichText::new(format!("Total {}", format_brl(cart.total()))).size(20.0).strong().color(palette.accent));
}
