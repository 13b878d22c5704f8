//! # Dashboard Screen
//!
//! Month summary cards, sales statistics, the revenue chart, top products and recent
//! sales. Each block renders as soon as its own request lands.

use egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::app::{App, AppState};
use crate::domain::dashboard::{bar_fractions, percent_split};
use crate::domain::format_brl;
use crate::domain::money::format_quantity;
use crate::ui::theme::Palette;
use crate::ui::widgets::{forms, tables};

pub fn render(ui: &mut Ui, state: &AppState, _app: &mut App, palette: &Palette) {
    let dashboard = &state.dashboard;
    forms::heading(ui, "Dashboard", palette);
    if dashboard.pending > 0 {
        tables::loading(ui);
    }

    if let Some(summary) = &dashboard.summary {
        if summary.low_stock > 0 {
            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(1.0, palette.warning))
                .show(ui, |ui| {
                    ui.colored_label(
                        palette.warning,
                        RichText::new(format!("{} catalog item(s) at or below minimum stock", summary.low_stock)).strong(),
                    );
                });
            ui.add_space(6.0);
        }
        ui.horizontal_wrapped(|ui| {
            card(ui, "Income this month", &format_brl(summary.monthly_income), palette.success, palette);
            card(ui, "Expenses this month", &format_brl(summary.monthly_expense), palette.error, palette);
            let balance_color = if summary.monthly_balance < 0.0 { palette.error } else { palette.text };
            card(ui, "Balance", &format_brl(summary.monthly_balance), balance_color, palette);
            card(ui, "Pending", &format_brl(summary.total_pending), palette.warning, palette);
            card(ui, "Customers", &summary.customers.to_string(), palette.text, palette);
            let low_color = if summary.low_stock > 0 { palette.warning } else { palette.text };
            card(ui, "Low stock items", &summary.low_stock.to_string(), low_color, palette);
            card(
                ui,
                "Quotes open / approved",
                &format!("{} / {}", summary.open_quotes, summary.approved_quotes),
                palette.text,
                palette,
            );
        });

        let (income_pct, expense_pct) = percent_split(summary.monthly_income, summary.monthly_expense);
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Income");
            ui.add(egui::ProgressBar::new((income_pct / 100.0) as f32).desired_width(200.0).text(format!("{:.0}%", income_pct)));
            ui.label("Expenses");
            ui.add(egui::ProgressBar::new((expense_pct / 100.0) as f32).desired_width(200.0).text(format!("{:.0}%", expense_pct)));
        });
    }

    if let Some(stats) = &dashboard.stats {
        ui.add_space(10.0);
        ui.horizontal_wrapped(|ui| {
            card(ui, "Total revenue", &format_brl(stats.total_revenue), palette.accent, palette);
            card(ui, "Revenue this month", &format_brl(stats.month_revenue), palette.accent, palette);
            card(ui, "Average ticket", &format_brl(stats.average_ticket), palette.text, palette);
            card(
                ui,
                "Sales paid / pending / cancelled",
                &format!("{} / {} / {}", stats.paid, stats.pending, stats.cancelled),
                palette.text,
                palette,
            );
        });
    }

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        render_chart(&mut columns[0], state, palette);
        render_top_products(&mut columns[1], state, palette);
    });

    ui.add_space(12.0);
    ui.strong("Recent sales");
    let recent = &dashboard.recent_sales;
    if recent.is_empty() {
        tables::empty_state(ui, "No sales yet", palette);
    } else {
        tables::data_table(ui, "recent_sales", &["#", "Customer", "Date", "Status", "Total"], recent.len(), |i, row| {
            let sale = &recent[i];
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
                ui.label(sale.status.label());
            });
            row.col(|ui| {
                ui.label(format_brl(sale.total));
            });
        });
    }
}

fn card(ui: &mut Ui, title: &str, value: &str, color: egui::Color32, palette: &Palette) {
    egui::Frame::group(ui.style())
        .fill(palette.panel)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(170.0);
            ui.vertical(|ui| {
                ui.colored_label(palette.dim, RichText::new(title).small());
                ui.label(RichText::new(value).size(18.0).strong().color(color));
            });
        });
}

fn render_chart(ui: &mut Ui, state: &AppState, palette: &Palette) {
    let chart = &state.dashboard.chart;
    ui.strong("Sales over time");
    if chart.values.is_empty() {
        tables::empty_state(ui, "No chart data", palette);
        return;
    }

    let bars: Vec<Bar> = chart
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let label = chart.labels.get(i).cloned().unwrap_or_default();
            Bar::new(i as f64, *value).name(label).width(0.6).fill(palette.accent)
        })
        .collect();
    let labels = chart.labels.clone();

    Plot::new("sales_chart")
        .height(220.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            labels.get(index as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("Revenue", bars));
        });
}

fn render_top_products(ui: &mut Ui, state: &AppState, palette: &Palette) {
    let products = &state.dashboard.top_products;
    ui.strong("Top products");
    if products.is_empty() {
        tables::empty_state(ui, "No products sold yet", palette);
        return;
    }

    let revenues: Vec<f64> = products.iter().map(|p| p.revenue).collect();
    let fractions = bar_fractions(&revenues);
    for (product, fraction) in products.iter().zip(fractions) {
        ui.horizontal(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(&product.name).strong());
            ui.colored_label(palette.dim, format!("{} sold", format_quantity(product.quantity)));
        });
        ui.add(
            egui::ProgressBar::new(fraction as f32)
                .desired_width(ui.available_width())
                .text(format_brl(product.revenue)),
        );
    }
}
