//! Currency display. Amounts stay `f64` everywhere else; they are rounded to cents only
//! here.

use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// `R$1.234,56` style text.
pub fn format_brl(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let decimal = Decimal::from_f64_retain(amount)
        .unwrap_or(Decimal::ZERO)
        .round_dp(2);
    Money::from_decimal(decimal, iso::BRL).to_string()
}

/// Quantity text without trailing zeros (`2`, `2.5`, `0.75`).
pub fn format_quantity(quantity: f64) -> String {
    let text = format!("{:.3}", quantity);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
