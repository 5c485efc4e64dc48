//! Money calculation helpers using rust_decimal for precision
//!
//! All monetary arithmetic in the workspace goes through `Decimal`;
//! floats only appear at the JSON boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary values are rounded to 2 decimal places, half-up
pub const DECIMAL_PLACES: u32 = 2;

/// Round an amount to monetary precision, half-up (midpoint away from
/// zero, not banker's rounding)
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Total for one cart line: `unit_price * quantity`, rounded
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round_amount(unit_price * Decimal::from(quantity))
}

/// Format an amount for display with exactly two decimal places
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_amount(amount))
}
