//! Rupee amount helpers.
//!
//! Every calculation in this crate keeps full `Decimal` precision; rounding to
//! paise only happens when totals are persisted or rendered.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Number of decimal places in a rupee amount (1 paisa = 0.01)
pub const PAISE_SCALE: u32 = 2;

/// Rounds an amount to paise, half away from zero as printed on GST invoices
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAISE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative amounts with an `InvalidAmount` error naming the field
pub fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(AppError::invalid_amount(field, value));
    }
    Ok(())
}

/// Formats an amount with the rupee sign and Indian digit grouping
/// (thousands, then lakhs and crores in groups of two).
///
/// `1234567.891` becomes `₹12,34,567.89`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_amount(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.width$}", rounded.abs(), width = PAISE_SCALE as usize);
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{}₹{}.{}", sign, group_indian(integer), fraction)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
