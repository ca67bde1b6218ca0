use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::core::money::ensure_non_negative;
use crate::modules::taxes::models::{LineTax, SupplyType};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Computes the GST figures for one line without validating inputs.
///
/// No intermediate rounding: the caller decides when to round to paise.
///
/// # Panics
///
/// Panics if the line amount overflows `Decimal`. Untrusted input goes
/// through [`TaxCalculator::calculate_line`] or [`checked_line_tax`].
pub fn calculate_line_tax(
    quantity: Decimal,
    unit_price: Decimal,
    tax_rate: Decimal,
    is_intra_state: bool,
) -> LineTax {
    let taxable_value = quantity * unit_price;
    let gst_amount = taxable_value * (tax_rate / ONE_HUNDRED);
    split_line(taxable_value, gst_amount, taxable_value + gst_amount, is_intra_state)
}

/// Same as [`calculate_line_tax`], returning `None` when an amount overflows.
pub fn checked_line_tax(
    quantity: Decimal,
    unit_price: Decimal,
    tax_rate: Decimal,
    is_intra_state: bool,
) -> Option<LineTax> {
    let taxable_value = quantity.checked_mul(unit_price)?;
    let gst_amount = taxable_value.checked_mul(tax_rate.checked_div(ONE_HUNDRED)?)?;
    let total = taxable_value.checked_add(gst_amount)?;
    Some(split_line(taxable_value, gst_amount, total, is_intra_state))
}

fn split_line(
    taxable_value: Decimal,
    gst_amount: Decimal,
    total: Decimal,
    is_intra_state: bool,
) -> LineTax {
    let (cgst_amount, sgst_amount, igst_amount) = if is_intra_state {
        let half = gst_amount / Decimal::TWO;
        (half, half, Decimal::ZERO)
    } else {
        (Decimal::ZERO, Decimal::ZERO, gst_amount)
    };

    LineTax {
        taxable_value,
        gst_amount,
        cgst_amount,
        sgst_amount,
        igst_amount,
        total,
    }
}

/// TaxCalculator handles per-line-item GST calculations
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate taxable value, GST split and line total
    ///
    /// Rejects negative quantity or unit price, rates outside 0..=100 and
    /// amounts too large to represent with `AppError::InvalidAmount`.
    pub fn calculate_line(
        &self,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
        supply_type: SupplyType,
    ) -> Result<LineTax, AppError> {
        ensure_non_negative("quantity", quantity)?;
        ensure_non_negative("unit_price", unit_price)?;
        self.validate_tax_rate(tax_rate)?;

        let line = checked_line_tax(quantity, unit_price, tax_rate, supply_type.is_intra_state())
            .ok_or_else(|| AppError::invalid_amount("unit_price", unit_price))?;

        tracing::trace!(
            %quantity,
            %unit_price,
            %tax_rate,
            %supply_type,
            taxable_value = %line.taxable_value,
            gst_amount = %line.gst_amount,
            "Calculated line tax"
        );

        Ok(line)
    }

    /// Validate tax rate is a percentage between 0 and 100
    pub fn validate_tax_rate(&self, tax_rate: Decimal) -> Result<(), AppError> {
        if tax_rate < Decimal::ZERO || tax_rate > ONE_HUNDRED {
            return Err(AppError::invalid_amount("tax_rate", tax_rate));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
