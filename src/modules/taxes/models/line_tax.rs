use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived tax figures for one line item.
///
/// Either `cgst_amount` and `sgst_amount` carry the tax (intra-state) or
/// `igst_amount` does (inter-state), never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineTax {
    /// quantity × unit_price
    pub taxable_value: Decimal,
    /// taxable_value × tax_rate / 100
    pub gst_amount: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    /// taxable_value + gst_amount
    pub total: Decimal,
}
