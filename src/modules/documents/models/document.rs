use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::line_item::{ComputedLineItem, LineItemInput};
use crate::core::money::round_amount;
use crate::modules::taxes::{SupplyType, TransactionKind};

/// Kind of document being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Quotation,
    Invoice,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Quotation => write!(f, "quotation"),
            DocumentKind::Invoice => write!(f, "invoice"),
        }
    }
}

/// Document-level totals
///
/// Formula: grand_total = subtotal - discount + total_tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of line taxable values
    pub subtotal: Decimal,
    /// Document-level discount, taken off the pre-tax subtotal
    pub discount: Decimal,
    pub total_cgst: Decimal,
    pub total_sgst: Decimal,
    pub total_igst: Decimal,
    /// total_cgst + total_sgst + total_igst
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

impl DocumentTotals {
    pub fn discount_exceeds_subtotal(&self) -> bool {
        self.discount > self.subtotal
    }

    /// Totals rounded to paise for storage and display.
    ///
    /// The components are rounded first and the sums rebuilt from them, so the
    /// rounded record still satisfies the grand total formula exactly.
    pub fn rounded(&self) -> Self {
        let subtotal = round_amount(self.subtotal);
        let discount = round_amount(self.discount);
        let total_cgst = round_amount(self.total_cgst);
        let total_sgst = round_amount(self.total_sgst);
        let total_igst = round_amount(self.total_igst);
        let total_tax = total_cgst + total_sgst + total_igst;

        Self {
            subtotal,
            discount,
            total_cgst,
            total_sgst,
            total_igst,
            total_tax,
            grand_total: subtotal - discount + total_tax,
        }
    }
}

/// One row of the "GST Breakdown" table: all lines sharing a tax rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GstBreakdownRow {
    pub tax_rate: Decimal,
    pub taxable_value: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub total_tax: Decimal,
}

/// Request body for the calculate endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateDocumentRequest {
    /// Overrides the configured company state, e.g. for a branch registration
    #[serde(default)]
    pub seller_state_code: Option<String>,
    pub transaction: TransactionKind,
    pub line_items: Vec<LineItemInput>,
    #[serde(default)]
    pub discount: Decimal,
}

/// State code of the place of supply together with its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceOfSupply {
    pub state_code: String,
    pub state_name: Option<&'static str>,
}

/// Flat record persisted with the quotation/invoice row and rendered on its PDF
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub kind: DocumentKind,
    pub supply_type: SupplyType,
    pub seller_state_code: String,
    pub place_of_supply: PlaceOfSupply,
    pub line_items: Vec<ComputedLineItem>,
    pub totals: DocumentTotals,
    pub rounded_totals: DocumentTotals,
    pub gst_breakdown: Vec<GstBreakdownRow>,
    /// Rounded grand total with rupee sign and Indian digit grouping
    pub grand_total_display: String,
}
