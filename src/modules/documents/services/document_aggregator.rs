use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::money::ensure_non_negative;
use crate::core::{AppError, Result};
use crate::modules::documents::models::{ComputedLineItem, DocumentTotals, GstBreakdownRow};
use crate::modules::taxes::LineTax;

/// Rolls computed line items up into document totals
pub struct DocumentAggregator;

impl DocumentAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate line taxes and apply the document discount
    ///
    /// The discount comes off the pre-tax subtotal once, at document level.
    /// Line taxes are not recomputed on the discounted amount. A discount
    /// larger than the subtotal is rejected.
    pub fn aggregate(&self, lines: &[LineTax], discount: Decimal) -> Result<DocumentTotals> {
        let totals = self.totals(lines, discount)?;

        if totals.discount_exceeds_subtotal() {
            return Err(AppError::invalid_amount("discount", discount));
        }

        Ok(totals)
    }

    /// Sum line taxes and apply the discount without bounding it by the
    /// subtotal
    ///
    /// Drafts use this while items are still being edited; the grand total
    /// may go negative until the discount is brought back in range.
    pub fn totals(&self, lines: &[LineTax], discount: Decimal) -> Result<DocumentTotals> {
        ensure_non_negative("discount", discount)?;

        let mut totals = DocumentTotals {
            discount,
            ..DocumentTotals::default()
        };

        for line in lines {
            totals.subtotal = add(totals.subtotal, line.taxable_value, "subtotal")?;
            totals.total_cgst = add(totals.total_cgst, line.cgst_amount, "total_cgst")?;
            totals.total_sgst = add(totals.total_sgst, line.sgst_amount, "total_sgst")?;
            totals.total_igst = add(totals.total_igst, line.igst_amount, "total_igst")?;
        }

        totals.total_tax = add(totals.total_cgst, totals.total_sgst, "total_tax")?;
        totals.total_tax = add(totals.total_tax, totals.total_igst, "total_tax")?;
        totals.grand_total = add(totals.subtotal - discount, totals.total_tax, "grand_total")?;

        Ok(totals)
    }

    /// Group lines by tax rate, ascending
    pub fn gst_breakdown(&self, items: &[ComputedLineItem]) -> Result<Vec<GstBreakdownRow>> {
        let mut rows: BTreeMap<Decimal, GstBreakdownRow> = BTreeMap::new();

        for item in items {
            let rate = item.tax_rate.normalize();
            let row = rows.entry(rate).or_insert_with(|| GstBreakdownRow {
                tax_rate: rate,
                taxable_value: Decimal::ZERO,
                cgst_amount: Decimal::ZERO,
                sgst_amount: Decimal::ZERO,
                igst_amount: Decimal::ZERO,
                total_tax: Decimal::ZERO,
            });

            row.taxable_value = add(row.taxable_value, item.tax.taxable_value, "taxable_value")?;
            row.cgst_amount = add(row.cgst_amount, item.tax.cgst_amount, "cgst_amount")?;
            row.sgst_amount = add(row.sgst_amount, item.tax.sgst_amount, "sgst_amount")?;
            row.igst_amount = add(row.igst_amount, item.tax.igst_amount, "igst_amount")?;
            row.total_tax = add(row.total_tax, item.tax.gst_amount, "total_tax")?;
        }

        Ok(rows.into_values().collect())
    }
}

fn add(sum: Decimal, amount: Decimal, field: &str) -> Result<Decimal> {
    sum.checked_add(amount)
        .ok_or_else(|| AppError::invalid_amount(field, amount))
}

impl Default for DocumentAggregator {
    fn default() -> Self {
        Self::new()
    }
}
