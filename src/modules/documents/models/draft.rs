use rust_decimal::Decimal;
use serde::Serialize;

use super::document::DocumentTotals;
use super::line_item::{ComputedLineItem, LineItemInput};
use crate::modules::taxes::{SupplyType, TaxJurisdiction, TransactionKind};

/// A quotation being edited.
///
/// Drafts are values: every edit goes through
/// [`reduce`](crate::modules::documents::services::draft_reducer::reduce),
/// which returns a new draft with all figures recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotationDraft {
    jurisdiction: TaxJurisdiction,
    items: Vec<LineItemInput>,
    discount: Decimal,
    computed: Vec<ComputedLineItem>,
    totals: DocumentTotals,
}

impl QuotationDraft {
    pub(crate) fn from_parts(
        jurisdiction: TaxJurisdiction,
        items: Vec<LineItemInput>,
        discount: Decimal,
        computed: Vec<ComputedLineItem>,
        totals: DocumentTotals,
    ) -> Self {
        Self {
            jurisdiction,
            items,
            discount,
            computed,
            totals,
        }
    }

    pub fn jurisdiction(&self) -> &TaxJurisdiction {
        &self.jurisdiction
    }

    pub fn supply_type(&self) -> SupplyType {
        self.jurisdiction.supply_type()
    }

    pub fn items(&self) -> &[LineItemInput] {
        &self.items
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn computed_items(&self) -> &[ComputedLineItem] {
        &self.computed
    }

    pub fn totals(&self) -> &DocumentTotals {
        &self.totals
    }

    /// The form should block issuing the quotation while this holds
    pub fn discount_exceeds_subtotal(&self) -> bool {
        self.totals.discount_exceeds_subtotal()
    }
}

/// An edit made on the quotation form
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    AddItem(LineItemInput),
    RemoveItem { index: usize },
    SetDescription { index: usize, description: String },
    SetQuantity { index: usize, quantity: Decimal },
    SetUnitPrice { index: usize, unit_price: Decimal },
    SetTaxRate { index: usize, tax_rate: Decimal },
    SetDiscount(Decimal),
    SetTransaction(TransactionKind),
}
