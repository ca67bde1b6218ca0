//! Quotation draft reducer.
//!
//! The quotation form dispatches one [`DraftEvent`] per edit. `reduce` turns
//! the current draft and the event into the next draft, recomputing every
//! line and total from scratch. A rejected event returns an error and the
//! caller keeps the draft it already has.
//!
//! A discount above the subtotal is not an error while editing: it is
//! flagged on the draft and only rejected when the document is priced.

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::documents::models::{DraftEvent, LineItemInput, QuotationDraft};
use crate::modules::documents::services::DocumentAggregator;
use crate::modules::taxes::{LineTax, TaxCalculator, TaxJurisdiction};

/// Start an empty draft for a validated jurisdiction
pub fn new_draft(jurisdiction: TaxJurisdiction) -> Result<QuotationDraft> {
    jurisdiction.validate()?;
    recompute(jurisdiction, Vec::new(), Decimal::ZERO)
}

/// Apply one edit to a draft
pub fn reduce(draft: &QuotationDraft, event: DraftEvent) -> Result<QuotationDraft> {
    let mut jurisdiction = draft.jurisdiction().clone();
    let mut items = draft.items().to_vec();
    let mut discount = draft.discount();

    match event {
        DraftEvent::AddItem(item) => items.push(item),
        DraftEvent::RemoveItem { index } => {
            item_at(&mut items, index)?;
            items.remove(index);
        }
        DraftEvent::SetDescription { index, description } => {
            item_at(&mut items, index)?.description = description;
        }
        DraftEvent::SetQuantity { index, quantity } => {
            item_at(&mut items, index)?.quantity = quantity;
        }
        DraftEvent::SetUnitPrice { index, unit_price } => {
            item_at(&mut items, index)?.unit_price = unit_price;
        }
        DraftEvent::SetTaxRate { index, tax_rate } => {
            item_at(&mut items, index)?.tax_rate = tax_rate;
        }
        DraftEvent::SetDiscount(amount) => discount = amount,
        DraftEvent::SetTransaction(transaction) => {
            jurisdiction.transaction = transaction;
            jurisdiction.validate()?;
        }
    }

    recompute(jurisdiction, items, discount)
}

fn item_at(items: &mut [LineItemInput], index: usize) -> Result<&mut LineItemInput> {
    let count = items.len();
    items.get_mut(index).ok_or_else(|| {
        AppError::not_found(format!(
            "line item {} (draft has {} items)",
            index, count
        ))
    })
}

fn recompute(
    jurisdiction: TaxJurisdiction,
    items: Vec<LineItemInput>,
    discount: Decimal,
) -> Result<QuotationDraft> {
    let calculator = TaxCalculator::new();
    let supply_type = jurisdiction.supply_type();

    let computed = items
        .iter()
        .map(|item| item.compute(&calculator, supply_type))
        .collect::<Result<Vec<_>>>()?;

    let taxes: Vec<LineTax> = computed.iter().map(|item| item.tax).collect();
    let totals = DocumentAggregator::new().totals(&taxes, discount)?;

    Ok(QuotationDraft::from_parts(
        jurisdiction,
        items,
        discount,
        computed,
        totals,
    ))
}
