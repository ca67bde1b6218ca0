use crate::core::money::format_inr;
use crate::core::{AppError, Result};
use crate::modules::documents::models::{
    CalculateDocumentRequest, ComputedLineItem, DocumentKind, DocumentResponse, PlaceOfSupply,
};
use crate::modules::documents::services::DocumentAggregator;
use crate::modules::taxes::models::state_name;
use crate::modules::taxes::{LineTax, TaxCalculator, TaxJurisdiction};

/// Prices quotations and invoices for the CRM screens and PDF routes
pub struct DocumentService {
    seller_state_code: String,
    calculator: TaxCalculator,
    aggregator: DocumentAggregator,
}

impl DocumentService {
    /// `seller_state_code` is the company's registered state, used when a
    /// request does not name one
    pub fn new(seller_state_code: impl Into<String>) -> Self {
        Self {
            seller_state_code: seller_state_code.into(),
            calculator: TaxCalculator::new(),
            aggregator: DocumentAggregator::new(),
        }
    }

    /// Compute line items, totals and GST breakdown for a document
    pub fn calculate(
        &self,
        kind: DocumentKind,
        request: CalculateDocumentRequest,
    ) -> Result<DocumentResponse> {
        if request.line_items.is_empty() {
            return Err(AppError::validation(format!(
                "Each {} must have at least one line item",
                kind
            )));
        }

        let seller_state_code = request
            .seller_state_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .unwrap_or(self.seller_state_code.as_str())
            .to_string();

        let jurisdiction = TaxJurisdiction::new(seller_state_code, request.transaction);
        if let Err(err) = jurisdiction.validate() {
            tracing::warn!(%kind, error = %err, "Rejected document jurisdiction");
            return Err(err);
        }
        let supply_type = jurisdiction.supply_type();

        let mut line_items: Vec<ComputedLineItem> = Vec::with_capacity(request.line_items.len());
        for (index, item) in request.line_items.iter().enumerate() {
            if item.description.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Line item {} description cannot be empty",
                    index + 1
                )));
            }
            line_items.push(item.compute(&self.calculator, supply_type)?);
        }

        let taxes: Vec<LineTax> = line_items.iter().map(|item| item.tax).collect();
        let totals = self.aggregator.aggregate(&taxes, request.discount)?;
        let rounded_totals = totals.rounded();
        let gst_breakdown = self.aggregator.gst_breakdown(&line_items)?;

        tracing::debug!(
            %kind,
            %supply_type,
            lines = line_items.len(),
            subtotal = %totals.subtotal,
            total_tax = %totals.total_tax,
            grand_total = %totals.grand_total,
            "Calculated document totals"
        );

        let place_code = jurisdiction.place_of_supply().to_string();
        let place_of_supply = PlaceOfSupply {
            state_name: state_name(&place_code),
            state_code: place_code,
        };

        Ok(DocumentResponse {
            kind,
            supply_type,
            seller_state_code: jurisdiction.seller_state_code,
            place_of_supply,
            line_items,
            totals,
            rounded_totals,
            gst_breakdown,
            grand_total_display: format_inr(rounded_totals.grand_total),
        })
    }
}
