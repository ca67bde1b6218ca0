// A line item on a quotation or invoice.
//
// Inputs are what the form holds; the computed item carries the GST figures
// derived from them and is what gets persisted and rendered on the PDF.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::identifiers::validate_hsn_sac;
use crate::modules::taxes::{LineTax, SupplyType, TaxCalculator};

const MAX_DESCRIPTION_LEN: usize = 255;

/// Line item as entered on a quotation or invoice form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Description of the product or service
    #[serde(default)]
    pub description: String,

    /// HSN (goods) or SAC (services) classification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<String>,

    pub quantity: Decimal,

    pub unit_price: Decimal,

    /// GST rate in percent
    pub tax_rate: Decimal,
}

impl LineItemInput {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_sac: None,
            quantity,
            unit_price,
            tax_rate,
        }
    }

    pub fn with_hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.hsn_sac = Some(code.into());
        self
    }

    /// Compute GST figures for this line
    ///
    /// Drafts may carry an empty description; the document service checks
    /// descriptions separately before issuing a document.
    pub fn compute(
        &self,
        calculator: &TaxCalculator,
        supply_type: SupplyType,
    ) -> Result<ComputedLineItem> {
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::validation(format!(
                "Line item description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        let hsn_sac = match self.hsn_sac.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => Some(validate_hsn_sac(code)?.to_string()),
            _ => None,
        };

        let tax =
            calculator.calculate_line(self.quantity, self.unit_price, self.tax_rate, supply_type)?;

        Ok(ComputedLineItem {
            description: self.description.clone(),
            hsn_sac,
            quantity: self.quantity,
            unit_price: self.unit_price,
            tax_rate: self.tax_rate,
            tax,
        })
    }
}

/// Line item with its derived GST figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedLineItem {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_rate: Decimal,
    #[serde(flatten)]
    pub tax: LineTax,
}
