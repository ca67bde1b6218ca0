use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};
use crate::modules::identifiers::validate_gstin;
use crate::modules::taxes::models::states::is_known_state_code;

/// Whether a supply stays within one state (CGST + SGST) or crosses states (IGST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    IntraState,
    InterState,
}

impl SupplyType {
    pub fn is_intra_state(&self) -> bool {
        matches!(self, SupplyType::IntraState)
    }
}

impl fmt::Display for SupplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyType::IntraState => write!(f, "intra_state"),
            SupplyType::InterState => write!(f, "inter_state"),
        }
    }
}

/// Who the document is addressed to.
///
/// Registered businesses carry their GSTIN and state; consumers carry nothing
/// and are billed as intra-state supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionKind {
    B2c,
    B2b {
        buyer_gstin: String,
        buyer_state_code: String,
    },
}

/// Seller state plus buyer relationship; decides how GST is split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxJurisdiction {
    pub seller_state_code: String,
    pub transaction: TransactionKind,
}

impl TaxJurisdiction {
    pub fn new(seller_state_code: impl Into<String>, transaction: TransactionKind) -> Self {
        Self {
            seller_state_code: seller_state_code.into(),
            transaction,
        }
    }

    pub fn supply_type(&self) -> SupplyType {
        match &self.transaction {
            TransactionKind::B2c => SupplyType::IntraState,
            TransactionKind::B2b {
                buyer_state_code, ..
            } if *buyer_state_code == self.seller_state_code => SupplyType::IntraState,
            TransactionKind::B2b { .. } => SupplyType::InterState,
        }
    }

    /// Checks state codes against the GST state table and, for registered
    /// buyers, that the GSTIN is well formed and issued in the declared state
    pub fn validate(&self) -> Result<()> {
        if !is_known_state_code(&self.seller_state_code) {
            return Err(AppError::validation(format!(
                "Unknown seller state code '{}'",
                self.seller_state_code
            )));
        }

        if let TransactionKind::B2b {
            buyer_gstin,
            buyer_state_code,
        } = &self.transaction
        {
            if !is_known_state_code(buyer_state_code) {
                return Err(AppError::validation(format!(
                    "Unknown buyer state code '{}'",
                    buyer_state_code
                )));
            }

            let gstin = validate_gstin(buyer_gstin);
            if !gstin.is_valid {
                return Err(AppError::validation(format!(
                    "Invalid buyer GSTIN: {}",
                    gstin.error.unwrap_or_default()
                )));
            }

            if gstin.state_code.as_deref() != Some(buyer_state_code.as_str()) {
                return Err(AppError::validation(format!(
                    "Buyer GSTIN is registered in state {} but buyer state code is {}",
                    gstin.state_code.unwrap_or_default(),
                    buyer_state_code
                )));
            }
        }

        Ok(())
    }

    /// State code of the place of supply printed on the document
    pub fn place_of_supply(&self) -> &str {
        match &self.transaction {
            TransactionKind::B2c => &self.seller_state_code,
            TransactionKind::B2b {
                buyer_state_code, ..
            } => buyer_state_code,
        }
    }
}
