pub mod controllers;
pub mod models;
pub mod services;

pub use models::{GstSlab, LineTax, SupplyType, TaxJurisdiction, TransactionKind};
pub use services::{calculate_line_tax, checked_line_tax, TaxCalculator};
