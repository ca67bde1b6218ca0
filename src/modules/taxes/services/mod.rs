pub mod tax_calculator;

pub use tax_calculator::{calculate_line_tax, checked_line_tax, TaxCalculator};
