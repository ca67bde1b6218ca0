mod gst_slab;
mod jurisdiction;
mod line_tax;
pub mod states;

pub use gst_slab::GstSlab;
pub use jurisdiction::{SupplyType, TaxJurisdiction, TransactionKind};
pub use line_tax::LineTax;
pub use states::{all_states, is_known_state_code, state_name, GstState};
