pub mod document_aggregator;
pub mod document_service;
pub mod draft_reducer;

pub use document_aggregator::DocumentAggregator;
pub use document_service::DocumentService;
pub use draft_reducer::{new_draft, reduce};
