mod document;
mod draft;
mod line_item;

pub use document::{
    CalculateDocumentRequest, DocumentKind, DocumentResponse, DocumentTotals, GstBreakdownRow,
    PlaceOfSupply,
};
pub use draft::{DraftEvent, QuotationDraft};
pub use line_item::{ComputedLineItem, LineItemInput};
