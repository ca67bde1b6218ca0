// Documents module: quotation and invoice pricing

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    CalculateDocumentRequest, ComputedLineItem, DocumentKind, DocumentResponse, DocumentTotals,
    DraftEvent, LineItemInput, QuotationDraft,
};
pub use services::{DocumentAggregator, DocumentService};
