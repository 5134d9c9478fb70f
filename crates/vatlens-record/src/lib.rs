//! Record model primitives for Taiwanese VAT invoice extraction.
//!
//! Vision-language models read scanned invoices and receipts and emit one
//! JSON-like object per document. This crate holds the vocabulary shared by
//! every downstream component: the document taxonomy, the canonical field
//! layouts, case-insensitive key resolution over model output, the stable
//! textual rendering used for diffing, and record fingerprints.
//!
#![deny(missing_docs)]

/// Document class taxonomy for the supported invoice and receipt layouts.
pub mod doc_class;
/// Fingerprints for canonical records.
pub mod fingerprint;
/// Case-insensitive key resolution over parsed model output.
pub mod keymap;
/// Canonical field names and per-class field orderings.
pub mod layout;
/// Stable textual rendering shared by repair and diffing.
pub mod text;
/// Validation helpers used by record primitives.
pub mod validation;

pub use doc_class::DocClass;
pub use fingerprint::{record_fingerprint, Fingerprint};
pub use keymap::{scalar_text, KeyMap};
pub use layout::{field_order, DEFAULT_FIELD_ORDER, RECEIPT_FIELD_ORDER};
pub use text::to_canonical_text;
pub use validation::ValidationError;
