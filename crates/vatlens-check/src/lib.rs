//! Field compliance checking for extracted invoice data.
//!
//! Given a parsed (or parseable) extraction object, [`check`] resolves
//! fields case-insensitively, applies per-field format rules and the
//! cross-field amount identity, and produces an ordered
//! [`ComplianceReport`]. Field normalization converts Minguo calendar
//! years, zero-padded months and days, and formatted amounts into plain
//! comparable values; the optional canonical record rebuilds the
//! extraction as a `gt_parse` object with a fixed per-class field order.
//!
//! Unlike repair, checking is allowed to fail: input that contains no
//! JSON object at all is an error, not a report.
//!
#![deny(missing_docs)]

/// Canonical `gt_parse` record construction.
pub mod canonical;
/// The compliance checker itself.
pub mod checker;
/// Checker errors.
pub mod errors;
/// Field value normalization.
pub mod normalize;
/// Required-field policies per document class.
pub mod policy;
/// The ordered compliance report.
pub mod report;
/// Per-field format rules.
pub mod rules;

pub use canonical::build_record;
pub use checker::{check, CheckInput, CheckOptions, Checked};
pub use errors::CheckError;
pub use normalize::{normalize_amount, normalize_field, normalize_month_day, normalize_year};
pub use policy::RequiredFieldPolicy;
pub use report::ComplianceReport;
