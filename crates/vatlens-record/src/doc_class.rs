use serde::{Deserialize, Serialize};
use std::fmt;

/// Document classes the extraction pipeline understands.
///
/// Class labels arrive as free text in the `doc_class` field of model
/// output; [`DocClass::from_label`] maps them onto this taxonomy. Labels
/// outside the taxonomy fold into [`DocClass::Other`], which downstream
/// consumers treat like any class without a dedicated layout or policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocClass {
    /// Duplicate uniform invoice issued between businesses.
    BusinessInvoice,
    /// Customs duty or import tax payment notice.
    CustomsTaxPayment,
    /// Electronic uniform invoice (printed e-invoice slip).
    EInvoice,
    /// Water utility payment order.
    PlumbPaymentOrder,
    /// Telecom payment order.
    TelePaymentOrder,
    /// Traditional handwritten or pre-printed invoice.
    TraditionInvoice,
    /// Triplicate uniform invoice.
    TripleInvoice,
    /// Triplicate receipt (cash register copy).
    TripleReceipt,
    /// Any document outside the known taxonomy.
    Other,
}

impl DocClass {
    /// Every class in the taxonomy, in canonical order.
    pub const ALL: [DocClass; 9] = [
        DocClass::BusinessInvoice,
        DocClass::CustomsTaxPayment,
        DocClass::EInvoice,
        DocClass::PlumbPaymentOrder,
        DocClass::TelePaymentOrder,
        DocClass::TraditionInvoice,
        DocClass::TripleInvoice,
        DocClass::TripleReceipt,
        DocClass::Other,
    ];

    /// Maps a raw class label onto the taxonomy.
    ///
    /// Matching ignores surrounding whitespace and ASCII case; anything
    /// unrecognized becomes [`DocClass::Other`].
    pub fn from_label(label: &str) -> DocClass {
        match label.trim().to_ascii_lowercase().as_str() {
            "business_invoice" => DocClass::BusinessInvoice,
            "customs_tax_payment" => DocClass::CustomsTaxPayment,
            "e_invoice" => DocClass::EInvoice,
            "plumb_payment_order" => DocClass::PlumbPaymentOrder,
            "tele_payment_order" => DocClass::TelePaymentOrder,
            "tradition_invoice" => DocClass::TraditionInvoice,
            "triple_invoice" => DocClass::TripleInvoice,
            "triple_receipt" => DocClass::TripleReceipt,
            _ => DocClass::Other,
        }
    }

    /// Canonical snake_case label for this class.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocClass::BusinessInvoice => "business_invoice",
            DocClass::CustomsTaxPayment => "customs_tax_payment",
            DocClass::EInvoice => "e_invoice",
            DocClass::PlumbPaymentOrder => "plumb_payment_order",
            DocClass::TelePaymentOrder => "tele_payment_order",
            DocClass::TraditionInvoice => "tradition_invoice",
            DocClass::TripleInvoice => "triple_invoice",
            DocClass::TripleReceipt => "triple_receipt",
            DocClass::Other => "other",
        }
    }
}

impl fmt::Display for DocClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
