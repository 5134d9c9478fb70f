//! Canonical field layouts.
//!
//! A canonical record always carries the same fields in the same order, so
//! two records can be diffed positionally and their renderings compared as
//! plain text. Receipts are laid out seller-first, matching the printed
//! cash-register slip; every other class uses the invoice layout.

use crate::doc_class::DocClass;

/// Field order for [`DocClass::TripleReceipt`] records.
pub const RECEIPT_FIELD_ORDER: &[&str] = &[
    "PrefixTwoLetters",
    "InvoiceNumber",
    "CompanyName",
    "PhoneNumber",
    "CompanyTaxIDNumber",
    "CompanyAddress",
    "InvoiceYear",
    "InvoiceMonth",
    "InvoiceDay",
    "BuyerTaxIDNumber",
    "BuyerName",
    "Abstract",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
];

/// Field order for every class other than [`DocClass::TripleReceipt`].
pub const DEFAULT_FIELD_ORDER: &[&str] = &[
    "PrefixTwoLetters",
    "InvoiceNumber",
    "BuyerName",
    "BuyerTaxIDNumber",
    "InvoiceYear",
    "InvoiceMonth",
    "InvoiceDay",
    "Abstract",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
    "CompanyName",
    "CompanyTaxIDNumber",
    "PhoneNumber",
    "CompanyAddress",
];

/// Returns the canonical field order for `class`.
pub fn field_order(class: DocClass) -> &'static [&'static str] {
    match class {
        DocClass::TripleReceipt => RECEIPT_FIELD_ORDER,
        _ => DEFAULT_FIELD_ORDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_share_the_same_fields() {
        let mut receipt: Vec<&str> = RECEIPT_FIELD_ORDER.to_vec();
        let mut default: Vec<&str> = DEFAULT_FIELD_ORDER.to_vec();
        receipt.sort_unstable();
        default.sort_unstable();
        assert_eq!(receipt, default);
    }

    #[test]
    fn test_order_selection() {
        assert_eq!(field_order(DocClass::TripleReceipt), RECEIPT_FIELD_ORDER);
        assert_eq!(field_order(DocClass::TripleInvoice), DEFAULT_FIELD_ORDER);
        assert_eq!(field_order(DocClass::Other), DEFAULT_FIELD_ORDER);
    }

    #[test]
    fn test_no_duplicate_fields() {
        let mut seen = std::collections::HashSet::new();
        for field in DEFAULT_FIELD_ORDER {
            assert!(seen.insert(field), "duplicate field {field}");
        }
    }
}
