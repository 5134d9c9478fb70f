use std::collections::BTreeMap;

/// Required fields for classes without a dedicated policy.
pub const DEFAULT_REQUIRED: &[&str] = &[
    "PrefixTwoLetters",
    "InvoiceNumber",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
];

/// Required fields for `triple_receipt` documents.
pub const TRIPLE_RECEIPT_REQUIRED: &[&str] = &[
    "PrefixTwoLetters",
    "InvoiceNumber",
    "CompanyTaxIDNumber",
    "InvoiceYear",
    "InvoiceMonth",
    "InvoiceDay",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
];

/// Required fields for `triple_invoice` documents.
pub const TRIPLE_INVOICE_REQUIRED: &[&str] = &[
    "PrefixTwoLetters",
    "InvoiceNumber",
    "BuyerTaxIDNumber",
    "CompanyTaxIDNumber",
    "InvoiceYear",
    "InvoiceMonth",
    "InvoiceDay",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
];

/// Required-field policy resolved per document class.
///
/// Triplicate documents carry the buyer and seller tax registration block,
/// so their built-in sets extend the default. Callers can override the
/// set for any class label, or replace the default used when no class
/// matches.
#[derive(Debug, Clone, Default)]
pub struct RequiredFieldPolicy {
    default_fields: Option<Vec<String>>,
    by_class: BTreeMap<String, Vec<String>>,
}

impl RequiredFieldPolicy {
    /// Policy with only the built-in sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fallback set used when no class-specific set applies.
    pub fn with_default<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the required fields for one class label.
    ///
    /// Labels match with case and surrounding whitespace ignored;
    /// overrides win over the built-in sets for the same label.
    pub fn with_class<I, S>(mut self, class: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_class.insert(
            fold_label(&class.into()),
            fields.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Resolves the required fields for `class`.
    ///
    /// Resolution order: caller override, built-in set, then the default
    /// set. Labels match with case and surrounding whitespace ignored.
    pub fn required_for(&self, class: Option<&str>) -> Vec<&str> {
        if let Some(label) = class {
            let folded = fold_label(label);
            if let Some(fields) = self.by_class.get(&folded) {
                return fields.iter().map(String::as_str).collect();
            }
            match folded.as_str() {
                "triple_receipt" => return TRIPLE_RECEIPT_REQUIRED.to_vec(),
                "triple_invoice" => return TRIPLE_INVOICE_REQUIRED.to_vec(),
                _ => {}
            }
        }
        match &self.default_fields {
            Some(fields) => fields.iter().map(String::as_str).collect(),
            None => DEFAULT_REQUIRED.to_vec(),
        }
    }
}

fn fold_label(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets() {
        let policy = RequiredFieldPolicy::new();
        assert_eq!(policy.required_for(None), DEFAULT_REQUIRED.to_vec());
        assert_eq!(
            policy.required_for(Some("e_invoice")),
            DEFAULT_REQUIRED.to_vec()
        );
        assert_eq!(
            policy.required_for(Some("triple_receipt")),
            TRIPLE_RECEIPT_REQUIRED.to_vec()
        );
        assert_eq!(
            policy.required_for(Some("triple_invoice")),
            TRIPLE_INVOICE_REQUIRED.to_vec()
        );
    }

    #[test]
    fn test_triple_invoice_extends_receipt_set() {
        for field in TRIPLE_RECEIPT_REQUIRED {
            assert!(TRIPLE_INVOICE_REQUIRED.contains(field));
        }
        assert!(TRIPLE_INVOICE_REQUIRED.contains(&"BuyerTaxIDNumber"));
        assert!(!TRIPLE_RECEIPT_REQUIRED.contains(&"BuyerTaxIDNumber"));
    }

    #[test]
    fn test_class_label_folding() {
        let policy = RequiredFieldPolicy::new();
        assert_eq!(
            policy.required_for(Some(" Triple_Receipt ")),
            TRIPLE_RECEIPT_REQUIRED.to_vec()
        );
    }

    #[test]
    fn test_class_override_wins() {
        let policy =
            RequiredFieldPolicy::new().with_class("triple_receipt", ["TotalAmount"]);
        assert_eq!(policy.required_for(Some("triple_receipt")), vec!["TotalAmount"]);
        // Other classes are untouched.
        assert_eq!(
            policy.required_for(Some("triple_invoice")),
            TRIPLE_INVOICE_REQUIRED.to_vec()
        );
    }

    #[test]
    fn test_class_override_label_folding() {
        let policy =
            RequiredFieldPolicy::new().with_class("triple_receipt", ["TotalAmount"]);
        assert_eq!(
            policy.required_for(Some(" Triple_Receipt ")),
            vec!["TotalAmount"]
        );

        let policy = RequiredFieldPolicy::new().with_class("Delivery_Note", ["Currency"]);
        assert_eq!(policy.required_for(Some("delivery_note")), vec!["Currency"]);
    }

    #[test]
    fn test_default_override() {
        let policy = RequiredFieldPolicy::new().with_default(["InvoiceNumber"]);
        assert_eq!(policy.required_for(None), vec!["InvoiceNumber"]);
        assert_eq!(policy.required_for(Some("other")), vec!["InvoiceNumber"]);
        assert_eq!(
            policy.required_for(Some("triple_receipt")),
            TRIPLE_RECEIPT_REQUIRED.to_vec()
        );
    }
}
