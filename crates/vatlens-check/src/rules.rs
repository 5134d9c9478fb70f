use crate::normalize::normalize_amount;
use regex::Regex;

/// Folded names of every field with a format rule.
const RULE_FIELDS: &[&str] = &[
    "prefixtwoletters",
    "invoicenumber",
    "buyertaxidnumber",
    "companytaxidnumber",
    "invoiceyear",
    "invoicemonth",
    "invoiceday",
    "buyername",
    "companyname",
    "companyaddress",
    "abstract",
    "phonenumber",
    "salestotalamount",
    "salestax",
    "totalamount",
    "doc_class",
    "rationale",
];

/// Whether a format rule exists for `field`.
///
/// Matching is case-insensitive, like field resolution everywhere else.
pub fn has_rule(field: &str) -> bool {
    RULE_FIELDS.contains(&field.to_lowercase().as_str())
}

/// Returns true when `value` satisfies the format rule for `field`.
///
/// Fields without a rule pass vacuously. The rules check shape only:
/// `InvoiceDay` accepts any `1..=31`, with no calendar awareness.
pub fn field_passes(field: &str, value: &str) -> bool {
    match field.to_lowercase().as_str() {
        "prefixtwoletters" => matches_pattern(r"^[A-Z]{2}$", value),
        "invoicenumber" | "buyertaxidnumber" | "companytaxidnumber" => {
            matches_pattern(r"^\d{8}$", value)
        }
        "invoiceyear" => matches_pattern(r"^\d{2,4}$", value),
        "invoicemonth" => matches_pattern(r"^(0?[1-9]|1[0-2])$", value),
        "invoiceday" => matches_pattern(r"^(0?[1-9]|[12]\d|3[01])$", value),
        "phonenumber" => matches_pattern(r"^[0-9()+\- ]{7,}$", value),
        "buyername" | "companyname" | "companyaddress" | "abstract" | "doc_class"
        | "rationale" => !value.trim().is_empty(),
        "salestotalamount" | "salestax" | "totalamount" => normalize_amount(value).is_some(),
        _ => true,
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).expect("invalid regex").is_match(value)
}
