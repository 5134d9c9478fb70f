//! Field value normalization.
//!
//! Taiwanese invoices date themselves in the Minguo calendar and print
//! amounts with thousands separators and decorative cents. These helpers
//! convert such values into plain comparable strings. Each returns `None`
//! when the input is not in a shape it recognizes; callers fall back to
//! the raw value.

use regex::Regex;

/// Normalizes an amount string to a plain integer string.
///
/// Accepts either comma-grouped digits (`1,234,567`) or plain digits
/// without leading zeros, each optionally carrying a `.00` suffix.
/// Grouping commas and the `.00` are stripped. Leading-zero strings such
/// as `000123` are not amounts and yield `None`.
pub fn normalize_amount(value: &str) -> Option<String> {
    let v = value.trim();
    let grouped = Regex::new(r"^\d{1,3}(,\d{3})*(\.00)?$").expect("invalid regex");
    let plain = Regex::new(r"^(0|[1-9]\d*)(\.00)?$").expect("invalid regex");
    if !grouped.is_match(v) && !plain.is_match(v) {
        return None;
    }
    let v = v.strip_suffix(".00").unwrap_or(v);
    Some(v.replace(',', ""))
}

/// Converts a Minguo or Gregorian year string to a Gregorian year string.
///
/// Two- and three-digit years are taken as Minguo and shifted by 1911
/// (`"109"` becomes `"2020"`); four-digit years pass through unchanged.
/// Anything else yields `None`.
pub fn normalize_year(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() || !v.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match v.len() {
        2 | 3 => v.parse::<u32>().ok().map(|y| (y + 1911).to_string()),
        4 => Some(v.to_string()),
        _ => None,
    }
}

/// Dispatches to the normalizer for `field`, if it has one.
///
/// `InvoiceYear` goes through [`normalize_year`], `InvoiceMonth` and
/// `InvoiceDay` through [`normalize_month_day`], and the three amount
/// fields through [`normalize_amount`]. Field matching is
/// case-insensitive; fields without a normalizer yield `None`.
pub fn normalize_field(field: &str, value: &str) -> Option<String> {
    match field.to_lowercase().as_str() {
        "invoiceyear" => normalize_year(value),
        "invoicemonth" | "invoiceday" => normalize_month_day(value),
        "salestotalamount" | "salestax" | "totalamount" => normalize_amount(value),
        _ => None,
    }
}

/// Strips a single leading zero from a purely numeric month or day.
///
/// `"09"` becomes `"9"`; already-plain values pass through unchanged.
/// Non-numeric input yields `None`.
pub fn normalize_month_day(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() || !v.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match v.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => Some(rest.to_string()),
        _ => Some(v.to_string()),
    }
}
