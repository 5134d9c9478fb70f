use serde_json::{Map, Value};
use vatlens_record::{field_order, scalar_text, DocClass, KeyMap};

use crate::normalize::normalize_field;

/// Builds the canonical `gt_parse` record for a resolved document.
///
/// Every field of the class layout appears exactly once, in layout order:
/// the normalized value where a normalizer applies, the raw resolved text
/// otherwise, `null` when the document has no usable value. The result is
/// insensitive to the spelling and sectioning of the source keys, so two
/// extractions of the same document render identically and can be diffed
/// field by field.
pub fn build_record(keys: &KeyMap<'_>, class: Option<&str>) -> Value {
    let doc_class = DocClass::from_label(class.unwrap_or_default());
    let mut fields = Map::new();
    for &field in field_order(doc_class) {
        let entry = match keys.get(field).and_then(scalar_text) {
            Some(text) => Value::String(normalize_field(field, &text).unwrap_or(text)),
            None => Value::Null,
        };
        fields.insert(field.to_string(), entry);
    }
    let mut record = Map::new();
    record.insert("gt_parse".to_string(), Value::Object(fields));
    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vatlens_record::{to_canonical_text, RECEIPT_FIELD_ORDER};

    #[test]
    fn test_record_has_fixed_key_order() {
        let doc = json!({
            "tail": {"TotalAmount": "13,201"},
            "header": {"InvoiceNumber": "61667648", "prefixtwoletters": "RH"}
        });
        let keys = KeyMap::flattened(doc.as_object().unwrap());
        let record = build_record(&keys, Some("triple_receipt"));
        let fields = record["gt_parse"].as_object().unwrap();
        let order: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(order, RECEIPT_FIELD_ORDER.to_vec());
    }

    #[test]
    fn test_record_normalizes_values() {
        let doc = json!({
            "InvoiceYear": "109",
            "InvoiceMonth": "09",
            "TotalAmount": "13,201.00"
        });
        let keys = KeyMap::flattened(doc.as_object().unwrap());
        let record = build_record(&keys, None);
        let fields = &record["gt_parse"];
        assert_eq!(fields["InvoiceYear"], "2020");
        assert_eq!(fields["InvoiceMonth"], "9");
        assert_eq!(fields["TotalAmount"], "13201");
        assert_eq!(fields["BuyerName"], Value::Null);
    }

    #[test]
    fn test_unnormalizable_values_stay_raw() {
        let doc = json!({"TotalAmount": "NT$105", "InvoiceDay": "十五"});
        let keys = KeyMap::flattened(doc.as_object().unwrap());
        let record = build_record(&keys, None);
        assert_eq!(record["gt_parse"]["TotalAmount"], "NT$105");
        assert_eq!(record["gt_parse"]["InvoiceDay"], "十五");
    }

    #[test]
    fn test_non_scalar_values_become_null() {
        let doc = json!({"Abstract": ["a", "b"], "CompanyName": {"zh": "x"}});
        let keys = KeyMap::flattened(doc.as_object().unwrap());
        let record = build_record(&keys, None);
        assert_eq!(record["gt_parse"]["Abstract"], Value::Null);
        assert_eq!(record["gt_parse"]["CompanyName"], Value::Null);
    }

    #[test]
    fn test_same_document_spelled_differently_renders_identically() {
        let flat = json!({
            "doc_class": "triple_receipt",
            "PREFIXTWOLETTERS": "RH",
            "totalamount": "13,201"
        });
        let sectioned = json!({
            "doc_class": "triple_receipt",
            "header": {"PrefixTwoLetters": "RH"},
            "tail": {"TotalAmount": "13201"}
        });
        let flat_keys = KeyMap::flattened(flat.as_object().unwrap());
        let sectioned_keys = KeyMap::flattened(sectioned.as_object().unwrap());
        let a = build_record(&flat_keys, Some("triple_receipt"));
        let b = build_record(&sectioned_keys, Some("triple_receipt"));
        assert_eq!(to_canonical_text(&a), to_canonical_text(&b));
    }
}
