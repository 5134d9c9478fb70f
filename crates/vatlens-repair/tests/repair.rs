use serde_json::{json, Value};
use vatlens_repair::repair;

fn fenced(body: &str) -> String {
    format!("```json\n{body}\n```")
}

#[test]
fn clean_json_passes_through_with_parse_only_log() {
    let outcome = repair(r#"{"TotalAmount": "105"}"#, None);
    assert_eq!(outcome.value, json!({"TotalAmount": "105"}));
    assert_eq!(outcome.log, vec!["parsed as strict JSON".to_string()]);
    assert_eq!(outcome.text, "{\n  \"TotalAmount\": \"105\"\n}");
}

#[test]
fn fenced_python_dict_is_repaired() {
    let input = fenced("{'doc_class': 'triple_receipt', 'TotalAmount': '13,201'}");
    let outcome = repair(&input, None);
    assert_eq!(
        outcome.value,
        json!({"doc_class": "triple_receipt", "TotalAmount": "13,201"})
    );
    assert_eq!(outcome.log[0], "removed code fences");
    assert!(outcome
        .log
        .iter()
        .any(|line| line == "parsed as Python-style literal"));
}

#[test]
fn prose_around_object_is_dropped() {
    let input = "Sure! Here is the extraction:\n{\"InvoiceNumber\": \"61667648\"}\nLet me know if you need more.";
    let outcome = repair(input, None);
    assert_eq!(outcome.value, json!({"InvoiceNumber": "61667648"}));
    assert!(outcome
        .log
        .contains(&"extracted outer JSON-like region".to_string()));
}

#[test]
fn curly_quotes_and_trailing_commas_reach_final_parse() {
    let input = "{\u{201C}a\u{201D}: \u{201C}1\u{201D}, \"flag\": True,}";
    let outcome = repair(input, None);
    assert_eq!(outcome.value, json!({"a": "1", "flag": true}));
    assert!(outcome
        .log
        .contains(&"normalized curly quotes".to_string()));
    assert!(outcome
        .log
        .contains(&"converted Python literals to JSON".to_string()));
    assert!(outcome
        .log
        .contains(&"removed trailing commas".to_string()));
    assert!(outcome
        .log
        .contains(&"parsed as strict JSON after character repair".to_string()));
}

#[test]
fn hopeless_text_falls_back_to_raw() {
    let input = "the receipt shows NT$105 paid in cash";
    let outcome = repair(input, None);
    assert_eq!(outcome.value, json!({"raw": input}));
    assert!(outcome
        .log
        .iter()
        .any(|line| line.contains("wrapping raw text")));
}

#[test]
fn empty_input_falls_back_to_raw() {
    let outcome = repair("", None);
    assert_eq!(outcome.value, json!({"raw": ""}));
}

#[test]
fn raw_fallback_preserves_original_text_before_trimming() {
    let input = "  unsalvageable  ";
    let outcome = repair(input, None);
    assert_eq!(outcome.value, json!({"raw": "  unsalvageable  "}));
}

#[test]
fn repair_is_idempotent_on_its_own_output() {
    let first = repair(
        &fenced("{'header': {'PrefixTwoLetters': 'RH'}, 'tail': {'TotalAmount': '13,201'}}"),
        None,
    );
    let second = repair(&first.text, None);
    assert_eq!(second.value, first.value);
    assert_eq!(second.log, vec!["parsed as strict JSON".to_string()]);
    assert_eq!(second.text, first.text);
}

#[test]
fn non_ascii_content_survives_unescaped() {
    let outcome = repair("{'CompanyName': '統一超商', 'CompanyAddress': '台北市'}", None);
    assert!(outcome.text.contains("統一超商"));
    assert!(!outcome.text.contains("\\u"));
}

#[test]
fn schema_violations_are_advisory() {
    let schema = json!({
        "type": "object",
        "required": ["doc_class"],
        "properties": {"doc_class": {"type": "string"}}
    });
    let outcome = repair(r#"{"TotalAmount": "105"}"#, Some(&schema));
    assert_eq!(outcome.value, json!({"TotalAmount": "105"}));
    assert!(outcome
        .log
        .iter()
        .any(|line| line.starts_with("schema violation:")));
}

#[test]
fn conforming_value_logs_schema_success() {
    let schema = json!({
        "type": "object",
        "required": ["doc_class"],
        "properties": {"doc_class": {"type": "string"}}
    });
    let outcome = repair(r#"{"doc_class": "other"}"#, Some(&schema));
    assert!(outcome
        .log
        .contains(&"validated against schema".to_string()));
}

#[test]
fn schema_is_skipped_for_raw_fallback() {
    let schema = json!({"type": "object"});
    let outcome = repair("not json at all", Some(&schema));
    assert_eq!(outcome.value, json!({"raw": "not json at all"}));
    assert!(outcome
        .log
        .contains(&"schema validation skipped for raw fallback".to_string()));
}

#[test]
fn failed_stages_leave_descriptive_log_lines() {
    let outcome = repair("{'a': 'b'}", None);
    assert!(outcome
        .log
        .iter()
        .any(|line| line.starts_with("strict JSON parse failed:")));
    assert_eq!(outcome.value, json!({"a": "b"}));
}

#[test]
fn key_order_of_input_is_preserved() {
    let input = r#"{"z": "1", "a": "2", "m": "3"}"#;
    let outcome = repair(input, None);
    let keys: Vec<&String> = outcome.value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn sectioned_receipt_round_trips_through_literal_parse() {
    let input = fenced(concat!(
        "{'doc_class': 'triple_receipt', ",
        "'header': {'PrefixTwoLetters': 'RH', 'InvoiceNumber': '61667648'}, ",
        "'tail': {'SalesTotalAmount': '12,572', 'SalesTax': '629', 'TotalAmount': '13,201'}}"
    ));
    let outcome = repair(&input, None);
    let expected = json!({
        "doc_class": "triple_receipt",
        "header": {"PrefixTwoLetters": "RH", "InvoiceNumber": "61667648"},
        "tail": {"SalesTotalAmount": "12,572", "SalesTax": "629", "TotalAmount": "13,201"}
    });
    assert_eq!(outcome.value, expected);
    let reparsed: Value = serde_json::from_str(&outcome.text).unwrap();
    assert_eq!(reparsed, expected);
}
