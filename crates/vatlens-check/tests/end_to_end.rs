//! Repair-then-check flow over realistic model output.

use serde_json::json;
use vatlens_check::{check, CheckInput, CheckOptions, RequiredFieldPolicy};
use vatlens_record::record_fingerprint;
use vatlens_repair::repair;

const MODEL_OUTPUT: &str = "```json\n{'doc_class': 'triple_receipt', 'header': {'PrefixTwoLetters': 'RH', 'InvoiceNumber': '61667648', 'CompanyTaxIDNumber': '70759028', 'InvoiceYear': '109', 'InvoiceMonth': '09', 'InvoiceDay': '25'}, 'tail': {'SalesTotalAmount': '12,572', 'SalesTax': '629', 'TotalAmount': '13,201'}}\n```";

#[test]
fn fenced_python_receipt_repairs_and_passes_checks() {
    let outcome = repair(MODEL_OUTPUT, None);
    assert_eq!(outcome.log[0], "removed code fences");
    assert!(outcome
        .log
        .contains(&"parsed as Python-style literal".to_string()));

    let options = CheckOptions {
        include_normalized: true,
        with_record: true,
        ..CheckOptions::default()
    };
    let checked = check(
        CheckInput::Value(&outcome.value),
        &RequiredFieldPolicy::new(),
        &options,
    )
    .unwrap();

    assert!(checked.report.all_pass());
    assert_eq!(
        checked.report.rule("TotalAmount_equals_SalesTotal_plus_SalesTax"),
        Some(true)
    );
    assert_eq!(checked.report.normalized("InvoiceYear"), Some("2020"));
    assert_eq!(checked.report.normalized("SalesTotalAmount"), Some("12572"));
    assert_eq!(checked.report.info("doc_class"), Some("triple_receipt"));

    let record = checked.record.unwrap();
    let fields = record["gt_parse"].as_object().unwrap();
    assert_eq!(fields["InvoiceYear"], "2020");
    assert_eq!(fields["InvoiceMonth"], "9");
    assert_eq!(fields["TotalAmount"], "13201");
    assert_eq!(fields["BuyerName"], json!(null));
}

#[test]
fn unclassified_fenced_payload_passes_the_default_required_set() {
    let text = "```json\n{'PrefixTwoLetters':'RH','InvoiceNumber':'15255935',\
                'SalesTotalAmount':'12,572','SalesTax':'629','TotalAmount':'13,201',}```";
    let outcome = repair(text, None);
    assert_eq!(outcome.log[0], "removed code fences");

    let checked = check(
        CheckInput::Value(&outcome.value),
        &RequiredFieldPolicy::new(),
        &CheckOptions::default(),
    )
    .unwrap();

    assert_eq!(checked.report.verdict("PrefixTwoLetters"), Some(true));
    assert_eq!(checked.report.verdict("InvoiceNumber"), Some(true));
    assert_eq!(checked.report.verdict("SalesTotalAmount"), Some(true));
    assert_eq!(checked.report.verdict("SalesTax"), Some(true));
    assert_eq!(checked.report.verdict("TotalAmount"), Some(true));
    assert_eq!(
        checked.report.rule("TotalAmount_equals_SalesTotal_plus_SalesTax"),
        Some(true)
    );
    // No class declared, so the default set applies and no class is reported.
    assert_eq!(checked.report.info("doc_class"), None);
    assert!(checked.report.all_pass());
}

#[test]
fn repaired_and_clean_extractions_fingerprint_identically() {
    let clean = json!({
        "doc_class": "triple_receipt",
        "PrefixTwoLetters": "RH",
        "InvoiceNumber": "61667648",
        "CompanyTaxIDNumber": "70759028",
        "InvoiceYear": "2020",
        "InvoiceMonth": "9",
        "InvoiceDay": "25",
        "SalesTotalAmount": "12572",
        "SalesTax": "629",
        "TotalAmount": "13201"
    });
    let options = CheckOptions {
        with_record: true,
        ..CheckOptions::default()
    };
    let policy = RequiredFieldPolicy::new();

    let from_model = check(
        CheckInput::Value(&repair(MODEL_OUTPUT, None).value),
        &policy,
        &options,
    )
    .unwrap();
    let from_clean = check(CheckInput::Value(&clean), &policy, &options).unwrap();

    let a = from_model.record.unwrap();
    let b = from_clean.record.unwrap();
    assert_eq!(record_fingerprint(&a), record_fingerprint(&b));
}

#[test]
fn raw_fallback_still_checks_without_panicking() {
    let outcome = repair("nothing extractable", None);
    let checked = check(
        CheckInput::Value(&outcome.value),
        &RequiredFieldPolicy::new(),
        &CheckOptions::default(),
    )
    .unwrap();
    assert!(!checked.report.all_pass());
    assert_eq!(checked.report.verdict("TotalAmount"), Some(false));
}
