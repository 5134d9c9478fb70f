//! Batch command implementation.

use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use vatlens_check::{build_record, check, CheckInput, CheckOptions, RequiredFieldPolicy};
use vatlens_record::{record_fingerprint, KeyMap};
use vatlens_repair::repair;

struct DocOutcome {
    name: String,
    fields_matched: usize,
    fields_total: usize,
    exact: bool,
    check_passed: bool,
    missing: bool,
}

pub fn run(
    pred: String,
    labels: String,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut label_files: Vec<PathBuf> = std::fs::read_dir(&labels)
        .map_err(|e| format!("Failed to read labels directory {}: {}", labels, e))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    label_files.sort();

    if label_files.is_empty() {
        return Err(format!("No .json label files in {}", labels).into());
    }

    let policy = RequiredFieldPolicy::new();
    let options = CheckOptions::default();
    let empty = Map::new();

    let mut outcomes = Vec::new();
    let mut mismatches: Map<String, Value> = Map::new();

    for label_path in &label_files {
        let name = label_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("?")
            .to_string();

        let label_text = std::fs::read_to_string(label_path)
            .map_err(|e| format!("Failed to read label {}: {}", label_path.display(), e))?;
        let label_value: Value = serde_json::from_str(&label_text)
            .map_err(|e| format!("Invalid label JSON in {}: {}", label_path.display(), e))?;

        let pred_path = match find_prediction(&pred, &name) {
            Some(path) => path,
            None => {
                outcomes.push(DocOutcome {
                    name,
                    fields_matched: 0,
                    fields_total: 0,
                    exact: false,
                    check_passed: false,
                    missing: true,
                });
                continue;
            }
        };

        let pred_text = std::fs::read_to_string(&pred_path)
            .map_err(|e| format!("Failed to read prediction {}: {}", pred_path.display(), e))?;
        let repaired = repair(&pred_text, None);

        // Both records take the label's document class so their field layouts line up.
        let label_root = gt_root(&label_value).unwrap_or(&empty);
        let pred_root = gt_root(&repaired.value).unwrap_or(&empty);
        let label_keys = KeyMap::flattened(label_root);
        let pred_keys = KeyMap::flattened(pred_root);
        let class = label_keys
            .get_text("doc_class")
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());
        let label_record = build_record(&label_keys, class.as_deref());
        let pred_record = build_record(&pred_keys, class.as_deref());

        let (fields_matched, fields_total) =
            diff_records(&label_record, &pred_record, &mut mismatches);
        let exact = record_fingerprint(&label_record) == record_fingerprint(&pred_record);

        let check_passed = match check(CheckInput::Value(&repaired.value), &policy, &options) {
            Ok(checked) => checked.report.all_pass(),
            Err(e) => {
                if !json_output {
                    eprintln!("Check failed for {}: {}", name, e);
                }
                false
            }
        };

        outcomes.push(DocOutcome {
            name,
            fields_matched,
            fields_total,
            exact,
            check_passed,
            missing: false,
        });
    }

    let documents = outcomes.len();
    let exact_matches = outcomes.iter().filter(|doc| doc.exact).count();
    let checks_passed = outcomes.iter().filter(|doc| doc.check_passed).count();
    let missing_predictions = outcomes.iter().filter(|doc| doc.missing).count();
    let generated_at = format!("{}Z", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S"));

    if json_output {
        let documents_json: Vec<_> = outcomes
            .iter()
            .map(|doc| {
                if doc.missing {
                    json!({
                        "document": doc.name,
                        "status": "missing prediction"
                    })
                } else {
                    json!({
                        "document": doc.name,
                        "fields_matched": doc.fields_matched,
                        "fields_total": doc.fields_total,
                        "exact": doc.exact,
                        "check_passed": doc.check_passed
                    })
                }
            })
            .collect();
        let report = json!({
            "generated_at": generated_at,
            "documents": documents_json,
            "field_mismatches": Value::Object(mismatches),
            "summary": {
                "total": documents,
                "exact_matches": exact_matches,
                "checks_passed": checks_passed,
                "missing_predictions": missing_predictions
            }
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{:<32} {:<12} {:<7} {}", "DOCUMENT", "FIELDS", "EXACT", "CHECK");
        println!("{}", "-".repeat(60));
        for doc in &outcomes {
            if doc.missing {
                println!("{:<32} missing prediction", truncate(&doc.name, 32));
                continue;
            }
            println!(
                "{:<32} {:<12} {:<7} {}",
                truncate(&doc.name, 32),
                format!("{}/{}", doc.fields_matched, doc.fields_total),
                if doc.exact { "yes" } else { "no" },
                if doc.check_passed { "pass" } else { "FAIL" }
            );
        }
        println!();
        println!("{:<32} {}", "FIELD", "MISMATCHES");
        println!("{}", "-".repeat(44));
        for (field, count) in &mismatches {
            println!("{:<32} {}", truncate(field, 32), count);
        }
        println!();
        println!("Documents evaluated: {}", documents);
        println!("Exact matches: {}/{}", exact_matches, documents);
        println!("Checks passed: {}/{}", checks_passed, documents);
        if missing_predictions > 0 {
            println!("Missing predictions: {}", missing_predictions);
        }
        println!("Generated at: {}", generated_at);
    }

    Ok(())
}

/// Finds the prediction file matching a label stem, trying `.txt` then `.json`.
fn find_prediction(pred_dir: &str, name: &str) -> Option<PathBuf> {
    for ext in ["txt", "json"] {
        let candidate = Path::new(pred_dir).join(format!("{}.{}", name, ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Resolves the object the field values live in, looking through a
/// `gt_parse` wrapper when one is present.
fn gt_root(value: &Value) -> Option<&Map<String, Value>> {
    let root = value.as_object()?;
    match root.get("gt_parse").and_then(Value::as_object) {
        Some(inner) => Some(inner),
        None => Some(root),
    }
}

/// Compares two canonical records field by field, counting mismatches
/// into the shared per-field tally.
fn diff_records(
    label: &Value,
    pred: &Value,
    mismatches: &mut Map<String, Value>,
) -> (usize, usize) {
    let empty = Map::new();
    let label_fields = label
        .get("gt_parse")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let pred_fields = pred
        .get("gt_parse")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let mut matched = 0;
    for (field, expected) in label_fields {
        let counter = mismatches.entry(field.clone()).or_insert(json!(0));
        if pred_fields.get(field).unwrap_or(&Value::Null) == expected {
            matched += 1;
        } else if let Some(count) = counter.as_u64() {
            *counter = json!(count + 1);
        }
    }
    (matched, label_fields.len())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
