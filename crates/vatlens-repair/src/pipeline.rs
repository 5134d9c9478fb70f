use serde_json::{json, Value};
use vatlens_record::to_canonical_text;

use crate::fence::strip_code_fences;
use crate::literal::parse_literal;
use crate::normalize::normalize_characters;
use crate::region::extract_outer_region;
use crate::schema::validate_schema;

/// Result of a repair pass. The text is always valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    /// Canonical rendering of the repaired value.
    pub text: String,
    /// The repaired value itself.
    pub value: Value,
    /// Ordered log of transformations and parse attempts.
    pub log: Vec<String>,
}

/// Repairs near-JSON `text` into valid JSON.
///
/// Stages run in fixed order, each only when the previous ones have not
/// produced a value: fence stripping and region extraction rewrite the
/// text, then a strict JSON parse, a Python-style literal parse, and a
/// strict parse after character normalization each get one attempt. When
/// everything fails the original text is preserved as `{"raw": <text>}`,
/// so repair never fails and downstream consumers always receive JSON.
///
/// With a `schema`, the parsed value is additionally checked against the
/// supported JSON Schema subset; findings land in the log and never change
/// the value.
///
/// # Example
///
/// ```rust
/// use vatlens_repair::repair;
///
/// let outcome = repair("Sure! {'TotalAmount': '13,201'}", None);
/// assert_eq!(outcome.value["TotalAmount"], "13,201");
/// assert!(outcome.log.contains(&"parsed as Python-style literal".to_string()));
/// ```
pub fn repair(text: &str, schema: Option<&Value>) -> RepairOutcome {
    let mut log = Vec::new();
    let mut current = text.trim().to_string();

    if let Some(stripped) = strip_code_fences(&current) {
        current = stripped;
        log.push("removed code fences".to_string());
    }

    let region = extract_outer_region(&current).map(str::to_string);
    if let Some(region) = region {
        if region != current {
            log.push("extracted outer JSON-like region".to_string());
            current = region;
        }
    }

    match serde_json::from_str::<Value>(&current) {
        Ok(value) => {
            log.push("parsed as strict JSON".to_string());
            return finish(value, schema, log);
        }
        Err(err) => log.push(format!("strict JSON parse failed: {err}")),
    }

    match parse_literal(&current) {
        Ok(value) => {
            log.push("parsed as Python-style literal".to_string());
            return finish(value, schema, log);
        }
        Err(err) => log.push(format!("literal parse failed: {err}")),
    }

    let (normalized, passes) = normalize_characters(&current);
    log.extend(passes);

    match serde_json::from_str::<Value>(&normalized) {
        Ok(value) => {
            log.push("parsed as strict JSON after character repair".to_string());
            return finish(value, schema, log);
        }
        Err(err) => log.push(format!("final JSON parse failed: {err}")),
    }

    log.push("all repair stages exhausted; wrapping raw text".to_string());
    if schema.is_some() {
        log.push("schema validation skipped for raw fallback".to_string());
    }
    let value = json!({ "raw": text });
    RepairOutcome {
        text: to_canonical_text(&value),
        value,
        log,
    }
}

fn finish(value: Value, schema: Option<&Value>, mut log: Vec<String>) -> RepairOutcome {
    if let Some(schema) = schema {
        let violations = validate_schema(&value, schema);
        if violations.is_empty() {
            log.push("validated against schema".to_string());
        } else {
            for violation in violations {
                log.push(format!("schema violation: {violation}"));
            }
        }
    }
    RepairOutcome {
        text: to_canonical_text(&value),
        value,
        log,
    }
}
