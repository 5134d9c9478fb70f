use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key prefix for cross-field rule verdicts.
pub const RULE_PREFIX: &str = "@rule:";
/// Key prefix for normalized-value entries.
pub const NORMALIZED_PREFIX: &str = "@normalized:";
/// Key prefix for informational entries.
pub const INFO_PREFIX: &str = "@info:";

/// Ordered field-to-verdict report produced by a compliance check.
///
/// Keys are either plain field names mapping to boolean verdicts, or
/// synthetic entries under the `@rule:`, `@normalized:`, and `@info:`
/// prefixes. Entry order is insertion order and is part of the report's
/// contract: serializing the same check twice yields identical text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplianceReport {
    entries: Map<String, Value>,
}

impl ComplianceReport {
    pub(crate) fn new() -> Self {
        ComplianceReport {
            entries: Map::new(),
        }
    }

    pub(crate) fn set_verdict(&mut self, field: &str, pass: bool) {
        self.entries.insert(field.to_string(), Value::Bool(pass));
    }

    pub(crate) fn set_rule(&mut self, name: &str, pass: bool) {
        self.entries
            .insert(format!("{RULE_PREFIX}{name}"), Value::Bool(pass));
    }

    pub(crate) fn set_normalized(&mut self, field: &str, value: &str) {
        self.entries.insert(
            format!("{NORMALIZED_PREFIX}{field}"),
            Value::String(value.to_string()),
        );
    }

    pub(crate) fn set_info(&mut self, name: &str, value: &str) {
        self.entries.insert(
            format!("{INFO_PREFIX}{name}"),
            Value::String(value.to_string()),
        );
    }

    /// Verdict for a plain field entry, if present.
    pub fn verdict(&self, field: &str) -> Option<bool> {
        self.entries.get(field).and_then(Value::as_bool)
    }

    /// Verdict for a `@rule:` entry, if present.
    pub fn rule(&self, name: &str) -> Option<bool> {
        self.entries
            .get(&format!("{RULE_PREFIX}{name}"))
            .and_then(Value::as_bool)
    }

    /// Normalized value recorded for `field`, if any.
    pub fn normalized(&self, field: &str) -> Option<&str> {
        self.entries
            .get(&format!("{NORMALIZED_PREFIX}{field}"))
            .and_then(Value::as_str)
    }

    /// Informational value recorded under `name`, if any.
    pub fn info(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&format!("{INFO_PREFIX}{name}"))
            .and_then(Value::as_str)
    }

    /// Whether the report holds an entry under `key` verbatim.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when every boolean entry in the report is `true`.
    ///
    /// Normalized and informational entries do not participate.
    pub fn all_pass(&self) -> bool {
        self.entries
            .values()
            .filter_map(Value::as_bool)
            .all(|pass| pass)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// The report as a JSON object in report order.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}
