use serde_json::Value;

/// Renders a JSON value in the stable textual form used across the
/// pipeline: two-space indentation, object keys in insertion order, and
/// non-ASCII characters written as themselves rather than `\u` escapes.
///
/// Rendering the same value always yields the same text, so repaired
/// output and canonical records can be compared byte-for-byte.
pub fn to_canonical_text(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
