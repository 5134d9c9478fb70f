//! Output formatting utilities.

use serde_json::Value;

/// Formats a value as pretty-printed JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats one compliance report entry as a table row.
pub fn format_report_row(key: &str, value: &Value) -> String {
    let rendered = match value {
        Value::Bool(true) => "pass".to_string(),
        Value::Bool(false) => "FAIL".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    format!("{:<52} {}", truncate(key, 52), rendered)
}

/// Prints the report table header.
#[allow(clippy::print_literal)]
pub fn print_report_header() {
    println!("{:<52} {}", "FIELD", "RESULT");
    println!("{}", "-".repeat(60));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
