use regex::Regex;
use serde_json::Value;

/// Validates `value` against a JSON Schema subset, returning one message
/// per violation.
///
/// Supported keywords: `type`, `properties`, `required`,
/// `additionalProperties`, `pattern`, `enum`, and `const`. Everything else
/// is ignored. Validation is advisory: callers log the findings and keep
/// the value as parsed.
pub fn validate_schema(value: &Value, schema: &Value) -> Vec<String> {
    let mut violations = Vec::new();
    check_value(value, schema, "root", &mut violations);
    violations
}

fn check_value(value: &Value, schema: &Value, path: &str, violations: &mut Vec<String>) {
    let schema_obj = match schema.as_object() {
        Some(obj) => obj,
        None => return,
    };

    if let Some(expected) = schema_obj.get("type").and_then(Value::as_str) {
        if !type_matches(value, expected) {
            violations.push(format!(
                "{path}: expected type {expected}, found {}",
                type_name(value)
            ));
        }
    }

    if let Some(expected) = schema_obj.get("const") {
        if value != expected {
            violations.push(format!("{path}: value does not equal const {expected}"));
        }
    }

    if let Some(choices) = schema_obj.get("enum").and_then(Value::as_array) {
        if !choices.contains(value) {
            violations.push(format!("{path}: value is not one of the enum choices"));
        }
    }

    if let (Some(pattern), Some(s)) = (
        schema_obj.get("pattern").and_then(Value::as_str),
        value.as_str(),
    ) {
        match Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(s) {
                    violations.push(format!("{path}: '{s}' does not match pattern {pattern}"));
                }
            }
            Err(_) => violations.push(format!("{path}: unsupported pattern {pattern}")),
        }
    }

    if let Some(object) = value.as_object() {
        if let Some(required) = schema_obj.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                if !object.contains_key(name) {
                    violations.push(format!("{path}: missing required property {name}"));
                }
            }
        }

        let properties = schema_obj.get("properties").and_then(Value::as_object);
        if let Some(properties) = properties {
            for (name, child_schema) in properties {
                if let Some(child) = object.get(name) {
                    let child_path = format!("{path}.{name}");
                    check_value(child, child_schema, &child_path, violations);
                }
            }
        }

        if schema_obj.get("additionalProperties").and_then(Value::as_bool) == Some(false) {
            for name in object.keys() {
                let known = properties.map_or(false, |p| p.contains_key(name));
                if !known {
                    violations.push(format!("{path}: unexpected property {name}"));
                }
            }
        }
    }
}

fn type_matches(value: &Value, expected: &str) -> bool {
    match expected {
        "object" => value.is_object(),
        "array" => value.is_array(),
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.as_i64().is_some() || value.as_u64().is_some(),
        "boolean" => value.is_boolean(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
