use serde_json::Value;
use vatlens_record::{scalar_text, KeyMap, DEFAULT_FIELD_ORDER};

use crate::canonical::build_record;
use crate::errors::CheckError;
use crate::normalize::{normalize_amount, normalize_field};
use crate::policy::RequiredFieldPolicy;
use crate::report::ComplianceReport;
use crate::rules;

/// Fields with a normalizer, in report order.
const NORMALIZED_FIELDS: [&str; 6] = [
    "InvoiceYear",
    "InvoiceMonth",
    "InvoiceDay",
    "SalesTotalAmount",
    "SalesTax",
    "TotalAmount",
];

/// Name of the cross-field amount identity.
const AMOUNT_RULE: &str = "TotalAmount_equals_SalesTotal_plus_SalesTax";

/// Input accepted by [`check`].
#[derive(Debug, Clone, Copy)]
pub enum CheckInput<'a> {
    /// Raw text; the span from the first `{` to the last `}` is parsed.
    Text(&'a str),
    /// An already-parsed value; must be a JSON object.
    Value(&'a Value),
}

/// Options controlling report contents.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Report every known field instead of only the required ones.
    pub include_all_fields: bool,
    /// Add `@normalized:` entries for date and amount fields.
    pub include_normalized: bool,
    /// Also build the canonical `gt_parse` record.
    pub with_record: bool,
    /// Class to assume when the document does not declare one.
    pub class_hint: Option<String>,
}

/// Outcome of a compliance check.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked {
    /// The ordered compliance report.
    pub report: ComplianceReport,
    /// Canonical record, when requested via [`CheckOptions::with_record`].
    pub record: Option<Value>,
}

/// Checks one extraction against the field rules and `policy`.
///
/// The document's own `doc_class` picks the required-field set; the
/// options' hint applies only when the document declares none. A
/// `gt_parse` wrapper, if present, is looked through first, and
/// `header`/`body`/`tail` sections fold into one flat namespace.
///
/// Fails only when the input cannot be resolved to a JSON object;
/// a resolved object always yields a report.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vatlens_check::{check, CheckInput, CheckOptions, RequiredFieldPolicy};
///
/// let doc = json!({"doc_class": "other", "TotalAmount": "105"});
/// let checked = check(
///     CheckInput::Value(&doc),
///     &RequiredFieldPolicy::new(),
///     &CheckOptions::default(),
/// )?;
/// assert_eq!(checked.report.verdict("TotalAmount"), Some(true));
/// assert_eq!(checked.report.verdict("InvoiceNumber"), Some(false));
/// # Ok::<(), vatlens_check::CheckError>(())
/// ```
pub fn check(
    input: CheckInput<'_>,
    policy: &RequiredFieldPolicy,
    options: &CheckOptions,
) -> Result<Checked, CheckError> {
    let owned;
    let value = match input {
        CheckInput::Text(text) => {
            owned = parse_object_span(text)?;
            &owned
        }
        CheckInput::Value(value) => value,
    };
    let root = match value.as_object() {
        Some(root) => root,
        None => return Err(CheckError::UnsupportedInput(json_type(value))),
    };
    let root = match root.get("gt_parse").and_then(Value::as_object) {
        Some(inner) => inner,
        None => root,
    };
    let keys = KeyMap::flattened(root);

    let class_label = keys
        .get_text("doc_class")
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .or_else(|| options.class_hint.clone());

    let required = policy.required_for(class_label.as_deref());

    let mut report = ComplianceReport::new();
    for field in report_fields(&keys, &required, options.include_all_fields) {
        let is_required = required
            .iter()
            .any(|name| name.eq_ignore_ascii_case(&field));
        report.set_verdict(&field, field_verdict(&keys, &field, is_required));
    }

    amount_rule(&keys, &mut report);

    if options.include_normalized {
        for field in NORMALIZED_FIELDS {
            if let Some(text) = keys.get_text(field) {
                if let Some(normalized) = normalize_field(field, &text) {
                    report.set_normalized(field, &normalized);
                }
            }
        }
    }

    if let Some(label) = &class_label {
        report.set_info("doc_class", label);
    }

    let record = if options.with_record {
        Some(build_record(&keys, class_label.as_deref()))
    } else {
        None
    };

    Ok(Checked { report, record })
}

/// Locates and parses the `{...}` span of raw text.
fn parse_object_span(text: &str) -> Result<Value, CheckError> {
    let span = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &text[start..=end],
        _ => return Err(CheckError::NoJsonFound),
    };
    Ok(serde_json::from_str(span)?)
}

/// Fields the report covers, in report order.
///
/// Filtered reports carry only the required set. Full reports start from
/// the canonical field list, then append `doc_class` and `rationale`, any
/// extra required fields, and finally unknown document keys in document
/// order under their original spelling.
fn report_fields(keys: &KeyMap<'_>, required: &[&str], include_all: bool) -> Vec<String> {
    if !include_all {
        return required.iter().map(|field| field.to_string()).collect();
    }
    let mut fields: Vec<String> = DEFAULT_FIELD_ORDER
        .iter()
        .map(|field| field.to_string())
        .collect();
    fields.push("doc_class".to_string());
    fields.push("rationale".to_string());
    for field in required {
        if !contains_folded(&fields, field) {
            fields.push(field.to_string());
        }
    }
    for (original, _) in keys.iter() {
        if !contains_folded(&fields, original) {
            fields.push(original.to_string());
        }
    }
    fields
}

fn contains_folded(fields: &[String], name: &str) -> bool {
    let folded = name.to_lowercase();
    fields.iter().any(|field| field.to_lowercase() == folded)
}

fn field_verdict(keys: &KeyMap<'_>, field: &str, required: bool) -> bool {
    match keys.get(field) {
        None | Some(Value::Null) => !required,
        Some(value) => match scalar_text(value) {
            // Blank text never satisfies a required field, with or
            // without a format rule.
            Some(text) if required && text.trim().is_empty() => false,
            Some(text) => rules::field_passes(field, &text),
            // Arrays and objects can neither satisfy a rule nor stand in
            // for a required value.
            None => !required && !rules::has_rule(field),
        },
    }
}

/// Records the amount identity when all three amounts are normalizable.
fn amount_rule(keys: &KeyMap<'_>, report: &mut ComplianceReport) {
    let amounts = ["SalesTotalAmount", "SalesTax", "TotalAmount"].map(|field| {
        keys.get_text(field)
            .and_then(|text| normalize_amount(&text))
            .and_then(|plain| plain.parse::<u128>().ok())
    });
    if let [Some(sales_total), Some(sales_tax), Some(total)] = amounts {
        let pass = sales_total
            .checked_add(sales_tax)
            .map(|sum| sum == total)
            .unwrap_or(false);
        report.set_rule(AMOUNT_RULE, pass);
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
