//! Check command implementation.

use std::io::{self, Read};
use vatlens_check::{check, CheckInput, CheckOptions, RequiredFieldPolicy};
use vatlens_repair::repair;

use crate::output;

pub fn run(
    input: Option<String>,
    class: Option<String>,
    all: bool,
    normalized: bool,
    record: bool,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    // Repair first so near-JSON model output checks the same as clean JSON.
    let repaired = repair(&text, None);

    let policy = RequiredFieldPolicy::new();
    let options = CheckOptions {
        include_all_fields: all,
        include_normalized: normalized,
        with_record: record,
        class_hint: class,
    };

    let checked = check(CheckInput::Value(&repaired.value), &policy, &options)
        .map_err(|e| format!("Check failed: {}", e))?;

    if record {
        let record_value = checked.record.ok_or("record was not built")?;
        println!("{}", output::format_json(&record_value));
    } else if json_output {
        println!("{}", serde_json::to_string_pretty(&checked.report)?);
    } else {
        output::print_report_header();
        for (key, value) in checked.report.iter() {
            println!("{}", output::format_report_row(key, value));
        }
    }

    if strict && !checked.report.all_pass() {
        std::process::exit(1);
    }

    Ok(())
}
