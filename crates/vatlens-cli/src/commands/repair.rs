//! Repair command implementation.

use serde_json::Value;
use std::io::{self, Read};
use vatlens_repair::repair;

pub fn run(
    input: Option<String>,
    schema: Option<String>,
    log: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read model text from file or stdin
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let schema_value: Option<Value> = match schema {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read schema {}: {}", path, e))?;
            Some(serde_json::from_str(&raw).map_err(|e| format!("Invalid schema JSON: {}", e))?)
        }
        None => None,
    };

    let outcome = repair(&text, schema_value.as_ref());

    if log {
        for entry in &outcome.log {
            eprintln!("{}", entry);
        }
    }
    if !quiet {
        println!("{}", outcome.text);
    }

    Ok(())
}
