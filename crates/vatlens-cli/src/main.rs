//! Vatlens CLI - Command-line interface for invoice text repair and compliance checking.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{batch, check, repair};

#[derive(Parser)]
#[command(name = "vatlens")]
#[command(about = "Vatlens invoice text repair and compliance checking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair malformed model output into valid JSON
    Repair {
        /// Input text file (or stdin if not provided)
        input: Option<String>,
        /// JSON Schema file for advisory validation
        #[arg(long)]
        schema: Option<String>,
        /// Print the repair log to stderr
        #[arg(long)]
        log: bool,
        /// Suppress the repaired JSON on stdout
        #[arg(long)]
        quiet: bool,
    },
    /// Check field compliance of repaired model output
    Check {
        /// Input text file (or stdin if not provided)
        input: Option<String>,
        /// Document class to assume when the input declares none
        #[arg(long)]
        class: Option<String>,
        /// Report every known field, not just the required ones
        #[arg(long)]
        all: bool,
        /// Include normalized date and amount values in the report
        #[arg(long)]
        normalized: bool,
        /// Print the canonical gt_parse record instead of the report
        #[arg(long)]
        record: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any field check fails
        #[arg(long)]
        strict: bool,
    },
    /// Evaluate a directory of predictions against ground-truth labels
    Batch {
        /// Directory of prediction files (.txt or .json, matched by stem)
        #[arg(long)]
        pred: String,
        /// Directory of ground-truth label files (.json)
        #[arg(long)]
        labels: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repair {
            input,
            schema,
            log,
            quiet,
        } => repair::run(input, schema, log, quiet),
        Commands::Check {
            input,
            class,
            all,
            normalized,
            record,
            json,
            strict,
        } => check::run(input, class, all, normalized, record, json, strict),
        Commands::Batch { pred, labels, json } => batch::run(pred, labels, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
