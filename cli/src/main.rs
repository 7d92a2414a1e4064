#![deny(missing_docs)]

//! # APILint CLI
//!
//! Command line front end for the OpenAPI 3.0 contract linter.
//!
//! Usage: `apilint <spec-file>`. Files ending in `.json` are parsed as
//! JSON, anything else as YAML. Exit status is 1 when the document fails
//! to load or any error-severity finding exists, 0 otherwise (including
//! the warnings-only case).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use apilint_core::{parse_document, validate, Document, Outcome, SpecFormat};
use clap::Parser;

mod error;
mod report;

use crate::error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI 3.0 contract linter")]
struct Cli {
    /// Path to the OpenAPI document to validate.
    spec_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Missing or malformed arguments print usage and exit 1.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    ExitCode::from(run(&cli.spec_file))
}

/// Returns the process exit status: 1 for load failures or any
/// error-severity finding, 0 otherwise.
fn run(spec_file: &Path) -> u8 {
    println!("Validating OpenAPI specification: {}", spec_file.display());
    println!("{}", "=".repeat(60));

    let doc = match load(spec_file) {
        Ok(doc) => doc,
        Err(err) => {
            // A load failure short-circuits all validation.
            println!("\n\u{274c} LOAD ERRORS:");
            println!("  - {}", err);
            return 1;
        }
    };

    let report = validate(&doc);
    print!("{}", report::render(&report));

    match report.outcome() {
        Outcome::Invalid => 1,
        Outcome::Valid | Outcome::ValidWithWarnings => 0,
    }
}

/// Reads and parses the document, choosing the format from the extension.
fn load(path: &Path) -> CliResult<Document> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Load(format!("Failed to load spec: {}", e)))?;
    parse_document(&content, SpecFormat::from_path(path))
        .map_err(|e| CliError::Load(e.to_string()))
}
