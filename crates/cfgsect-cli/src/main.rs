//! cfgcli - Inspect and validate sectioned configuration files
//!
//! Usage:
//!   cfgcli [OPTIONS] <COMMAND> <FILE>
//!
//! Commands:
//!   dump      Print every section and parameter in file order
//!   get       Print a single looked-up value
//!   validate  Check a file for format errors
//!   stats     Show document statistics

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use cfgsect_core::{Document, ParseError, ParseErrorKind};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cfgcli", version)]
#[command(about = "Inspect and validate sectioned configuration files")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every section and parameter in file order
    Dump {
        file: PathBuf,
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },
    /// Print the value of KEY in the first section named SECTION
    Get {
        file: PathBuf,
        section: String,
        key: String,
    },
    /// Check the file for format errors
    Validate {
        file: PathBuf,
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },
    /// Show document statistics
    Stats { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Dump { file, json } => cmd_dump(&load(&file)?, json),
        Command::Get { file, section, key } => cmd_get(&load(&file)?, &section, &key),
        Command::Validate { file, json } => cmd_validate(&file, json),
        Command::Stats { file } => cmd_stats(&load(&file)?),
    }
}

fn load(file: &Path) -> Result<Document<'static>, String> {
    cfgsect_core::load(file).map_err(|e| e.to_string())
}

// =============================================================================
// Dump Command
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    name: &'a str,
    line: u32,
    parameters: Vec<JsonParameter<'a>>,
}

#[derive(Serialize)]
struct JsonParameter<'a> {
    name: &'a str,
    value: &'a str,
    line: u32,
}

fn convert_document<'a>(doc: &'a Document) -> JsonDocument<'a> {
    JsonDocument {
        sections: doc
            .iter()
            .map(|section| JsonSection {
                name: section.name(),
                line: section.line(),
                parameters: section
                    .iter()
                    .map(|param| JsonParameter {
                        name: param.name(),
                        value: param.value(),
                        line: param.line(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn cmd_dump(doc: &Document, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&convert_document(doc))
            .map_err(|e| format!("failed to encode JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    let mut cursor = doc.cursor();
    while let Some(section) = cursor.next_section() {
        println!("[{}]", section);
        while let Some((key, value)) = cursor.next_parameter() {
            println!("  {} = {}", key, value);
        }
    }
    Ok(())
}

// =============================================================================
// Get Command
// =============================================================================

fn cmd_get(doc: &Document, section: &str, key: &str) -> Result<(), String> {
    match doc.lookup(section, key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => Err(format!("'{}' not found in section '{}'", key, section)),
    }
}

// =============================================================================
// Validate Command
// =============================================================================

fn kind_name(kind: ParseErrorKind) -> &'static str {
    match kind {
        ParseErrorKind::OpenFailure => "open-failure",
        ParseErrorKind::UnterminatedSection => "unterminated-section",
        ParseErrorKind::MissingSeparator => "missing-separator",
        ParseErrorKind::ParameterOutsideSection => "parameter-outside-section",
    }
}

/// One-line report for a failed validation, printed once by `main`.
fn describe_failure(e: &ParseError) -> String {
    format!("invalid: {} ({})", e, kind_name(e.kind))
}

fn cmd_validate(file: &Path, json: bool) -> Result<(), String> {
    let result: Result<Document<'static>, ParseError> = cfgsect_core::load(file);

    match (result, json) {
        (Ok(_), false) => {
            println!("Valid: no errors found");
            Ok(())
        }
        (Ok(_), true) => {
            println!("{}", serde_json::json!({"valid": true, "error": null}));
            Ok(())
        }
        (Err(e), false) => Err(describe_failure(&e)),
        (Err(e), true) => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": false,
                    "error": {
                        "kind": kind_name(e.kind),
                        "line": e.line,
                        "message": e.message,
                    }
                })
            );
            Err(e.to_string())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document) -> Result<(), String> {
    let mut names: BTreeMap<String, usize> = BTreeMap::new();
    for section in doc {
        *names.entry(section.name().to_ascii_lowercase()).or_default() += 1;
    }

    println!("Document Statistics");
    println!("-------------------");
    println!("Sections:       {}", doc.len());
    println!("Parameters:     {}", doc.parameter_count());
    println!("Unique names:   {}", names.len());

    let duplicates: Vec<_> = names.iter().filter(|(_, count)| **count > 1).collect();
    if !duplicates.is_empty() {
        println!();
        println!("Duplicate sections:");
        for (name, count) in duplicates {
            println!("  [{}] x{}", name, count);
        }
    }

    Ok(())
}
