//! Output rendering for query results.
//!
//! The format selector is explicit rather than negotiated: `text` prints
//! raw lines for humans and shell pipelines, `json` prints a single JSON
//! value on stdout for machine consumers. Logs always go to stderr, so
//! stdout carries nothing but the result.

use clap::ValueEnum;
use linestore_store::StoredFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one entry per line
    Text,
    /// A single JSON value
    Json,
}

pub fn print_id(format: OutputFormat, id: u64) {
    match format {
        OutputFormat::Text => println!("{id}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
}

pub fn print_line(format: OutputFormat, line: &str) {
    match format {
        OutputFormat::Text => println!("{line}"),
        OutputFormat::Json => println!("{}", serde_json::json!(line)),
    }
}

pub fn print_lines(format: OutputFormat, lines: &[String]) {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::json!(lines)),
    }
}

pub fn print_files(format: OutputFormat, files: Vec<&StoredFile>) {
    match format {
        OutputFormat::Text => {
            for file in files {
                println!("{}\t{}\t{} bytes", file.id, file.name, file.content.len());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "id": f.id,
                        "name": f.name,
                        "size": f.content.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::json!(entries));
        }
    }
}
