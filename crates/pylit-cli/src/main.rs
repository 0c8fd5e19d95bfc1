//! `pylit` CLI — convert Python object-literal text to JSON from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a literal given as an argument
//! pylit json "{'name': 'Alice', 'age': 30}"
//!
//! # Convert from stdin, pretty-printed
//! echo "[1, 2, 3]" | pylit json --pretty
//!
//! # Convert from file to file
//! pylit json -i data.py -o data.json
//!
//! # Parse and run the resource-guard validator
//! pylit check "{'rows': [(1, 2), (3, 4)]}"
//!
//! # Dump the token stream (debugging aid)
//! pylit tokens "[1, 'a']"
//! ```
//!
//! Exits non-zero with a diagnostic on stderr when the pipeline fails.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pylit_core::{Limits, Validator};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "pylit",
    version,
    about = "Python object-literal to JSON converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a literal to JSON
    Json {
        /// Literal text (reads -i or stdin if omitted)
        literal: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a literal and print the validator's report
    Check {
        /// Literal text (reads -i or stdin if omitted)
        literal: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Dump the token stream with source offsets
    Tokens {
        /// Literal text (reads -i or stdin if omitted)
        literal: Option<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Json {
            literal,
            input,
            output,
            pretty,
        } => {
            let source = read_source(literal, input.as_deref())?;
            let json =
                pylit_core::to_json(&source).context("failed to convert literal to JSON")?;
            let rendered = if pretty {
                let value: serde_json::Value = serde_json::from_str(&json)?;
                serde_json::to_string_pretty(&value)?
            } else {
                json
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { literal, input } => {
            let source = read_source(literal, input.as_deref())?;
            let tree = pylit_core::parse(&source).context("failed to parse literal")?;
            let report = Validator::new(Limits::default())
                .check(&tree)
                .context("validation failed")?;
            println!("nodes:     {}", report.total_nodes);
            println!("max depth: {}", report.max_depth);
            println!(
                "scalars: {}  lists: {}  tuples: {}  sets: {}  dicts: {}",
                report.scalars, report.lists, report.tuples, report.sets, report.dicts
            );
        }
        Commands::Tokens { literal, input } => {
            let source = read_source(literal, input.as_deref())?;
            let tokens = pylit_core::tokenize(&source).context("failed to scan literal")?;
            for token in &tokens {
                println!("{:>5}  {:?}", token.offset, token.kind);
            }
        }
    }

    Ok(())
}

/// Input precedence: positional literal, then `-i` file, then stdin.
fn read_source(literal: Option<String>, input: Option<&str>) -> Result<String> {
    if let Some(literal) = literal {
        return Ok(literal);
    }
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write file: {path}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
