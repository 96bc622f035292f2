//! `treepath` CLI — read and write JSON values by path expression.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value (stdin → stdout, pretty-printed)
//! echo '{"users":[{"name":"John"}]}' | treepath get 'users[0].name'
//!
//! # Read from a file, compact output
//! treepath get 'matrix[0]' -i data.json --compact
//!
//! # Write a value and print the whole document
//! echo '{}' | treepath set settings.theme '"dark"'
//!
//! # Non-JSON values are taken as strings; --raw forces a string
//! treepath set -i data.json -o data.json users[0].age 31
//! treepath set -i data.json --raw users[0].zip 02134
//!
//! # Show how a path is parsed
//! treepath parse 'a.b[0][*]'
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treepath_core::{codec, ParseMode, Path, PathSegment, Value};

#[derive(Parser)]
#[command(
    name = "treepath",
    version,
    about = "Read and write JSON values with path expressions like users[0].name"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at PATH
    Get {
        /// Path expression, e.g. company.employees[0].name
        path: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Reject malformed bracket syntax instead of ignoring it
        #[arg(long)]
        strict: bool,
    },
    /// Assign VALUE at PATH and print the resulting document
    Set {
        /// Path expression, e.g. settings.theme
        path: String,
        /// New value as JSON; text that is not valid JSON is used as a string
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Always treat VALUE as a plain string
        #[arg(long)]
        raw: bool,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Reject malformed bracket syntax instead of ignoring it
        #[arg(long)]
        strict: bool,
    },
    /// Print the segments a path parses into, one per line
    Parse {
        /// Path expression to parse
        path: String,
        /// Reject malformed bracket syntax instead of ignoring it
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Get {
            path,
            input,
            compact,
            strict,
        } => {
            let parsed = parse_path(&path, strict)?;
            let tree = read_tree(input.as_deref())?;
            let found = tree
                .get_parsed(&parsed)
                .with_context(|| format!("Failed to get '{}'", path))?;
            let mut out = render(found, compact)?;
            out.push('\n');
            write_output(None, &out)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            raw,
            compact,
            strict,
        } => {
            let parsed = parse_path(&path, strict)?;
            let mut tree = read_tree(input.as_deref())?;
            let new_value = parse_value(&value, raw);
            tree.set_parsed(&parsed, new_value)
                .with_context(|| format!("Failed to set '{}'", path))?;
            let mut out = render(&tree, compact)?;
            out.push('\n');
            write_output(output.as_deref(), &out)?;
        }
        Commands::Parse { path, strict } => {
            let parsed = parse_path(&path, strict)?;
            let mut out = String::new();
            for seg in &parsed {
                out.push_str(&describe_segment(seg));
                out.push('\n');
            }
            write_output(None, &out)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_path(path: &str, strict: bool) -> Result<Path> {
    let mode = if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    Path::parse_with(path, mode).with_context(|| format!("Invalid path: '{}'", path))
}

/// Interpret a VALUE argument: JSON when it parses, otherwise a string.
fn parse_value(raw_text: &str, force_string: bool) -> Value {
    if force_string {
        return Value::from(raw_text);
    }
    match codec::decode(raw_text) {
        Ok(v) => v,
        Err(e) => {
            debug!(value = raw_text, error = %e, "value is not JSON, using it as a string");
            Value::from(raw_text)
        }
    }
}

fn describe_segment(seg: &PathSegment) -> String {
    match seg {
        PathSegment::Key(k) => format!("key {}", k),
        PathSegment::Index(i) => format!("index {}", i),
        PathSegment::Wildcard => "wildcard".to_string(),
    }
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        codec::encode(value)
    } else {
        codec::encode_pretty(value)
    };
    text.context("Failed to encode JSON")
}

fn read_tree(path: Option<&str>) -> Result<Value> {
    let json = read_input(path)?;
    codec::decode(&json).context("Failed to decode input JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
