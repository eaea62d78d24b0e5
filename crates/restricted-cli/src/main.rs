//! Restricted CLI - Command-line interface for parsing, formatting and hashing restricted values.

use clap::{Parser, Subcommand};
use restricted_core::ParseError;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod registry;

use commands::{hash, parse, types};

#[derive(Parser)]
#[command(name = "restricted")]
#[command(about = "Parse, format and fingerprint restricted values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared value types
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse one value and show its formatted and canonical forms
    Parse {
        /// Type name (case-insensitive), e.g. CountryCode
        type_name: String,
        /// Text to parse
        text: String,
        /// Culture tag used for parsing and formatting (default: invariant)
        #[arg(long)]
        locale: Option<String>,
        /// Format selector: G, L, U or a type-specific selector
        #[arg(long)]
        format: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the repeatable hash of each value read one per line
    Hash {
        /// Type name (case-insensitive)
        type_name: String,
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Drop values whose hash was already printed
        #[arg(long)]
        dedupe: bool,
    },
}

fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<ParseError>() {
        Some(ParseError::Format(_)) => 2,
        Some(ParseError::Validation(_)) => 3,
        None => 1,
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Types { json } => types::run(json),
        Commands::Parse {
            type_name,
            text,
            locale,
            format,
            json,
        } => parse::run(type_name, text, locale, format, json),
        Commands::Hash {
            type_name,
            input,
            dedupe,
        } => hash::run(type_name, input, dedupe),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code(e.as_ref()));
    }
}
