//! mcfs CLI - Command-line interface for the mcfs command scripting language.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

use config::ReplConfig;

/// mcfs - Tokenizer for mcfs command scripts
#[derive(Parser)]
#[command(name = "mcfs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read lines from stdin and print their tokens (default)
    Repl,

    /// Tokenize an mcfs file and show tokens
    Lex {
        /// Input file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the reserved words and selectors
    Info,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::run(&ReplConfig::from_env()),
        Commands::Lex { file, json } => commands::lex::run(&file, json),
        Commands::Info => commands::info::run(),
    }
}
