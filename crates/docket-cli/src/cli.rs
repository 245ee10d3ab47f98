//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Docket - Classify and validate estate documents.
///
/// Without a subcommand, processes DOCUMENT_ID, or every document in the
/// source when no id is given.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Document to process (default: all)
    pub document_id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pipeline configuration file (keyword and rule tables)
    #[arg(short, long, global = true, env = "DOCKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of documents (default: built-in fixtures)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process one document or the whole source
    Process(ProcessArgs),

    /// List the documents in the source
    List,

    /// Describe the taxonomy and the configured pipeline
    Info,
}

/// Arguments for the process command.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Document to process (default: all)
    pub document_id: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
