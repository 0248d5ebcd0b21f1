//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Datasmith: dataset schema assembly tool
#[derive(Parser)]
#[command(name = "datasmith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a dataset document from table and asset definitions
    Create {
        /// The schema name for the dataset
        #[arg(short, long)]
        name: String,

        /// Description of the schema
        #[arg(short, long)]
        description: String,

        /// Directory containing table definition JSON files
        #[arg(short, long)]
        tables_dir: PathBuf,

        /// Directory containing asset definition JSON files
        #[arg(short, long)]
        assets_dir: PathBuf,

        /// Path for the assembled output JSON
        #[arg(short, long)]
        output: PathBuf,

        /// Let a later definition file replace an earlier one declaring the
        /// same name instead of failing
        #[arg(long)]
        allow_duplicate_names: bool,
    },

    /// Validate definitions and report what would be assembled, without
    /// writing any output
    Check {
        /// Directory containing table definition JSON files
        #[arg(short, long)]
        tables_dir: PathBuf,

        /// Directory containing asset definition JSON files
        #[arg(short, long)]
        assets_dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Let a later definition file replace an earlier one declaring the
        /// same name instead of failing
        #[arg(long)]
        allow_duplicate_names: bool,
    },
}
