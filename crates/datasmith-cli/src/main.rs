//! Datasmith CLI - dataset schema assembly tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            name,
            description,
            tables_dir,
            assets_dir,
            output,
            allow_duplicate_names,
        } => commands::create::run(
            name,
            description,
            tables_dir,
            assets_dir,
            output,
            allow_duplicate_names,
            cli.verbose,
        ),

        Commands::Check {
            tables_dir,
            assets_dir,
            json,
            allow_duplicate_names,
        } => commands::check::run(tables_dir, assets_dir, json, allow_duplicate_names, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
