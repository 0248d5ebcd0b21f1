//! Create command - assemble a dataset document and write it to disk.

use std::path::PathBuf;

use colored::Colorize;
use datasmith::Datasmith;

use super::duplicate_policy;

pub fn run(
    name: String,
    description: String,
    tables_dir: PathBuf,
    assets_dir: PathBuf,
    output: PathBuf,
    allow_duplicate_names: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for dir in [&tables_dir, &assets_dir] {
        if !dir.is_dir() {
            return Err(format!("Directory not found: {}", dir.display()).into());
        }
    }

    println!("{} {}", "Assembling".cyan().bold(), name.white());

    let datasmith = Datasmith::new().with_duplicate_policy(duplicate_policy(allow_duplicate_names));
    let dataset = datasmith.assemble(name, description, &tables_dir, &assets_dir)?;

    if verbose {
        println!();
        println!("{}", "Tables:".yellow().bold());
        for table in &dataset.schema.tables {
            println!("  {:24} {} columns", table.name, table.columns.len());
        }
        println!();
        println!("{}", "Relationships:".yellow().bold());
        for relationship in &dataset.schema.relationships {
            println!("  {}", relationship.name);
        }
        println!();
    }

    dataset.save(&output)?;

    println!(
        "Assembled {} tables, {} relationships, {} assets",
        dataset.schema.tables.len().to_string().white().bold(),
        dataset.schema.relationships.len().to_string().white().bold(),
        dataset.schema.assets.len().to_string().white().bold()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output.display().to_string().white()
    );

    Ok(())
}
