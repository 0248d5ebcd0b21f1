//! Check command - validate definitions without writing output.

use std::path::PathBuf;

use colored::Colorize;
use datasmith::Datasmith;

use super::duplicate_policy;

pub fn run(
    tables_dir: PathBuf,
    assets_dir: PathBuf,
    json_output: bool,
    allow_duplicate_names: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for dir in [&tables_dir, &assets_dir] {
        if !dir.is_dir() {
            return Err(format!("Directory not found: {}", dir.display()).into());
        }
    }

    // Run the full pipeline against placeholder dataset metadata; only the
    // schema contents matter for a dry run.
    let datasmith = Datasmith::new().with_duplicate_policy(duplicate_policy(allow_duplicate_names));
    let dataset = datasmith.assemble("check", "", &tables_dir, &assets_dir)?;

    if json_output {
        let status = serde_json::json!({
            "valid": true,
            "tables": dataset.schema.tables.len(),
            "relationships": dataset.schema.relationships.len(),
            "assets": dataset.schema.assets.len(),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", "Definitions are valid".green().bold());
        println!();
        println!("  Tables:        {}", dataset.schema.tables.len().to_string().white());
        println!(
            "  Relationships: {}",
            dataset.schema.relationships.len().to_string().white()
        );
        println!("  Assets:        {}", dataset.schema.assets.len().to_string().white());

        if verbose {
            println!();
            println!("{}", "Relationships:".yellow().bold());
            for relationship in &dataset.schema.relationships {
                println!(
                    "  {} ({} -> {})",
                    relationship.name, relationship.from.table, relationship.to.table
                );
            }
        }
    }

    Ok(())
}
