//! Table and relationship accumulation into the schema.

use indexmap::IndexMap;

use crate::error::Result;
use crate::input::TableDefinition;
use crate::schema::{Relationship, Schema, Table};

use super::columns::derive_column;

/// Build every table and its derived relationships, then commit them to
/// the schema.
///
/// All candidates are staged locally first; the schema is only touched once
/// the entire input set has validated, so a failed run never observes a
/// half-built schema.
pub fn build_tables(
    input_tables: &IndexMap<String, TableDefinition>,
    schema: &mut Schema,
) -> Result<()> {
    let mut tables = Vec::with_capacity(input_tables.len());
    let mut relationships = Vec::new();

    for definition in input_tables.values() {
        let (table, derived) = build_table(definition, input_tables)?;
        tables.push(table);
        relationships.extend(derived);
    }

    schema.tables.extend(tables);
    schema.relationships.extend(relationships);
    Ok(())
}

/// Derive one table's normalized columns and relationship candidates.
fn build_table(
    definition: &TableDefinition,
    input_tables: &IndexMap<String, TableDefinition>,
) -> Result<(Table, Vec<Relationship>)> {
    let mut columns = Vec::with_capacity(definition.columns.len());
    let mut relationships = Vec::new();

    for declaration in &definition.columns {
        let (column, derived) = derive_column(declaration, &definition.name, input_tables)?;
        columns.push(column);
        relationships.extend(derived);
    }

    Ok((
        Table {
            name: definition.name.clone(),
            columns,
        },
        relationships,
    ))
}
