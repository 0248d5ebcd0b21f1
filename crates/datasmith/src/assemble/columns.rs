//! Column normalization and relationship derivation.

use indexmap::IndexMap;

use crate::error::Result;
use crate::input::{ColumnDefinition, Reference, TableDefinition};
use crate::schema::{Cardinality, Column, Endpoint, Relationship};

use super::validate::validate_endpoints;

/// Derive the normalized column and any relationships declared by one
/// column definition.
///
/// A column with several references yields several relationships sharing
/// the same `from` endpoint. Every candidate is validated against the
/// loaded table set before it is returned.
pub fn derive_column(
    column: &ColumnDefinition,
    table_name: &str,
    input_tables: &IndexMap<String, TableDefinition>,
) -> Result<(Column, Vec<Relationship>)> {
    let mut relationships = Vec::new();
    if let Some(references) = &column.references {
        for reference in references {
            relationships.push(derive_relationship(
                reference,
                table_name,
                &column.name,
                column.array_of,
                input_tables,
            )?);
        }
    }

    Ok((normalize_column(column), relationships))
}

/// Normalize one column. A `link` column materializes as a string; the
/// reference semantics live on the relationship record, not the datatype.
fn normalize_column(column: &ColumnDefinition) -> Column {
    let datatype = if column.datatype == "link" {
        "String".to_string()
    } else {
        column.datatype.clone()
    };

    Column {
        name: column.name.clone(),
        datatype,
        array_of: column.array_of,
    }
}

/// Validate and build one relationship from a reference declaration.
///
/// The `from` side is always `one`; the `to` side is `many` only when the
/// source column declared `array_of: true`.
fn derive_relationship(
    reference: &Reference,
    from_table: &str,
    from_column: &str,
    array_of: Option<bool>,
    input_tables: &IndexMap<String, TableDefinition>,
) -> Result<Relationship> {
    validate_endpoints(
        from_table,
        from_column,
        &reference.table_name,
        &reference.column_name,
        input_tables,
    )?;

    let to_cardinality = if array_of == Some(true) {
        Cardinality::Many
    } else {
        Cardinality::One
    };

    Ok(Relationship {
        name: Relationship::derive_name(
            from_table,
            from_column,
            &reference.table_name,
            &reference.column_name,
        ),
        from: Endpoint {
            table: from_table.to_string(),
            column: from_column.to_string(),
            cardinality: Cardinality::One,
        },
        to: Endpoint {
            table: reference.table_name.clone(),
            column: reference.column_name.clone(),
            cardinality: to_cardinality,
        },
    })
}
