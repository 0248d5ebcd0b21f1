//! Referential integrity checks for derived relationships.

use indexmap::IndexMap;

use crate::error::{DatasmithError, Result};
use crate::input::TableDefinition;

/// Check that both endpoints of a proposed relationship resolve against the
/// loaded table definitions.
///
/// Failure is fatal for the whole run: referential integrity is an
/// all-or-nothing precondition for producing any output.
pub fn validate_endpoints(
    from_table: &str,
    from_column: &str,
    to_table: &str,
    to_column: &str,
    input_tables: &IndexMap<String, TableDefinition>,
) -> Result<()> {
    resolve(from_table, from_column, input_tables)?;
    resolve(to_table, to_column, input_tables)
}

/// A table/column pair resolves when the table is defined and declares a
/// column with that name.
fn resolve(
    table_name: &str,
    column_name: &str,
    input_tables: &IndexMap<String, TableDefinition>,
) -> Result<()> {
    if let Some(table) = input_tables.get(table_name) {
        if table.has_column(column_name) {
            return Ok(());
        }
    }

    Err(DatasmithError::UnknownReference {
        table: table_name.to_string(),
        column: column_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::input::{DuplicatePolicy, load_definitions};

    use std::fs;

    use tempfile::TempDir;

    fn input_tables() -> IndexMap<String, TableDefinition> {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("users.json"),
            r#"{"name": "Users", "columns": [
                {"name": "id", "datatype": "String"},
                {"name": "name", "datatype": "String"}
            ]}"#,
        )
        .unwrap();
        load_definitions(dir.path(), DuplicatePolicy::Reject).unwrap()
    }

    #[test]
    fn test_both_endpoints_resolve() {
        let tables = input_tables();
        assert!(validate_endpoints("Users", "id", "Users", "name", &tables).is_ok());
    }

    #[test]
    fn test_unknown_table_fails() {
        let tables = input_tables();
        let err = validate_endpoints("Users", "id", "Ghost", "id", &tables).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error validating relationship: column 'id' in table 'Ghost' does not exist"
        );
    }

    #[test]
    fn test_unknown_column_fails() {
        let tables = input_tables();
        let err = validate_endpoints("Users", "email", "Users", "id", &tables).unwrap_err();
        assert!(matches!(
            err,
            DatasmithError::UnknownReference { ref table, ref column }
                if table == "Users" && column == "email"
        ));
    }

    #[test]
    fn test_from_endpoint_checked_first() {
        // Both endpoints are bad; the error should name the from side.
        let tables = input_tables();
        let err = validate_endpoints("Ghost", "id", "Phantom", "id", &tables).unwrap_err();
        assert!(matches!(
            err,
            DatasmithError::UnknownReference { ref table, .. } if table == "Ghost"
        ));
    }

    #[test]
    fn test_table_with_no_columns_never_resolves() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("empty.json"),
            r#"{"name": "Empty", "columns": []}"#,
        )
        .unwrap();
        let tables: IndexMap<String, TableDefinition> =
            load_definitions(dir.path(), DuplicatePolicy::Reject).unwrap();

        assert!(validate_endpoints("Empty", "id", "Empty", "id", &tables).is_err());
    }
}
