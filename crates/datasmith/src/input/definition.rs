//! Input-side definition types as authored in table and asset files.
//!
//! These mirror the files on disk, not the assembled output: a column here
//! may still carry a `link` datatype and reference declarations, which the
//! assembly pass turns into a string column plus relationship records.

use serde::Deserialize;

/// One table definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDefinition {
    /// Declared table name; the loader keys its map by this.
    pub name: String,
    /// Column declarations in file order.
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    /// Check whether this table declares a column with the given name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}

/// One column declaration inside a table definition.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    /// Primitive type name, or `link` for a foreign reference.
    pub datatype: String,
    /// Whether the column holds an array of values. Absence and an explicit
    /// `false` are distinct states and both carried into the output.
    #[serde(default)]
    pub array_of: Option<bool>,
    /// Cross-table references; each entry derives one relationship.
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

/// A cross-table reference declared on a column.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub table_name: String,
    pub column_name: String,
}

/// One asset definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDefinition {
    /// Declared asset name; the loader keys its map by this.
    pub name: String,
    #[serde(rename = "rootTable")]
    pub root_table: String,
    #[serde(rename = "rootColumn")]
    pub root_column: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_definition_from_json() {
        let table: TableDefinition = serde_json::from_str(
            r#"{
                "name": "Users",
                "columns": [
                    {"name": "id", "datatype": "String"},
                    {"name": "tags", "datatype": "String", "array_of": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(table.name, "Users");
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].array_of, None);
        assert_eq!(table.columns[1].array_of, Some(true));
        assert!(table.has_column("id"));
        assert!(!table.has_column("missing"));
    }

    #[test]
    fn test_column_references() {
        let column: ColumnDefinition = serde_json::from_str(
            r#"{
                "name": "user_ref",
                "datatype": "link",
                "references": [{"table_name": "Users", "column_name": "id"}]
            }"#,
        )
        .unwrap();

        let references = column.references.unwrap();
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].table_name, "Users");
        assert_eq!(references[0].column_name, "id");
    }

    #[test]
    fn test_missing_columns_field_is_rejected() {
        let result: Result<TableDefinition, _> = serde_json::from_str(r#"{"name": "Users"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_asset_definition_camel_case_root() {
        let asset: AssetDefinition = serde_json::from_str(
            r#"{"name": "study", "rootTable": "Users", "rootColumn": "id"}"#,
        )
        .unwrap();

        assert_eq!(asset.root_table, "Users");
        assert_eq!(asset.root_column, "id");
    }
}
