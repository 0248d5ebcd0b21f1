//! Dataset, schema, table and column records.

use serde::{Deserialize, Serialize};

use super::asset::Asset;
use super::relationship::Relationship;

/// The assembled output document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub description: String,
    pub schema: Schema,
}

impl Dataset {
    /// Create an empty dataset shell with no tables, relationships or assets.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema: Schema::default(),
        }
    }
}

/// The merged schema. All three lists grow monotonically during assembly;
/// nothing is ever removed or overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub relationships: Vec<Relationship>,
    pub assets: Vec<Asset>,
}

impl Schema {
    /// Get a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Get a relationship by name.
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.name == name)
    }
}

/// A normalized table record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// A normalized column record.
///
/// `array_of` is emitted only when the definition declared it; a declared
/// `false` is preserved rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub datatype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_of: Option<bool>,
}
