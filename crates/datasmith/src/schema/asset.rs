//! Asset records: named views over the schema anchored at a root column.

use serde::{Deserialize, Serialize};

/// A table entry inside an asset.
///
/// Column-level projection is declared but never populated; the selection
/// list stays empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTable {
    pub name: String,
    pub columns: Vec<String>,
}

/// A named view over the schema, anchored at a root table/column and
/// listing the tables and relationships it can traverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "rootTable")]
    pub root_table: String,
    #[serde(rename = "rootColumn")]
    pub root_column: String,
    pub tables: Vec<AssetTable>,
    /// Names of the relationships the asset follows.
    pub follow: Vec<String>,
}
