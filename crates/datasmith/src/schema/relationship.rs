//! Relationship records derived from column references.

use serde::{Deserialize, Serialize};

/// Whether one source row maps to one or potentially several target rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    One,
    Many,
}

/// One side (table + column + cardinality) of a relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    pub table: String,
    pub column: String,
    pub cardinality: Cardinality,
}

/// A derived relationship between two table columns.
///
/// The name doubles as the relationship's identity; no separate id exists,
/// so two identical references collide rather than deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Relationship {
    /// Deterministic relationship name:
    /// `{fromTable}_{fromColumn}_to_{toTable}_{toColumn}`.
    pub fn derive_name(
        from_table: &str,
        from_column: &str,
        to_table: &str,
        to_column: &str,
    ) -> String {
        format!("{}_{}_to_{}_{}", from_table, from_column, to_table, to_column)
    }
}
