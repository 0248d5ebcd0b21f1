//! Error types for the Datasmith library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Datasmith operations.
///
/// Every variant is fatal: assembly either produces a complete, validated
/// dataset or no output at all.
#[derive(Debug, Error)]
pub enum DatasmithError {
    /// Error reading or accessing a file or directory.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not well-formed JSON or lacks a required field.
    #[error("Invalid definition '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two definition files declare the same name.
    #[error("Duplicate {kind} name '{name}' declared in '{path}'")]
    DuplicateName {
        kind: &'static str,
        name: String,
        path: PathBuf,
    },

    /// A relationship endpoint names a table or column that is not defined.
    #[error("Error validating relationship: column '{column}' in table '{table}' does not exist")]
    UnknownReference { table: String, column: String },

    /// Error writing the assembled dataset.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for Datasmith operations.
pub type Result<T> = std::result::Result<T, DatasmithError>;
