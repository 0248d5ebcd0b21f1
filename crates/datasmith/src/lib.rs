//! Datasmith: dataset schema assembly from per-file table and asset definitions.
//!
//! Datasmith merges independently authored table and asset definition files
//! into one validated dataset document: normalized tables and columns,
//! derived relationships with inferred cardinality, and asset views over
//! the finished schema.
//!
//! # Core Principles
//!
//! - **Correct or nothing**: a malformed definition or dangling reference
//!   aborts the run; no partial output is ever produced
//! - **Deterministic**: definitions are processed in name order, so the
//!   same inputs always yield the same document
//! - **Flat asset views**: every asset lists every table and relationship
//!   in the schema, anchored at its declared root
//!
//! # Example
//!
//! ```no_run
//! use datasmith::Datasmith;
//!
//! let dataset = Datasmith::new()
//!     .assemble("study", "Clinical study schema", "tables/", "assets/")
//!     .unwrap();
//!
//! println!("Tables: {}", dataset.schema.tables.len());
//! println!("Relationships: {}", dataset.schema.relationships.len());
//! ```

pub mod assemble;
pub mod error;
pub mod input;
pub mod schema;

mod datasmith;

pub use crate::datasmith::{Datasmith, DatasmithConfig};
pub use error::{DatasmithError, Result};
pub use input::{AssetDefinition, ColumnDefinition, DuplicatePolicy, Reference, TableDefinition};
pub use schema::{
    Asset, AssetTable, Cardinality, Column, Dataset, Endpoint, Relationship, Schema, Table,
};
