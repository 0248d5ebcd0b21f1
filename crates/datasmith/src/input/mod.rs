//! Input definition parsing and directory loading.

mod definition;
mod loader;

pub use definition::{AssetDefinition, ColumnDefinition, Reference, TableDefinition};
pub use loader::{DuplicatePolicy, NamedDefinition, load_definitions};
