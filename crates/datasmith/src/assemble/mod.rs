//! Schema assembly pipeline: column derivation, referential validation and
//! table/asset accumulation.

mod assets;
mod columns;
mod tables;
mod validate;

pub use assets::build_assets;
pub use columns::derive_column;
pub use tables::build_tables;
pub use validate::validate_endpoints;
