//! Output model for the assembled dataset document.

mod asset;
mod dataset;
mod persistence;
mod relationship;

pub use asset::{Asset, AssetTable};
pub use dataset::{Column, Dataset, Schema, Table};
pub use relationship::{Cardinality, Endpoint, Relationship};
