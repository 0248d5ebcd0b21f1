//! Asset record construction against the assembled schema.

use indexmap::IndexMap;

use crate::input::AssetDefinition;
use crate::schema::{Asset, AssetTable, Schema};

/// Build every asset record and append them to the schema.
///
/// Runs strictly after table/relationship assembly, so each asset sees the
/// complete schema.
pub fn build_assets(input_assets: &IndexMap<String, AssetDefinition>, schema: &mut Schema) {
    let assets: Vec<Asset> = input_assets
        .values()
        .map(|definition| build_asset(definition, schema))
        .collect();

    schema.assets.extend(assets);
}

/// Build one asset: a flat view listing every table in the schema (each
/// with an empty column selection) and the name of every relationship.
///
/// The root table and column are carried through without being resolved
/// against the schema.
fn build_asset(definition: &AssetDefinition, schema: &Schema) -> Asset {
    let tables = schema
        .tables
        .iter()
        .map(|table| AssetTable {
            name: table.name.clone(),
            columns: Vec::new(),
        })
        .collect();

    let follow = schema
        .relationships
        .iter()
        .map(|relationship| relationship.name.clone())
        .collect();

    Asset {
        name: definition.name.clone(),
        root_table: definition.root_table.clone(),
        root_column: definition.root_column.clone(),
        tables,
        follow,
    }
}
