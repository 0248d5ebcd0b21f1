//! Main Datasmith struct and public API.

use std::path::Path;

use crate::assemble::{build_assets, build_tables};
use crate::error::Result;
use crate::input::{AssetDefinition, DuplicatePolicy, TableDefinition, load_definitions};
use crate::schema::Dataset;

/// Configuration for dataset assembly.
#[derive(Debug, Clone, Default)]
pub struct DatasmithConfig {
    /// How the loader treats duplicate declared names.
    pub duplicates: DuplicatePolicy,
}

/// The dataset assembler.
///
/// Runs the full pipeline as one linear pass: load table definitions,
/// derive and validate columns and relationships, commit them to the
/// schema, then build asset views against the completed schema.
pub struct Datasmith {
    config: DatasmithConfig,
}

impl Datasmith {
    /// Create an assembler with default configuration.
    pub fn new() -> Self {
        Self::with_config(DatasmithConfig::default())
    }

    /// Create an assembler with custom configuration.
    pub fn with_config(config: DatasmithConfig) -> Self {
        Self { config }
    }

    /// Set how duplicate declared names are handled during loading.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    /// Assemble a dataset from a directory of table definitions and a
    /// directory of asset definitions.
    ///
    /// Any input-structure or referential-integrity failure aborts the
    /// whole run; on error the caller receives no dataset, partial or
    /// otherwise.
    pub fn assemble(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        tables_dir: impl AsRef<Path>,
        assets_dir: impl AsRef<Path>,
    ) -> Result<Dataset> {
        let mut dataset = Dataset::new(name, description);

        let input_tables =
            load_definitions::<TableDefinition>(tables_dir.as_ref(), self.config.duplicates)?;
        build_tables(&input_tables, &mut dataset.schema)?;

        let input_assets =
            load_definitions::<AssetDefinition>(assets_dir.as_ref(), self.config.duplicates)?;
        build_assets(&input_assets, &mut dataset.schema);

        Ok(dataset)
    }
}

impl Default for Datasmith {
    fn default() -> Self {
        Self::new()
    }
}
