//! Directory loader for JSON definition files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use super::definition::{AssetDefinition, TableDefinition};
use crate::error::{DatasmithError, Result};

/// How the loader treats two definition files declaring the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the run, naming the colliding file.
    #[default]
    Reject,
    /// The later file read wins; the earlier definition is dropped silently.
    Overwrite,
}

/// A definition record the loader can key by its declared name.
pub trait NamedDefinition {
    /// The declared `name` field.
    fn name(&self) -> &str;

    /// Label used in error messages.
    fn kind() -> &'static str;
}

impl NamedDefinition for TableDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> &'static str {
        "table"
    }
}

impl NamedDefinition for AssetDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> &'static str {
        "asset"
    }
}

/// Load every `.json` file in a directory into a name-keyed map.
///
/// Files without a `.json` extension are ignored. Entries are read in
/// file-name order and the finished map is sorted by declared name, so
/// iteration order never depends on the platform's directory enumeration.
pub fn load_definitions<T>(dir: &Path, policy: DuplicatePolicy) -> Result<IndexMap<String, T>>
where
    T: DeserializeOwned + NamedDefinition,
{
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| DatasmithError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut definitions: IndexMap<String, T> = IndexMap::new();
    for path in paths {
        let file = File::open(&path).map_err(|e| DatasmithError::Io {
            path: path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        let definition: T =
            serde_json::from_reader(reader).map_err(|e| DatasmithError::Parse {
                path: path.clone(),
                source: e,
            })?;

        let name = definition.name().to_string();
        if definitions.contains_key(&name) && policy == DuplicatePolicy::Reject {
            return Err(DatasmithError::DuplicateName {
                kind: T::kind(),
                name,
                path,
            });
        }
        definitions.insert(name, definition);
    }

    definitions.sort_keys();
    Ok(definitions)
}
