//! Persistence for assembled datasets - write the merged JSON document.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{DatasmithError, Result};

use super::dataset::Dataset;

impl Dataset {
    /// Write the dataset to a JSON file, pretty-printed with 2-space
    /// indentation and keys in declaration order.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    DatasmithError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            DatasmithError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            DatasmithError::Persistence(format!("Failed to serialize dataset: {}", e))
        })?;

        Ok(())
    }

    /// Load a previously assembled dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            DatasmithError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let dataset: Dataset = serde_json::from_reader(reader).map_err(|e| {
            DatasmithError::Persistence(format!(
                "Failed to parse dataset '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(dataset)
    }

    /// Render the dataset as a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DatasmithError::Persistence(format!("Failed to serialize dataset: {}", e)))
    }
}
