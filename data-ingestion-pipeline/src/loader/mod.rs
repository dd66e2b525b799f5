//! Loader module for the import pipeline.
//!
//! Reads the input file and validates it into an [`ImportDataSet`].

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::errors::ImportError;
use data_ingestion_shared::ImportDataSet;

/// Loads an import data set from a JSON file.
///
/// The file must contain a single JSON array; each element becomes one record.
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    /// Create a loader for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and validate the file.
    ///
    /// Performs one synchronous read with no retry.
    ///
    /// # Returns
    ///
    /// * `Ok(ImportDataSet)` - The records in file order
    /// * `Err(ImportError::InvalidConfiguration)` - If the path is empty
    /// * `Err(ImportError::NotFound)` - If the path is not a readable file
    /// * `Err(ImportError::EmptyContent)` - If the file has zero bytes
    /// * `Err(ImportError::InvalidFormat)` - If the content is not a JSON array
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<ImportDataSet, ImportError> {
        if self.path.as_os_str().is_empty() {
            return Err(ImportError::invalid_configuration("Input file path is required"));
        }

        let bytes = fs::read(&self.path).map_err(|source| ImportError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        if bytes.is_empty() {
            return Err(ImportError::EmptyContent {
                path: self.path.clone(),
            });
        }

        debug!(bytes = bytes.len(), "Read input file");

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ImportError::invalid_format(&self.path, e.to_string()))?;

        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(ImportError::invalid_format(
                    &self.path,
                    format!("expected a JSON array at the top level, found {}", kind(&other)),
                ))
            }
        };

        info!(records = records.len(), "Loaded import data set");

        Ok(ImportDataSet::new(records))
    }
}

/// Load the data set at `path`. Shorthand for `DataLoader::new(path).load()`.
pub fn load(path: impl Into<PathBuf>) -> Result<ImportDataSet, ImportError> {
    DataLoader::new(path).load()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
