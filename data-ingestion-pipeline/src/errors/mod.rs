//! Error types for the import pipeline.

use std::io;
use std::path::PathBuf;

use data_ingestion_repository::IndexError;
use thiserror::Error;

/// Errors that can end an import before or during a run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// A required parameter is missing or out of range. Raised before any work starts.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input path does not resolve to a readable file.
    #[error("Input file not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file has no content.
    #[error("Input file is empty: {}", path.display())]
    EmptyContent { path: PathBuf },

    /// The input is not a JSON array of records.
    #[error("Invalid input format in {}: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    /// A batch was rejected by the index and the run was aborted.
    #[error(
        "Failed to upload batch at offset {offset} ({len} records); \
         {records_processed} records were imported before the failure"
    )]
    Upload {
        #[source]
        source: IndexError,
        offset: usize,
        len: usize,
        records_processed: usize,
    },
}

impl ImportError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create an invalid format error.
    pub fn invalid_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
