//! # Data Ingestion
//!
//! Entry point and configuration for the `algolia-import` command.
//!
//! This crate parses the command line, validates settings, wires the Algolia
//! client into the import pipeline and renders progress to the terminal.

pub mod cli;
pub mod config;
pub mod import;
pub mod progress;

pub use cli::Cli;
pub use config::{Dependencies, ImportSettings};
pub use import::run;

use std::error::Error as _;

use data_ingestion_pipeline::ImportError;
use thiserror::Error;

/// Errors that can occur while setting up or running an import.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Import pipeline error.
    #[error(transparent)]
    ImportError(#[from] ImportError),
}

impl IngestionError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// The single line printed when the command fails.
    ///
    /// Underlying causes are joined onto the message, except for a failed
    /// upload, whose cause is already part of the run summary.
    pub fn report_line(&self) -> String {
        let mut line = self.to_string();
        if matches!(self, Self::ImportError(ImportError::Upload { .. })) {
            return line;
        }

        let mut source = self.source();
        while let Some(err) = source {
            line.push_str(": ");
            line.push_str(&err.to_string());
            source = err.source();
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_ingestion_repository::IndexError;
    use std::io;

    #[test]
    fn test_report_line_joins_causes() {
        let err = IngestionError::from(ImportError::NotFound {
            path: "records.json".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        });

        assert_eq!(
            err.report_line(),
            "Input file not found or unreadable: records.json: No such file or directory"
        );
    }

    #[test]
    fn test_report_line_for_failed_upload_omits_index_error() {
        let err = IngestionError::from(ImportError::Upload {
            source: IndexError::from_status(400, "Record too big"),
            offset: 5,
            len: 5,
            records_processed: 5,
        });

        let line = err.report_line();
        assert!(line.starts_with("Failed to upload batch at offset 5"));
        assert!(!line.contains("Record too big"));
    }

    #[test]
    fn test_report_line_for_config_error() {
        assert_eq!(
            IngestionError::config("Failed to create Algolia client").report_line(),
            "Configuration error: Failed to create Algolia client"
        );
    }
}
