//! Validated settings for one import run.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use data_ingestion_pipeline::ImportError;

/// Everything the import needs, checked before any file is read.
#[derive(Clone)]
pub struct ImportSettings {
    pub application_id: String,
    pub api_key: String,
    pub index_name: String,
    pub file: PathBuf,
    pub batch_size: usize,
    pub resume_from: usize,
    pub host: Option<String>,
    pub timeout: Duration,
}

impl ImportSettings {
    /// Validate the parsed command line.
    ///
    /// Flags and their environment variables are merged by clap; blank values
    /// count as missing.
    pub fn from_cli(cli: &Cli) -> Result<Self, ImportError> {
        let pick = |value: Option<&str>| -> Option<String> {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let application_id = pick(cli.application_id.as_deref())
            .ok_or_else(|| ImportError::invalid_configuration("Application ID is required"))?;
        let api_key = pick(cli.api_key.as_deref())
            .ok_or_else(|| ImportError::invalid_configuration("API Key is required"))?;
        let index_name = pick(cli.index_name.as_deref())
            .ok_or_else(|| ImportError::invalid_configuration("Index name is required"))?;

        let file = cli
            .file
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
            .cloned()
            .ok_or_else(|| ImportError::invalid_configuration("Input file path is required"))?;

        let batch_size = usize::try_from(cli.batch_size)
            .ok()
            .filter(|size| *size >= 1)
            .ok_or_else(|| {
                ImportError::invalid_configuration(format!(
                    "Batch size must be a positive integer, got {}",
                    cli.batch_size
                ))
            })?;

        if cli.timeout_secs == 0 {
            return Err(ImportError::invalid_configuration(
                "Timeout must be a positive number of seconds",
            ));
        }

        Ok(Self {
            application_id,
            api_key,
            index_name,
            file,
            batch_size,
            resume_from: cli.resume_from,
            host: pick(cli.host.as_deref()),
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

impl std::fmt::Debug for ImportSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportSettings")
            .field("application_id", &self.application_id)
            .field("api_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("file", &self.file)
            .field("batch_size", &self.batch_size)
            .field("resume_from", &self.resume_from)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}
