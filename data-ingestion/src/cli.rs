//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use data_ingestion_pipeline::DEFAULT_BATCH_SIZE;
use data_ingestion_repository::config::DEFAULT_TIMEOUT;

/// Environment variable for the Algolia application ID.
pub const ENV_APPLICATION_ID: &str = "ALGOLIA_APPLICATION_ID";

/// Environment variable for the Algolia API key.
pub const ENV_API_KEY: &str = "ALGOLIA_API_KEY";

/// Environment variable for the target index name.
pub const ENV_INDEX_NAME: &str = "ALGOLIA_INDEX_NAME";

/// Environment variable for the input file path.
pub const ENV_FILE: &str = "IMPORT_FILE";

/// Environment variable overriding the Algolia write host.
pub const ENV_HOST: &str = "ALGOLIA_HOST";

/// Environment variable for the per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "ALGOLIA_TIMEOUT_SECS";

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "algolia-import")]
#[command(about = "Imports Algolia sample data", long_about = None)]
pub struct Cli {
    /// Algolia Application ID
    #[arg(long = "application-id", env = ENV_APPLICATION_ID)]
    pub application_id: Option<String>,

    /// Algolia API Key
    #[arg(long = "api-key", env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Target index name
    #[arg(long = "index-name", env = ENV_INDEX_NAME)]
    pub index_name: Option<String>,

    /// JSON file containing an array of records
    #[arg(long, env = ENV_FILE)]
    pub file: Option<PathBuf>,

    /// Number of records sent per request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE as i64, allow_negative_numbers = true)]
    pub batch_size: i64,

    /// Skip this many records from the start of the file (resume after a failed run)
    #[arg(long, default_value_t = 0)]
    pub resume_from: usize,

    /// Override the Algolia write host, e.g. for a local test server
    #[arg(long, env = ENV_HOST)]
    pub host: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["algolia-import"]).unwrap();

        assert_eq!(cli.batch_size, 10);
        assert_eq!(cli.resume_from, 0);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_options_read_from_environment() {
        let command = Cli::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|name| name.to_string_lossy().into_owned())
        };

        assert_eq!(env_of("application_id").as_deref(), Some(ENV_APPLICATION_ID));
        assert_eq!(env_of("api_key").as_deref(), Some(ENV_API_KEY));
        assert_eq!(env_of("index_name").as_deref(), Some(ENV_INDEX_NAME));
        assert_eq!(env_of("file").as_deref(), Some(ENV_FILE));
        assert_eq!(env_of("host").as_deref(), Some(ENV_HOST));
        assert_eq!(env_of("timeout_secs").as_deref(), Some(ENV_TIMEOUT_SECS));
        assert_eq!(env_of("batch_size"), None);
    }

    #[test]
    fn test_help_lists_environment_variables() {
        let help = Cli::command().render_long_help().to_string();

        assert!(help.contains("[env: ALGOLIA_APPLICATION_ID"));
        assert!(help.contains("[env: ALGOLIA_API_KEY]"));
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "algolia-import",
            "--application-id",
            "APPID",
            "--api-key",
            "key",
            "--index-name",
            "products",
            "--file",
            "data/products.json",
            "--batch-size",
            "50",
            "--resume-from",
            "100",
            "--host",
            "http://localhost:8080",
            "--timeout-secs",
            "5",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.application_id.as_deref(), Some("APPID"));
        assert_eq!(cli.index_name.as_deref(), Some("products"));
        assert_eq!(cli.file, Some(PathBuf::from("data/products.json")));
        assert_eq!(cli.batch_size, 50);
        assert_eq!(cli.resume_from, 100);
        assert_eq!(cli.host.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.timeout_secs, 5);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_negative_batch_size_reaches_validation() {
        let cli = Cli::try_parse_from(["algolia-import", "--batch-size", "-3"]).unwrap();
        assert_eq!(cli.batch_size, -3);
    }
}
