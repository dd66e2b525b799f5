//! Dependency initialization and wiring for the import command.

use std::sync::Arc;
use tracing::info;

use crate::config::ImportSettings;
use crate::IngestionError;
use data_ingestion_pipeline::{BatchUploader, Orchestrator};
use data_ingestion_repository::{AlgoliaClient, AlgoliaConfig, RecordIndex};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from validated settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IngestionError)` - If the Algolia client cannot be created
    pub fn new(settings: &ImportSettings) -> Result<Self, IngestionError> {
        let mut config = AlgoliaConfig::new(
            settings.application_id.clone(),
            settings.api_key.clone(),
            settings.index_name.clone(),
        )
        .with_timeout(settings.timeout);

        if let Some(host) = &settings.host {
            config = config.with_host(host.clone());
        }

        info!(
            application_id = %settings.application_id,
            index_name = %settings.index_name,
            host = %config.write_host(),
            timeout_secs = settings.timeout.as_secs(),
            "Initializing dependencies"
        );

        let client = AlgoliaClient::new(config)
            .map_err(|e| IngestionError::config(format!("Failed to create Algolia client: {}", e)))?;

        Ok(Self::with_index(Arc::new(client)))
    }

    /// Wire the pipeline around an already constructed index.
    pub fn with_index(index: Arc<dyn RecordIndex>) -> Self {
        let uploader = BatchUploader::new(index);
        let orchestrator = Orchestrator::new(uploader);

        Self { orchestrator }
    }
}
