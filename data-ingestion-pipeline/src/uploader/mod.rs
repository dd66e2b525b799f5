//! Uploader module for the import pipeline.
//!
//! Sends one batch to the record index per call.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use data_ingestion_repository::{IndexError, RecordIndex};
use data_ingestion_shared::Batch;

/// A batch the index could not accept.
///
/// The pipeline does not distinguish causes; `cause` is kept for reporting.
#[derive(Error, Debug, Clone)]
#[error("Batch at offset {offset} ({len} records) failed: {cause}")]
pub struct UploadError {
    #[source]
    pub cause: IndexError,
    pub offset: usize,
    pub len: usize,
}

/// Uploads batches to a record index.
///
/// Makes exactly one attempt per batch. Retrying is left to the caller.
#[derive(Clone)]
pub struct BatchUploader {
    index: Arc<dyn RecordIndex>,
}

impl BatchUploader {
    /// Create an uploader writing to `index`.
    pub fn new(index: Arc<dyn RecordIndex>) -> Self {
        Self { index }
    }

    /// Name of the index batches are written to.
    pub fn index_name(&self) -> &str {
        self.index.index_name()
    }

    /// Send `batch` as a single write.
    #[instrument(skip(self, batch), fields(index = %self.index.index_name(), offset = batch.offset, count = batch.len()))]
    pub async fn upload(&self, batch: &Batch<'_>) -> Result<(), UploadError> {
        match self.index.save_records(batch.records).await {
            Ok(()) => {
                debug!("Batch uploaded");
                Ok(())
            }
            Err(cause) => {
                warn!(error = %cause, "Batch upload failed");
                Err(UploadError {
                    cause,
                    offset: batch.offset,
                    len: batch.len(),
                })
            }
        }
    }
}
