//! Orchestrator module for the import pipeline.
//!
//! Drives the batcher and uploader over a data set and decides when to stop.

mod outcome;

pub use outcome::ImportOutcome;

use tracing::{debug, error, info, instrument};

use crate::batcher::next_batch;
use crate::errors::ImportError;
use crate::uploader::{BatchUploader, UploadError};
use data_ingestion_shared::{Batch, ImportDataSet};

/// Batch size used when the caller does not supply one.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Counters for one run. Lives only as long as the run.
#[derive(Debug, Default)]
struct ImportRunState {
    offset: usize,
    records_processed: usize,
}

impl ImportRunState {
    fn advance(&mut self, len: usize) {
        self.offset += len;
        self.records_processed += len;
    }
}

/// Orchestrator that uploads a data set batch by batch.
///
/// A run moves from idle to running once the batch size is validated, and ends
/// either completed (the batcher returned an empty batch) or aborted (a batch
/// upload failed). Batches are uploaded one at a time in source order, and
/// nothing is sent after the first failure.
pub struct Orchestrator {
    uploader: BatchUploader,
}

impl Orchestrator {
    /// Create a new orchestrator writing through `uploader`.
    pub fn new(uploader: BatchUploader) -> Self {
        Self { uploader }
    }

    /// Run the import.
    ///
    /// `on_progress` is called with the length of each uploaded batch, in
    /// ascending offset order. `on_error` is called once with the failing
    /// batch before the run aborts. Neither hook can change control flow.
    ///
    /// # Returns
    ///
    /// * `Ok(ImportOutcome::Completed)` - If every batch was uploaded
    /// * `Ok(ImportOutcome::Failed)` - If a batch failed; later batches were not sent
    /// * `Err(ImportError::InvalidConfiguration)` - If `batch_size` is zero
    #[instrument(
        skip(self, dataset, on_progress, on_error),
        fields(index = %self.uploader.index_name(), records = dataset.len())
    )]
    pub async fn run<P, E>(
        &self,
        dataset: &ImportDataSet,
        batch_size: usize,
        mut on_progress: P,
        mut on_error: E,
    ) -> Result<ImportOutcome, ImportError>
    where
        P: FnMut(usize),
        E: FnMut(&UploadError, &Batch<'_>),
    {
        if batch_size == 0 {
            return Err(ImportError::invalid_configuration(
                "Batch size must be a positive integer",
            ));
        }

        info!("Starting import");

        let mut state = ImportRunState::default();

        loop {
            let batch = next_batch(dataset, state.offset, batch_size);
            if batch.is_empty() {
                info!(records_processed = state.records_processed, "Import completed");
                return Ok(ImportOutcome::Completed {
                    records_processed: state.records_processed,
                });
            }

            match self.uploader.upload(&batch).await {
                Ok(()) => {
                    state.advance(batch.len());
                    debug!(
                        offset = batch.offset,
                        count = batch.len(),
                        records_processed = state.records_processed,
                        "Batch committed"
                    );
                    on_progress(batch.len());
                }
                Err(err) => {
                    error!(
                        offset = batch.offset,
                        count = batch.len(),
                        records_processed = state.records_processed,
                        error = %err.cause,
                        "Aborting import after failed batch"
                    );
                    on_error(&err, &batch);
                    return Ok(ImportOutcome::Failed {
                        error: err,
                        batch: batch.to_owned_batch(),
                        records_processed: state.records_processed,
                    });
                }
            }
        }
    }
}
