//! Terminal result of an import run.

use crate::errors::ImportError;
use crate::uploader::UploadError;
use data_ingestion_shared::FailedBatch;

/// How an import run ended.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// Every batch was uploaded.
    Completed { records_processed: usize },
    /// A batch failed and the run stopped there.
    Failed {
        /// Why the batch failed.
        error: UploadError,
        /// The batch that failed.
        batch: FailedBatch,
        /// Records committed before the failing batch.
        records_processed: usize,
    },
}

impl ImportOutcome {
    /// Records durably uploaded by the run.
    pub fn records_processed(&self) -> usize {
        match self {
            Self::Completed { records_processed } | Self::Failed { records_processed, .. } => {
                *records_processed
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Convert into a `Result`, turning a failed run into [`ImportError::Upload`].
    pub fn into_result(self) -> Result<usize, ImportError> {
        match self {
            Self::Completed { records_processed } => Ok(records_processed),
            Self::Failed {
                error,
                batch,
                records_processed,
            } => Err(ImportError::Upload {
                source: error.cause,
                offset: batch.offset,
                len: batch.len(),
                records_processed,
            }),
        }
    }
}
