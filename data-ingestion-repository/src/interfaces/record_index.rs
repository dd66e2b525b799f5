//! Record index trait definition.

use async_trait::async_trait;

use crate::errors::IndexError;
use data_ingestion_shared::Record;

/// Abstract interface for the remote search index a run writes into.
///
/// An implementation is bound to one index name and one set of credentials
/// when it is constructed. The import pipeline depends only on the success or
/// failure of [`save_records`](RecordIndex::save_records).
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait RecordIndex: Send + Sync {
    /// Name of the index records are written to.
    fn index_name(&self) -> &str;

    /// Save records to the index as one write operation.
    ///
    /// Implementations make exactly one attempt and must not modify the
    /// records they are given.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service accepted every record
    /// * `Err(IndexError)` - If the write failed for any reason
    async fn save_records(&self, records: &[Record]) -> Result<(), IndexError>;
}
