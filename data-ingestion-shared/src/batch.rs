//! Contiguous groups of records sent to the index in one call.

use crate::Record;

/// A borrowed, contiguous slice of an [`ImportDataSet`](crate::ImportDataSet).
///
/// `offset` is the position of the first record in the source data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Batch<'a> {
    /// Position of the first record in the data set.
    pub offset: usize,
    /// The records in this batch, in source order.
    pub records: &'a [Record],
}

impl<'a> Batch<'a> {
    /// Create a batch starting at `offset`.
    pub fn new(offset: usize, records: &'a [Record]) -> Self {
        Self { offset, records }
    }

    /// An empty batch at `offset`, meaning there is no more work.
    pub fn empty(offset: usize) -> Self {
        Self { offset, records: &[] }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Offset one past the last record of the batch.
    pub fn end(&self) -> usize {
        self.offset + self.records.len()
    }

    /// Copy this batch so it can outlive the data set it borrows from.
    pub fn to_owned_batch(&self) -> FailedBatch {
        FailedBatch {
            offset: self.offset,
            records: self.records.to_vec(),
        }
    }
}

/// An owned copy of a batch that could not be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedBatch {
    /// Position of the first record in the data set.
    pub offset: usize,
    /// The records that were sent.
    pub records: Vec<Record>,
}

#[allow(clippy::len_without_is_empty)]
impl FailedBatch {
    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
