//! Batcher module for the import pipeline.
//!
//! Splits a data set into fixed-size contiguous batches. Pure functions only.

use data_ingestion_shared::{Batch, ImportDataSet};

/// Return the batch covering `[offset, offset + batch_size)`, clipped to the data set.
///
/// An empty batch means there is no more work. `batch_size` must be at least 1;
/// callers validate it before starting a run.
pub fn next_batch(dataset: &ImportDataSet, offset: usize, batch_size: usize) -> Batch<'_> {
    debug_assert!(batch_size >= 1, "batch size must be positive");

    let records = dataset.records();
    if offset >= records.len() {
        return Batch::empty(offset);
    }

    let end = offset.saturating_add(batch_size).min(records.len());
    Batch::new(offset, &records[offset..end])
}

/// Iterate over every batch of `dataset` in source order.
pub fn batches(dataset: &ImportDataSet, batch_size: usize) -> Batches<'_> {
    Batches {
        dataset,
        offset: 0,
        batch_size,
    }
}

/// Iterator over the batches of a data set, built on [`next_batch`].
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    dataset: &'a ImportDataSet,
    offset: usize,
    batch_size: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.batch_size == 0 {
            return None;
        }

        let batch = next_batch(self.dataset, self.offset, self.batch_size);
        if batch.is_empty() {
            return None;
        }

        self.offset = batch.end();
        Some(batch)
    }
}
