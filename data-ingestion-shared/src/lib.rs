//! # Data Ingestion Shared
//!
//! Shared types for the record import pipeline.
//!
//! Records are opaque JSON values. The pipeline only counts and groups them;
//! it never looks inside.

mod batch;
mod dataset;

pub use batch::{Batch, FailedBatch};
pub use dataset::ImportDataSet;

/// A single unit of data to be indexed.
pub type Record = serde_json::Value;
