//! # Data Ingestion Pipeline
//!
//! This crate provides the batch import pipeline that uploads a JSON data set
//! to a remote search index.
//!
//! ## Architecture
//!
//! The pipeline follows the Loader-Batcher-Uploader pattern:
//!
//! 1. **Loader**: Reads and validates the input file into an `ImportDataSet`
//! 2. **Batcher**: Splits the data set into fixed-size contiguous batches
//! 3. **Uploader**: Sends one batch to the index in a single write
//! 4. **Orchestrator**: Drives batches to completion and stops on the first failure

pub mod batcher;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod uploader;

pub use errors::ImportError;
pub use orchestrator::{ImportOutcome, Orchestrator, DEFAULT_BATCH_SIZE};
pub use uploader::{BatchUploader, UploadError};
