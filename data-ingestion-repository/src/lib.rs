//! # Data Ingestion Repository
//!
//! This crate provides the trait and implementations for writing records to
//! the remote search index. It includes definitions for errors, the
//! `RecordIndex` interface, and a concrete implementation for Algolia.

pub mod algolia;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod types;

pub use algolia::AlgoliaClient;
pub use config::AlgoliaConfig;
pub use errors::IndexError;
pub use interfaces::RecordIndex;
