//! Algolia implementation of the record index interface.
//!
//! This module provides:
//! - `AlgoliaClient`: `RecordIndex` implementation over the Algolia REST API

mod client;

pub use client::AlgoliaClient;
