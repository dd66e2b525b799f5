//! Interface definitions for the remote record index.
//!
//! This module defines the abstract `RecordIndex` trait that allows for
//! dependency injection and swappable index backends.

mod record_index;

pub use record_index::RecordIndex;
