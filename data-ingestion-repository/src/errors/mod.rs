//! Error types for the record index repository.

mod index_error;

pub use index_error::IndexError;
