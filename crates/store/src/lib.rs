//! # Linestore Store
//!
//! Id-addressed storage of named byte blobs.
//!
//! The [`FileStore`] trait is the seam the query layer consumes: add a
//! blob, fetch one by id, enumerate all in insertion order, fetch the most
//! recently added. [`InMemoryFileStore`] is the bundled implementation,
//! with whole-store JSON snapshots for persistence across CLI invocations.
//!
//! Content is kept as raw bytes; decoding and any line-level interpretation
//! belong to the engine, not the store.

mod error;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use store::{FileStore, InMemoryFileStore};
pub use types::StoredFile;
