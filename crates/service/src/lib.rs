//! # Linestore Service
//!
//! The query surface over stored files: one uniformly random line of a
//! given file (optionally with its diagnostic trailer), one reversed
//! random line per stored file, and the longest lines of the latest file
//! or of the whole store pooled together.
//!
//! [`LineQueryService`] is generic over any [`linestore_store::FileStore`];
//! it re-reads the store on every query and owns no state of its own, so a
//! presentation layer can hold one instance per store snapshot.

mod error;
mod service;

pub use error::{Result, ServiceError};
pub use service::{LineQueryService, DEFAULT_LATEST_LIMIT, DEFAULT_POOLED_LIMIT};
