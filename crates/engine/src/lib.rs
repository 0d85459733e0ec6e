//! # Linestore Engine
//!
//! Pure line-analysis operations over in-memory documents.
//!
//! The engine turns raw byte content into ordered line sequences and
//! computes the statistics the query surface needs: uniform random
//! selection (plain, annotated, or reversed), character frequency with a
//! deterministic tie-break, and stable top-N ranking by line length.
//!
//! ## Architecture
//!
//! ```text
//! (name, bytes)
//!     │
//!     ├──> split_lines ──> Document { name, lines }
//!     │
//!     ├──> pick_random / pick_random_detailed
//!     │      └─> LineDetail (index, source, dominant char)
//!     │
//!     ├──> pick_random_reversed
//!     │
//!     └──> n_longest (stable, length-descending)
//! ```
//!
//! Every operation is a pure function over already-materialized data: no
//! I/O, no shared state, no caching. Randomized operations take the
//! generator from the caller, so each invocation can use its own.
//!
//! ## Example
//!
//! ```rust
//! use linestore_engine::{n_longest, pick_random, Document};
//!
//! let doc = Document::from_bytes("notes.txt", b"short\na longer line\nmid").unwrap();
//!
//! let top = n_longest(doc.lines.clone(), 2);
//! assert_eq!(top, vec!["a longer line", "short"]);
//!
//! let mut rng = rand::thread_rng();
//! let line = pick_random(&doc, &mut rng).unwrap();
//! assert!(doc.lines.iter().any(|l| l == line));
//! ```

mod error;
mod frequency;
mod random;
mod ranking;
mod reversed;
mod splitter;
mod types;

pub use error::{EngineError, Result};
pub use frequency::most_frequent_char;
pub use random::{pick_random, pick_random_detailed};
pub use ranking::n_longest;
pub use reversed::pick_random_reversed;
pub use splitter::split_lines;
pub use types::{Document, LineDetail};
