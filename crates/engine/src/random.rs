//! Uniform random line selection.
//!
//! The generator is supplied by the caller so the functions stay pure and
//! deterministic under test. Production callers should hand in a fresh
//! `rand::thread_rng()` per invocation; sharing a non-thread-safe generator
//! across tasks would bias or race the draws.

use crate::error::{EngineError, Result};
use crate::frequency;
use crate::types::{Document, LineDetail};
use rand::Rng;

/// Draw a uniform line index, guarding the zero-line case
pub(crate) fn random_index<R: Rng>(doc: &Document, rng: &mut R) -> Result<usize> {
    if doc.lines.is_empty() {
        return Err(EngineError::EmptyDocument(doc.name.clone()));
    }
    Ok(rng.gen_range(0..doc.lines.len()))
}

/// Pick one line uniformly at random
pub fn pick_random<'a, R: Rng>(doc: &'a Document, rng: &mut R) -> Result<&'a str> {
    let index = random_index(doc, rng)?;
    Ok(&doc.lines[index])
}

/// Pick one line uniformly at random, with diagnostic metadata
///
/// The dominant character is computed over the line with spaces removed;
/// the returned text itself is unmodified.
pub fn pick_random_detailed<R: Rng>(doc: &Document, rng: &mut R) -> Result<LineDetail> {
    let index = random_index(doc, rng)?;
    let text = &doc.lines[index];

    Ok(LineDetail {
        text: text.clone(),
        index,
        source_name: doc.name.clone(),
        dominant_char: frequency::most_frequent_char(text),
    })
}
