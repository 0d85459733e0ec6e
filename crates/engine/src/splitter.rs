//! Byte-content decoding and line splitting.
//!
//! Decoding is strict: invalid UTF-8 is an error, never silently replaced.
//! Splitting is on `'\n'` only and keeps empty segments, interior and
//! trailing alike, so `"a\n"` yields two lines and empty content yields one
//! empty line. Line counts are therefore exact for content that ends with a
//! newline, unlike split implementations that drop trailing empties.

use crate::error::Result;

/// Decode content bytes as UTF-8 and split into lines
///
/// Never returns an empty vector: splitting the empty string produces a
/// single empty line.
pub fn split_lines(content: &[u8]) -> Result<Vec<String>> {
    let text = String::from_utf8(content.to_vec())?;
    Ok(text.split('\n').map(str::to_owned).collect())
}
