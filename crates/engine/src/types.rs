use crate::error::Result;
use crate::splitter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An in-memory document: a named, ordered sequence of lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Name of the source file
    pub name: String,

    /// Lines in original order of appearance
    pub lines: Vec<String>,
}

impl Document {
    /// Create a document from already-split lines
    #[must_use]
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Decode raw content bytes and split them into a document
    pub fn from_bytes(name: impl Into<String>, content: &[u8]) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            lines: splitter::split_lines(content)?,
        })
    }

    /// Number of lines in this document
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the document has no lines at all
    ///
    /// Splitting never produces zero lines, so this only fires when a
    /// document was constructed directly from an empty line vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Diagnostic metadata for one randomly selected line
///
/// Purely derived, never stored. The `Display` impl renders the fixed
/// trailer format consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineDetail {
    /// The selected line, unmodified
    pub text: String,

    /// Zero-based index of the line within its document
    pub index: usize,

    /// Name of the document the line came from
    pub source_name: String,

    /// Most frequent character of the line, `None` for an empty line
    pub dominant_char: Option<char>,
}

impl fmt::Display for LineDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nlineNumber: {}\nfileName: {}\nmostUsedLetter: ",
            self.text, self.index, self.source_name
        )?;
        if let Some(c) = self.dominant_char {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
