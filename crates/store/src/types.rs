use serde::{Deserialize, Serialize};

/// A stored file: an id-addressed named byte blob
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFile {
    /// Store-assigned id, unique and monotonically increasing
    pub id: u64,

    /// Original file name
    pub name: String,

    /// Raw content bytes, kept exactly as uploaded
    pub content: Vec<u8>,
}
