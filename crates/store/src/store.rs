use crate::error::Result;
use crate::types::StoredFile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A store of named byte blobs addressed by id
///
/// Enumeration order is ascending id, which equals insertion order; every
/// pooled or per-file query iterates files in this order.
pub trait FileStore {
    /// Store a blob and return its assigned id
    fn add(&mut self, name: &str, content: Vec<u8>) -> u64;

    /// Look up a file by id
    fn get(&self, id: u64) -> Option<&StoredFile>;

    /// All files in ascending id order
    fn list(&self) -> Vec<&StoredFile>;

    /// The most recently added file (highest id)
    fn latest(&self) -> Option<&StoredFile>;

    /// Number of stored files
    fn len(&self) -> usize;

    /// Check if the store holds no files
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory `FileStore` with JSON snapshot persistence
///
/// The `BTreeMap` keeps files sorted by id, so enumeration order falls out
/// of iteration and `latest` is the last entry.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InMemoryFileStore {
    files: BTreeMap<u64, StoredFile>,
    next_id: u64,
}

impl InMemoryFileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the whole store to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        log::info!("Saving store to {:?}", path.as_ref());
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load a store previously written by [`InMemoryFileStore::save`]
    ///
    /// Id assignment resumes where the saved store left off, so reloaded
    /// stores never reuse an id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        log::info!("Loading store from {:?}", path.as_ref());
        let data = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&data)?;
        log::info!("Loaded {} files", store.files.len());
        Ok(store)
    }
}

impl FileStore for InMemoryFileStore {
    fn add(&mut self, name: &str, content: Vec<u8>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        log::info!("Storing '{}' ({} bytes) as id {}", name, content.len(), id);
        self.files.insert(
            id,
            StoredFile {
                id,
                name: name.to_string(),
                content,
            },
        );
        id
    }

    fn get(&self, id: u64) -> Option<&StoredFile> {
        self.files.get(&id)
    }

    fn list(&self) -> Vec<&StoredFile> {
        self.files.values().collect()
    }

    fn latest(&self) -> Option<&StoredFile> {
        self.files.values().next_back()
    }

    fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = InMemoryFileStore::new();
        let a = store.add("a.txt", b"a".to_vec());
        let b = store.add("b.txt", b"b".to_vec());
        let c = store.add("c.txt", b"c".to_vec());
        assert!(a < b && b < c);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = InMemoryFileStore::new();
        let id = store.add("notes.txt", b"hello".to_vec());

        let file = store.get(id).unwrap();
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.content, b"hello");
        assert!(store.get(id + 1).is_none());
    }

    #[test]
    fn test_list_order_is_insertion_order() {
        let mut store = InMemoryFileStore::new();
        store.add("first.txt", Vec::new());
        store.add("second.txt", Vec::new());
        store.add("third.txt", Vec::new());

        let names: Vec<&str> = store.list().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first.txt", "second.txt", "third.txt"]);
    }

    #[test]
    fn test_latest_is_highest_id() {
        let mut store = InMemoryFileStore::new();
        assert!(store.latest().is_none());

        store.add("old.txt", Vec::new());
        store.add("new.txt", Vec::new());
        assert_eq!(store.latest().unwrap().name, "new.txt");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = InMemoryFileStore::new();
        store.add("a.txt", b"alpha\nbeta".to_vec());
        store.add("b.txt", b"gamma".to_vec());
        store.save(&path).unwrap();

        let mut loaded = InMemoryFileStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get(0).unwrap().content, b"alpha\nbeta");

        // Id assignment resumes, never reuses
        let next = loaded.add("c.txt", Vec::new());
        assert_eq!(next, 2);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = InMemoryFileStore::load(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(crate::StoreError::Io(_))));
    }
}
