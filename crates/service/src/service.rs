use crate::error::{Result, ServiceError};
use linestore_engine::{self as engine, Document};
use linestore_store::{FileStore, StoredFile};

/// Default limit for the longest-lines query over the latest file
pub const DEFAULT_LATEST_LIMIT: usize = 20;

/// Default limit for the pooled longest-lines query over all files
pub const DEFAULT_POOLED_LIMIT: usize = 100;

/// Query facade over a file store and the line-analysis engine
///
/// Every query re-materializes documents from the store's current bytes;
/// nothing is cached and stored content is never mutated. Randomized
/// queries take a fresh `thread_rng` per invocation.
pub struct LineQueryService<S> {
    store: S,
}

impl<S: FileStore> LineQueryService<S> {
    /// Wrap a store in the query facade
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap the facade, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Store a file's raw bytes and return its assigned id
    ///
    /// Content is not inspected here; bytes that fail to decode surface a
    /// `Decoding` error from the query that first touches them.
    pub fn upload(&mut self, name: &str, content: Vec<u8>) -> u64 {
        self.store.add(name, content)
    }

    /// One uniformly random line of the given file
    ///
    /// With `with_detail` the line is followed by the fixed diagnostic
    /// trailer (line index, file name, dominant character).
    pub fn random_line(&self, id: u64, with_detail: bool) -> Result<String> {
        let file = self.store.get(id).ok_or(ServiceError::NotFound(id))?;
        let doc = document(file)?;
        let mut rng = rand::thread_rng();

        let line = if with_detail {
            engine::pick_random_detailed(&doc, &mut rng)?.to_string()
        } else {
            engine::pick_random(&doc, &mut rng)?.to_string()
        };

        log::debug!("random_line(id={}, detail={})", id, with_detail);
        Ok(line)
    }

    /// One reversed random line per stored file, in store order
    pub fn random_lines_reversed(&self) -> Result<Vec<String>> {
        let files = self.store.list();
        let mut rng = rand::thread_rng();

        let mut lines = Vec::with_capacity(files.len());
        for file in files {
            let doc = document(file)?;
            lines.push(engine::pick_random_reversed(&doc, &mut rng)?);
        }

        log::debug!("random_lines_reversed over {} files", lines.len());
        Ok(lines)
    }

    /// The `n` longest lines of the most recently added file
    pub fn longest_lines_latest(&self, n: usize) -> Result<Vec<String>> {
        let file = self.store.latest().ok_or(ServiceError::NoDocuments)?;
        let doc = document(file)?;
        Ok(engine::n_longest(doc.lines, n))
    }

    /// The `n` longest lines pooled across all stored files
    ///
    /// Pooling order is store enumeration order, then line order within
    /// each file; the stable ranking keeps that order on length ties.
    pub fn longest_lines_all(&self, n: usize) -> Result<Vec<String>> {
        let mut pooled = Vec::new();
        for file in self.store.list() {
            pooled.extend(document(file)?.lines);
        }

        log::debug!("ranking {} pooled lines, keeping {}", pooled.len(), n);
        Ok(engine::n_longest(pooled, n))
    }
}

fn document(file: &StoredFile) -> Result<Document> {
    Ok(Document::from_bytes(&file.name, &file.content)?)
}
