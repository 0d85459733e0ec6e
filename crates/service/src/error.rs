use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Referenced file id does not exist in the store
    #[error("file with id {0} not found")]
    NotFound(u64),

    /// A query over the latest file ran against an empty store
    #[error("no files have been uploaded yet")]
    NoDocuments,

    /// Decoding or selection failure from the line-analysis engine
    #[error("{0}")]
    Engine(#[from] linestore_engine::EngineError),
}
