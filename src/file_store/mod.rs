mod local;

pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Invalid storage name: {0}")]
    InvalidName(String),
}

/// Abstraction over stored-file backends.
///
/// `store` owns storage-name generation, so callers never invent keys of
/// their own; the returned name is the only handle to the bytes.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `data`, deriving the storage name from `original_name`'s
    /// extension. Returns the generated name.
    async fn store(&self, original_name: &str, data: Bytes) -> Result<String, FileStoreError>;
    async fn get(&self, name: &str) -> Result<Bytes, FileStoreError>;
    /// Remove a stored file. Deleting a missing file is a silent no-op.
    async fn delete(&self, name: &str) -> Result<(), FileStoreError>;
    async fn exists(&self, name: &str) -> Result<bool, FileStoreError>;
}

/// Generate a practically-unique storage name: unix milliseconds, a random
/// disambiguator, and the original file's extension when it has one.
fn storage_name(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let disambiguator = rand::random::<u32>() % 1_000_000_000;
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{millis}-{disambiguator}.{ext}"),
        None => format!("{millis}-{disambiguator}"),
    }
}
