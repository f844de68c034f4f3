mod json;
pub mod models;

pub use json::JsonCatalog;

use async_trait::async_trait;
use thiserror::Error;

use models::Book;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstraction over the persisted book catalog.
///
/// The flat-file implementation rewrites the whole document on every
/// mutation; handlers only see this trait, so a real embedded or networked
/// store could replace it without touching them.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Read the full ordered sequence of book records.
    async fn load(&self) -> Result<Vec<Book>, CatalogError>;
    /// Append a record to the end of the catalog.
    async fn append(&self, book: Book) -> Result<(), CatalogError>;
    /// Remove the first record with a matching id and return it, or `None`
    /// when no record matches (the document is left untouched).
    async fn remove(&self, id: &str) -> Result<Option<Book>, CatalogError>;
}
