use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::models::Book;
use super::{CatalogError, CatalogStore};

/// Catalog backed by a single pretty-printed JSON array on disk.
///
/// Every mutation is a whole-document read-modify-write with no
/// cross-caller locking: two interleaved writers can lose an update
/// (last-writer-wins on the document). Acceptable at demo scale.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Open the catalog at `path`, creating an empty document if absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            std::fs::write(&path, b"[]")?;
        }
        Ok(Self { path })
    }

    async fn read_all(&self) -> Result<Vec<Book>, CatalogError> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    async fn write_all(&self, books: &[Book]) -> Result<(), CatalogError> {
        let data = serde_json::to_vec_pretty(books)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for JsonCatalog {
    async fn load(&self) -> Result<Vec<Book>, CatalogError> {
        self.read_all().await
    }

    async fn append(&self, book: Book) -> Result<(), CatalogError> {
        let mut books = self.read_all().await?;
        books.push(book);
        self.write_all(&books).await
    }

    async fn remove(&self, id: &str) -> Result<Option<Book>, CatalogError> {
        let mut books = self.read_all().await?;
        let Some(index) = books.iter().position(|b| b.id == id) else {
            return Ok(None);
        };
        let removed = books.remove(index);
        self.write_all(&books).await?;
        Ok(Some(removed))
    }
}
