use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{storage_name, FileStore, FileStoreError};

/// File store over the upload directory.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Resolve a storage name, rejecting anything that could escape the
    /// upload directory.
    fn file_path(&self, name: &str) -> Result<PathBuf, FileStoreError> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(FileStoreError::InvalidName(name.to_string()));
        }
        Ok(self.base_path.join(name))
    }
}

#[async_trait]
impl FileStore for LocalStore {
    async fn store(&self, original_name: &str, data: Bytes) -> Result<String, FileStoreError> {
        let name = storage_name(original_name);
        let path = self.file_path(&name)?;
        tokio::fs::write(&path, &data).await?;
        Ok(name)
    }

    async fn get(&self, name: &str) -> Result<Bytes, FileStoreError> {
        let path = self.file_path(name)?;
        if !path.exists() {
            return Err(FileStoreError::NotFound(name.to_string()));
        }
        let data = tokio::fs::read(&path).await?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, name: &str) -> Result<(), FileStoreError> {
        let path = self.file_path(name)?;
        if path.exists() {
            tokio::fs::remove_file(&path).await?;
        }
        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool, FileStoreError> {
        let path = self.file_path(name)?;
        Ok(path.exists())
    }
}
