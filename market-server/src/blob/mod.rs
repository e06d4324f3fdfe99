//! Blob Store
//!
//! Opaque store-and-retrieve-by-reference for product images. The rest of
//! the server only ever sees a [`BlobRef`]; swapping the backing store for
//! a remote one is a matter of another trait impl.
//!
//! The local backend names files by content hash, so uploading the same
//! bytes twice yields the same reference and nothing is stored twice.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use shared::models::BlobRef;
use shared::{AppError, AppResult, ErrorCode};
use std::path::PathBuf;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist a blob and return its reference.
    async fn store(&self, data: Vec<u8>) -> AppResult<BlobRef>;

    /// Read a blob back by id.
    async fn open(&self, id: &str) -> AppResult<Vec<u8>>;

    /// The URL under which a stored blob is served.
    fn url_for(&self, id: &str) -> String;
}

/// Filesystem-backed store under the server's work directory.
pub struct LocalBlobStore {
    dir: PathBuf,
}

impl LocalBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, id: &str) -> AppResult<PathBuf> {
        // Ids are hex digests; anything else (path separators in
        // particular) is rejected before it touches the filesystem.
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::new(ErrorCode::BlobNotFound).with_detail("id", id.to_string()));
        }
        Ok(self.dir.join(format!("{}.jpg", id)))
    }
}

fn content_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, data: Vec<u8>) -> AppResult<BlobRef> {
        let id = content_hash(&data);
        let path = self.path_for(&id)?;

        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(id = %id, "Blob already stored, reusing");
        } else {
            tokio::fs::create_dir_all(&self.dir)
                .await
                .map_err(|e| AppError::storage(format!("Failed to create blob dir: {}", e)))?;
            tokio::fs::write(&path, &data)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write blob: {}", e)))?;
            tracing::info!(id = %id, size = data.len(), "Blob stored");
        }

        Ok(BlobRef {
            url: self.url_for(&id),
            id,
        })
    }

    async fn open(&self, id: &str) -> AppResult<Vec<u8>> {
        let path = self.path_for(id)?;
        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::new(ErrorCode::BlobNotFound).with_detail("id", id.to_string())
            } else {
                AppError::storage(format!("Failed to read blob: {}", e))
            }
        })
    }

    fn url_for(&self, id: &str) -> String {
        format!("/blobs/{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, LocalBlobStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(dir.path().join("blobs"));
        (dir, store)
    }

    #[tokio::test]
    async fn test_store_and_open() {
        let (_dir, store) = store();
        let blob = store.store(b"jpeg bytes".to_vec()).await.unwrap();

        assert_eq!(blob.url, format!("/blobs/{}", blob.id));
        let data = store.open(&blob.id).await.unwrap();
        assert_eq!(data, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_same_content_same_ref() {
        let (_dir, store) = store();
        let first = store.store(b"jpeg bytes".to_vec()).await.unwrap();
        let second = store.store(b"jpeg bytes".to_vec()).await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_open_missing() {
        let (_dir, store) = store();
        let err = store.open("deadbeef").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BlobNotFound);
    }

    #[tokio::test]
    async fn test_open_rejects_traversal() {
        let (_dir, store) = store();
        let err = store.open("../secrets").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BlobNotFound);
    }
}
