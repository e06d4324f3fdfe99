//! Blob Reference Model

use serde::{Deserialize, Serialize};

/// Opaque reference returned by the blob store
///
/// The id is content-derived; the URL resolves to the stored bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRef {
    pub id: String,
    pub url: String,
}

/// Upload response returned by the upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub blob: BlobRef,
    pub size: usize,
    pub format: String,
}
