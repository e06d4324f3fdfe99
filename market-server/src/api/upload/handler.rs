//! Image Upload Handler
//!
//! Handles product image uploads from admins.
//! Supports multiple image formats (PNG, JPEG, WebP) and converts to JPG.

use axum::Json;
use axum::extract::{Multipart, State};
use std::io::Cursor;
use std::path::PathBuf;

use crate::core::ServerState;
use shared::models::UploadResponse;
use shared::{AppError, AppResult, ErrorCode};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality (85% - keeps product photos presentable while controlling file size)
const JPEG_QUALITY: u8 = 85;

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> AppResult<()> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::new(ErrorCode::FileTooLarge)
            .with_detail("max_bytes", MAX_FILE_SIZE as u64)
            .with_detail("actual_bytes", data.len() as u64));
    }

    let ext_lower = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext_lower.as_str()) {
        return Err(AppError::new(ErrorCode::UnsupportedFileFormat)
            .with_detail("format", ext_lower)
            .with_detail("supported", SUPPORTED_FORMATS.join(", ")));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::with_message(
            ErrorCode::InvalidImageFile,
            format!("Invalid image file ({}): {}", ext_lower, e),
        ));
    }

    Ok(())
}

/// Re-encode as JPEG with fixed quality
fn compress_image(data: &[u8]) -> AppResult<Vec<u8>> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::with_message(ErrorCode::InvalidImageFile, e.to_string()))?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }

    Ok(buffer)
}

/// Upload image handler
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(f) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = f.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = f.file_name().map(|s| s.to_string());
            field_data = Some(
                f.bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?
                    .to_vec(),
            );
            break;
        }
    }

    let data = field_data.ok_or_else(|| AppError::new(ErrorCode::NoFileProvided))?;

    let filename = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field"))?;

    if data.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }

    // Extract file extension
    let ext = PathBuf::from(&filename)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_string()))
        .ok_or_else(|| {
            AppError::new(ErrorCode::UnsupportedFileFormat).with_detail("filename", filename.clone())
        })?;

    validate_image(&data, &ext)?;

    let compressed_data = compress_image(&data)?;
    let size = compressed_data.len();

    // Content-hashed storage deduplicates identical uploads
    let blob = state.blobs.store(compressed_data).await?;

    tracing::info!(
        original_name = %filename,
        size = %size,
        blob_id = %blob.id,
        "Image uploaded successfully"
    );

    Ok(Json(UploadResponse {
        blob,
        size,
        format: "jpg".to_string(),
    }))
}
