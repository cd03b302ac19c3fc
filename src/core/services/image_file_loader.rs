use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::models::ImagePayload;
use crate::global_constants::{LOG_TAG_CAPTURE, SNAPSHOT_JPEG_QUALITY, SUPPORTED_IMAGE_EXTENSIONS};

pub async fn load_image_file(path: PathBuf) -> Result<ImagePayload> {
    log::info!("{} reading image file {:?}", LOG_TAG_CAPTURE, path);

    let image_bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {:?}", path))?;

    let payload = ImagePayload::from_encoded_bytes(image_bytes, Some(path), SNAPSHOT_JPEG_QUALITY)?;

    log::info!(
        "{} image loaded as {} ({} data URL characters)",
        LOG_TAG_CAPTURE,
        payload.mime_type(),
        payload.preview().len()
    );

    Ok(payload)
}

/// Cheap extension check used to ignore obviously unrelated dropped files.
pub fn has_supported_image_extension(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let extension = extension.to_ascii_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str())
        })
        .unwrap_or(false)
}
