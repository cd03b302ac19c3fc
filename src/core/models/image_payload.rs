use anyhow::{Context, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};

use super::camera_frame::CameraFrame;
use super::image_data_url::{encode_image_data_url, ImageMimeType};

/// An image ready to be sent for analysis.
///
/// Built once per capture and never mutated: a new capture produces a new
/// payload that replaces the old one.
#[derive(Clone)]
pub struct ImagePayload {
    preview: String,
    mime_type: ImageMimeType,
    source_path: Option<PathBuf>,
    image_handle: image::Handle,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("mime_type", &self.mime_type)
            .field("source_path", &self.source_path)
            .field("preview_length", &self.preview.len())
            .finish()
    }
}

impl ImagePayload {
    /// Builds a payload from the raw bytes of an image file.
    ///
    /// PNG, JPEG and WebP are forwarded untouched. Other decodable formats are
    /// re-encoded as JPEG so the remote service always receives a type it accepts.
    pub fn from_encoded_bytes(
        image_bytes: Vec<u8>,
        source_path: Option<PathBuf>,
        jpeg_quality: u8,
    ) -> Result<Self> {
        let format = ::image::guess_format(&image_bytes)
            .context("File contents are not a recognised image format")?;

        log::debug!(
            "[IMAGE_PAYLOAD] detected {:?} ({} bytes) from {:?}",
            format,
            image_bytes.len(),
            source_path
        );

        let (mime_type, forwarded_bytes) = if Self::is_forwarded_verbatim(format) {
            (ImageMimeType::from_image_format(format), image_bytes)
        } else {
            let decoded = ::image::load_from_memory_with_format(&image_bytes, format)
                .with_context(|| format!("Failed to decode {:?} image", format))?;
            log::info!(
                "[IMAGE_PAYLOAD] re-encoding {:?} image as JPEG for upload",
                format
            );
            (
                ImageMimeType::jpeg(),
                encode_jpeg(&decoded.to_rgb8(), jpeg_quality)?,
            )
        };

        Ok(Self::assemble(mime_type, forwarded_bytes, source_path))
    }

    pub fn from_camera_frame(frame: &CameraFrame, jpeg_quality: u8) -> Result<Self> {
        let rgb_image = frame.to_rgb_image()?;
        let jpeg_bytes = encode_jpeg(&rgb_image, jpeg_quality)?;

        log::info!(
            "[IMAGE_PAYLOAD] encoded {}x{} camera frame to {} JPEG bytes",
            frame.width,
            frame.height,
            jpeg_bytes.len()
        );

        Ok(Self::assemble(ImageMimeType::jpeg(), jpeg_bytes, None))
    }

    fn assemble(mime_type: ImageMimeType, image_bytes: Vec<u8>, source_path: Option<PathBuf>) -> Self {
        let preview = encode_image_data_url(&mime_type, &image_bytes);

        Self {
            preview,
            mime_type,
            source_path,
            image_handle: image::Handle::from_bytes(image_bytes),
        }
    }

    fn is_forwarded_verbatim(format: ::image::ImageFormat) -> bool {
        matches!(
            format,
            ::image::ImageFormat::Png | ::image::ImageFormat::Jpeg | ::image::ImageFormat::WebP
        )
    }

    /// The base64 data URL, e.g. `data:image/jpeg;base64,...`.
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn mime_type(&self) -> &ImageMimeType {
        &self.mime_type
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn image_handle(&self) -> &image::Handle {
        &self.image_handle
    }
}

pub fn encode_jpeg(rgb_image: &::image::RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut encoder = ::image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .encode(
            rgb_image.as_raw(),
            rgb_image.width(),
            rgb_image.height(),
            ::image::ExtendedColorType::Rgb8,
        )
        .context("Failed to encode JPEG")?;

    Ok(buffer)
}
