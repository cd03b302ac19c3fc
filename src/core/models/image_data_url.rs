use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use crate::global_constants::FALLBACK_IMAGE_MIME_TYPE;

const DATA_URL_IMAGE_PREFIX: &str = "data:image/";
const DATA_URL_BASE64_MARKER: &str = ";base64,";
const FORWARDED_IMAGE_SUBTYPES: [&str; 5] = ["png", "jpeg", "webp", "heic", "heif"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMimeType(String);

impl ImageMimeType {
    pub fn from_image_format(format: image::ImageFormat) -> Self {
        Self(format.to_mime_type().to_string())
    }

    pub fn jpeg() -> Self {
        Self(FALLBACK_IMAGE_MIME_TYPE.to_string())
    }

    /// Maps a data-URL subtype onto a type the service accepts.
    ///
    /// `jpg` is an alias of `jpeg`; anything outside the accepted set is sent as JPEG.
    fn from_data_url_subtype(subtype: &str) -> Self {
        let subtype = subtype.to_ascii_lowercase();
        let subtype = match subtype.as_str() {
            "jpg" | "pjpeg" => "jpeg",
            other => other,
        };

        if FORWARDED_IMAGE_SUBTYPES.contains(&subtype) {
            return Self(format!("image/{}", subtype));
        }

        log::warn!(
            "[IMAGE_PAYLOAD] image/{} is not accepted by the service, sending as {}",
            subtype,
            FALLBACK_IMAGE_MIME_TYPE
        );
        Self::jpeg()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn encode_image_data_url(mime_type: &ImageMimeType, image_bytes: &[u8]) -> String {
    format!(
        "data:{}{}{}",
        mime_type,
        DATA_URL_BASE64_MARKER,
        STANDARD.encode(image_bytes)
    )
}

/// Splits `data:image/<subtype>;base64,<body>` into its MIME type and body.
///
/// Returns `None` when the input does not carry a recognised image prefix.
pub fn split_image_data_url(input: &str) -> Option<(ImageMimeType, &str)> {
    let remainder = input.strip_prefix(DATA_URL_IMAGE_PREFIX)?;
    let (subtype, body) = remainder.split_once(DATA_URL_BASE64_MARKER)?;

    let is_valid_subtype = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-'));

    if !is_valid_subtype {
        return None;
    }

    Some((ImageMimeType::from_data_url_subtype(subtype), body))
}

/// Strips the data-URL prefix if present. Bare base64 input is assumed to be JPEG.
pub fn strip_image_data_url_prefix(input: &str) -> (ImageMimeType, &str) {
    split_image_data_url(input).unwrap_or_else(|| (ImageMimeType::jpeg(), input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_image_data_url_extracts_mime_and_body() {
        let (mime, body) = split_image_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();

        assert_eq!(mime.as_str(), "image/png");
        assert_eq!(body, "iVBORw0KGgo=");
    }

    #[test]
    fn test_unaccepted_subtype_is_sent_as_jpeg() {
        let (mime, body) = split_image_data_url("data:image/svg+xml;base64,PHN2Zz4=").unwrap();

        assert_eq!(mime, ImageMimeType::jpeg());
        assert_eq!(body, "PHN2Zz4=");
    }

    #[test]
    fn test_jpg_alias_maps_to_jpeg() {
        let (mime, body) = split_image_data_url("data:image/jpg;base64,/9j/").unwrap();

        assert_eq!(mime.as_str(), "image/jpeg");
        assert_eq!(body, "/9j/");
    }

    #[test]
    fn test_accepted_subtypes_are_forwarded() {
        let (webp, _) = split_image_data_url("data:image/webp;base64,UklG").unwrap();
        let (heic, _) = split_image_data_url("data:image/HEIC;base64,AAAA").unwrap();

        assert_eq!(webp.as_str(), "image/webp");
        assert_eq!(heic.as_str(), "image/heic");
    }

    #[test]
    fn test_split_image_data_url_rejects_non_image_prefix() {
        assert!(split_image_data_url("data:text/plain;base64,aGVsbG8=").is_none());
        assert!(split_image_data_url("data:image/;base64,aGVsbG8=").is_none());
        assert!(split_image_data_url("data:image/png,rawbytes").is_none());
    }

    #[test]
    fn test_strip_prefix_falls_back_to_jpeg_for_bare_base64() {
        let (mime, body) = strip_image_data_url_prefix("/9j/4AAQSkZJRg==");

        assert_eq!(mime, ImageMimeType::jpeg());
        assert_eq!(body, "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_encode_image_data_url_uses_standard_base64() {
        let url = encode_image_data_url(&ImageMimeType::jpeg(), &[0xff, 0xd8, 0xff]);

        assert_eq!(url, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_mime_type_from_image_format() {
        let mime = ImageMimeType::from_image_format(image::ImageFormat::WebP);

        assert_eq!(mime.as_str(), "image/webp");
    }
}
