use anyhow::Result;
use iced::widget::image;

#[derive(Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    rgb_data: Vec<u8>,
}

impl std::fmt::Debug for CameraFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CameraFrame {
    pub fn build_from_rgb(width_pixels: u32, height_pixels: u32, rgb_data: Vec<u8>) -> Result<Self> {
        let expected_length = width_pixels as usize * height_pixels as usize * 3;

        if width_pixels == 0 || height_pixels == 0 {
            anyhow::bail!("Camera frame dimensions must be greater than zero");
        }

        if rgb_data.len() != expected_length {
            anyhow::bail!(
                "Camera frame holds {} bytes, expected {} for {}x{} RGB",
                rgb_data.len(),
                expected_length,
                width_pixels,
                height_pixels
            );
        }

        log::debug!(
            "[CAMERA_FRAME] building frame: {}x{}",
            width_pixels,
            height_pixels
        );

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            rgb_data,
        })
    }

    pub fn to_rgb_image(&self) -> Result<::image::RgbImage> {
        ::image::RgbImage::from_raw(self.width, self.height, self.rgb_data.clone())
            .ok_or_else(|| anyhow::anyhow!("Failed to create image from camera frame"))
    }

    pub fn to_preview_handle(&self) -> image::Handle {
        let rgba_data: Vec<u8> = self
            .rgb_data
            .chunks_exact(3)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2], 255])
            .collect();

        image::Handle::from_rgba(self.width, self.height, rgba_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_rgb_accepts_matching_buffer() {
        let frame = CameraFrame::build_from_rgb(4, 2, vec![0u8; 4 * 2 * 3]).unwrap();

        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 2);
    }

    #[test]
    fn test_build_from_rgb_rejects_short_buffer() {
        let result = CameraFrame::build_from_rgb(4, 2, vec![0u8; 10]);

        assert!(result.is_err());
    }

    #[test]
    fn test_build_from_rgb_rejects_empty_dimensions() {
        let result = CameraFrame::build_from_rgb(0, 2, Vec::new());

        assert!(result.is_err());
    }

    #[test]
    fn test_to_rgb_image_preserves_pixels() {
        let frame = CameraFrame::build_from_rgb(1, 1, vec![10, 20, 30]).unwrap();

        let image = frame.to_rgb_image().unwrap();

        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30]);
    }
}
