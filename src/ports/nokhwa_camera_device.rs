use anyhow::{Context, Result};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
};
use nokhwa::Camera;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::core::models::CameraFrame;
use crate::global_constants::{
    CAMERA_FRAME_RATE, CAMERA_RESOLUTION_HEIGHT, CAMERA_RESOLUTION_WIDTH, LOG_TAG_CAMERA,
};

pub struct NokhwaCameraDevice {
    camera_index: u32,
}

impl NokhwaCameraDevice {
    pub fn initialize(camera_index: u32) -> Self {
        log::debug!(
            "{} initializing camera device at index {}",
            LOG_TAG_CAMERA,
            camera_index
        );

        #[cfg(target_os = "macos")]
        nokhwa::nokhwa_initialize(|granted| {
            log::info!("{} camera authorization granted: {}", LOG_TAG_CAMERA, granted);
        });

        Self { camera_index }
    }

    fn is_authorized() -> bool {
        #[cfg(target_os = "macos")]
        {
            nokhwa::nokhwa_check()
        }
        #[cfg(not(target_os = "macos"))]
        {
            true
        }
    }

    /// Frames are grabbed on the UI thread, so ask for a preview-sized stream
    /// instead of the sensor's full resolution.
    fn requested_format_type() -> RequestedFormatType {
        RequestedFormatType::Closest(CameraFormat::new(
            Resolution::new(CAMERA_RESOLUTION_WIDTH, CAMERA_RESOLUTION_HEIGHT),
            FrameFormat::MJPEG,
            CAMERA_FRAME_RATE,
        ))
    }
}

fn ensure_camera_authorized(is_authorized: bool) -> Result<()> {
    if !is_authorized {
        anyhow::bail!("camera access has not been authorized for this application");
    }
    Ok(())
}

impl CameraDevice for NokhwaCameraDevice {
    fn open_stream(&self) -> Result<Box<dyn CameraStream>> {
        ensure_camera_authorized(Self::is_authorized())?;

        let requested_format = RequestedFormat::new::<RgbFormat>(Self::requested_format_type());
        let mut camera = Camera::new(CameraIndex::Index(self.camera_index), requested_format)
            .with_context(|| format!("failed to open camera {}", self.camera_index))?;

        camera
            .open_stream()
            .with_context(|| format!("failed to start stream on camera {}", self.camera_index))?;

        log::info!(
            "{} streaming from '{}' at {:?}",
            LOG_TAG_CAMERA,
            camera.info().human_name(),
            camera.camera_format()
        );

        Ok(Box::new(NokhwaCameraStream {
            camera,
            active: true,
        }))
    }
}

struct NokhwaCameraStream {
    camera: Camera,
    active: bool,
}

impl CameraStream for NokhwaCameraStream {
    fn capture_frame(&mut self) -> Result<CameraFrame> {
        if !self.active {
            anyhow::bail!("camera stream already released");
        }

        let buffer = self.camera.frame().context("failed to read camera frame")?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .context("failed to decode camera frame")?;

        let width_pixels = decoded.width();
        let height_pixels = decoded.height();
        CameraFrame::build_from_rgb(width_pixels, height_pixels, decoded.into_raw())
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }

        if let Err(e) = self.camera.stop_stream() {
            log::error!("{} failed to stop camera stream: {}", LOG_TAG_CAMERA, e);
        }
        self.active = false;
        log::info!("{} camera stream released", LOG_TAG_CAMERA);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for NokhwaCameraStream {
    fn drop(&mut self) {
        self.release();
    }
}
