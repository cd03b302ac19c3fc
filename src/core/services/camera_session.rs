use anyhow::{Context, Result};

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::core::models::{CameraFrame, ImagePayload};
use crate::global_constants::LOG_TAG_CAMERA;

/// An open camera stream that is released on every exit path.
///
/// `take_snapshot` and `close` consume the session; dropping it releases too.
pub struct CameraSession {
    stream: Box<dyn CameraStream>,
}

impl CameraSession {
    pub fn acquire(device: &dyn CameraDevice) -> Result<Self> {
        log::info!("{} acquiring camera stream", LOG_TAG_CAMERA);

        let stream = device
            .open_stream()
            .context("Failed to open camera stream")?;

        log::info!("{} camera stream acquired", LOG_TAG_CAMERA);
        Ok(Self { stream })
    }

    pub fn preview_frame(&mut self) -> Result<CameraFrame> {
        self.stream.capture_frame()
    }

    pub fn take_snapshot(mut self, jpeg_quality: u8) -> Result<ImagePayload> {
        log::info!("{} taking snapshot", LOG_TAG_CAMERA);

        let snapshot = self
            .stream
            .capture_frame()
            .and_then(|frame| ImagePayload::from_camera_frame(&frame, jpeg_quality));

        self.stream.release();
        snapshot
    }

    pub fn close(mut self) {
        log::info!("{} closing camera view", LOG_TAG_CAMERA);
        self.stream.release();
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_active()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        if self.stream.is_active() {
            log::debug!("{} releasing camera stream on drop", LOG_TAG_CAMERA);
            self.stream.release();
        }
    }
}
