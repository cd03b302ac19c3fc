use anyhow::Result;

use crate::core::models::CameraFrame;

pub trait CameraDevice: Send + Sync {
    fn open_stream(&self) -> Result<Box<dyn CameraStream>>;
}

pub trait CameraStream {
    fn capture_frame(&mut self) -> Result<CameraFrame>;

    /// Stops every track of the stream. Calling it more than once is a no-op.
    fn release(&mut self);

    fn is_active(&self) -> bool;
}
