mod camera_device;
mod clipboard_writer;

pub use camera_device::{CameraDevice, CameraStream};
pub use clipboard_writer::ClipboardWriter;
