pub mod app_theme;
mod image_capture_view;
mod script_output_view;

pub use image_capture_view::{CaptureLayout, ImageCaptureMessage, ImageCaptureView};
pub use script_output_view::{ScriptOutputMessage, ScriptOutputView};
