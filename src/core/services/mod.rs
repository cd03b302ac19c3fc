mod camera_session;
mod image_file_loader;

pub use camera_session::CameraSession;
pub use image_file_loader::{has_supported_image_extension, load_image_file};

#[cfg(test)]
pub(crate) use camera_session::test_support;
