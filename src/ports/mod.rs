mod arboard_clipboard;
mod native_dialogs;
mod nokhwa_camera_device;

pub use arboard_clipboard::ArboardClipboard;
pub use native_dialogs::{pick_image_file, show_blocking_notice};
pub use nokhwa_camera_device::NokhwaCameraDevice;
