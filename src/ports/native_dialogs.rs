use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::path::PathBuf;

use crate::global_constants::{APPLICATION_TITLE, LOG_TAG_DIALOG, SUPPORTED_IMAGE_EXTENSIONS};

pub async fn pick_image_file() -> Option<PathBuf> {
    log::debug!("{} opening image file dialog", LOG_TAG_DIALOG);

    let picked = AsyncFileDialog::new()
        .set_title("Upload Photo")
        .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS)
        .pick_file()
        .await;

    match picked {
        Some(handle) => {
            let path = handle.path().to_path_buf();
            log::info!("{} picked {:?}", LOG_TAG_DIALOG, path);
            Some(path)
        }
        None => {
            log::info!("{} file selection cancelled", LOG_TAG_DIALOG);
            None
        }
    }
}

/// Shows a modal error notice and waits until the user dismisses it.
pub async fn show_blocking_notice(description: String) {
    log::warn!("{} showing notice: {}", LOG_TAG_DIALOG, description);

    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(APPLICATION_TITLE)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
