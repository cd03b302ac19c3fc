use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardWriter;
use crate::global_constants::LOG_TAG_CLIPBOARD;

pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn initialize() -> Self {
        log::debug!("{} initializing clipboard writer", LOG_TAG_CLIPBOARD);
        Self
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().context("Failed to initialize clipboard")?;

        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;

        log::info!(
            "{} copied {} characters to clipboard",
            LOG_TAG_CLIPBOARD,
            text.len()
        );
        Ok(())
    }
}
