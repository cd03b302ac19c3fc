use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::GeneratedScript;

#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// Sends one image, given as a base64 data URL, and returns the generated script.
    async fn generate_script(&self, image_data_url: &str) -> Result<GeneratedScript>;
}
