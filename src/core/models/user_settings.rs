use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub model_name: String,
    pub api_base_url: String,
    pub camera_index: u32,
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            model_name: global_constants::DEFAULT_GEMINI_MODEL.to_string(),
            api_base_url: global_constants::DEFAULT_GEMINI_API_BASE_URL.to_string(),
            camera_index: global_constants::DEFAULT_CAMERA_INDEX,
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Model: {}", settings.model_name);
        log::debug!("[SETTINGS] API base URL: {}", settings.api_base_url);
        log::debug!("[SETTINGS] Camera index: {}", settings.camera_index);

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(format!("{}", ThemeMode::Dark), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.model_name, "gemini-2.5-flash");
        assert_eq!(
            settings.api_base_url,
            global_constants::DEFAULT_GEMINI_API_BASE_URL
        );
        assert_eq!(settings.camera_index, 0);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_user_settings_deserialization_fills_missing_fields() {
        let json = r#"{ "model_name": "gemini-2.0-flash" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.model_name, "gemini-2.0-flash");
        assert_eq!(settings.camera_index, 0);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let temp_dir = std::env::temp_dir().join("deep-image-prompt-settings-missing");
        std::fs::remove_dir_all(&temp_dir).ok();
        let settings_path = temp_dir.join("settings.json");

        let settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings.model_name, global_constants::DEFAULT_GEMINI_MODEL);
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_user_settings_save_and_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join("deep-image-prompt-settings-roundtrip");
        std::fs::create_dir_all(&temp_dir).unwrap();
        let settings_path = temp_dir.join("settings.json");

        let original_settings = UserSettings {
            model_name: "gemini-test".to_string(),
            api_base_url: "http://localhost:9000".to_string(),
            camera_index: 2,
            theme_mode: ThemeMode::Light,
        };

        original_settings.save_to_path(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded_settings.model_name, original_settings.model_name);
        assert_eq!(loaded_settings.api_base_url, original_settings.api_base_url);
        assert_eq!(loaded_settings.camera_index, original_settings.camera_index);
        assert_eq!(loaded_settings.theme_mode, original_settings.theme_mode);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
