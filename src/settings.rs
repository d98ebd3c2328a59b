//! Game settings and preferences
//!
//! Read once at startup from a JSON file named by `SKYFLAP_SETTINGS`. Physics
//! is not configurable; only presentation and audio are.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "SKYFLAP_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for the round sequence (random when unset)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// High contrast palette
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            show_fps: false,

            high_contrast: false,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a file
    pub fn load_from(path: &Path) -> Result<Self, ShellError> {
        let json = std::fs::read_to_string(path).map_err(|source| ShellError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| ShellError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `SKYFLAP_SETTINGS`, or use defaults
    pub fn load() -> Result<Self, ShellError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert!(!settings.high_contrast);
    }

    #[test]
    fn test_roundtrip_defaults() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path = std::env::temp_dir().join("skyflap_settings_malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ShellError::SettingsParse { .. }));
        assert!(err.to_string().contains("skyflap_settings_malformed.json"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("skyflap_settings_does_not_exist.json");
        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, ShellError::SettingsRead { .. }));
    }
}
