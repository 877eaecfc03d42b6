//! Startup settings
//!
//! A small RON file next to the executable tweaks the session without a
//! rebuild. Missing or unparsable files fall back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::game::MOUSE_SENSITIVITY;

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    /// File I/O error
    Io(String),
    /// RON parse error
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "I/O error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e.to_string())
    }
}

/// Session settings loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radians of yaw/pitch per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Number of entity slots in the world
    pub entity_capacity: usize,
    /// Enemies spawned at session start
    pub enemy_count: usize,
    /// Enemies spawn uniformly in a square of this side length, centered on
    /// the player
    pub enemy_spawn_range: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            entity_capacity: 64,
            enemy_count: 35,
            enemy_spawn_range: 400.0,
        }
    }
}

impl Settings {
    /// Parse settings from RON text.
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        ron::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load settings from a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &str) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// broken. A broken file is reported; a missing one is normal.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &str) -> Self {
        if !std::path::Path::new(path).exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Failed to load {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// WASM has no filesystem to read from; always use defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default(_path: &str) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let settings = Settings::default();
        assert_eq!(settings.mouse_sensitivity, 0.006);
        assert_eq!(settings.enemy_count, 35);
        assert_eq!(settings.enemy_spawn_range, 400.0);
        assert!(settings.entity_capacity > settings.enemy_count + 2);
    }

    #[test]
    fn test_from_ron_partial_fields() {
        let settings = Settings::from_ron("(enemy_count: 5)").unwrap();
        assert_eq!(settings.enemy_count, 5);
        // Unspecified fields keep their defaults
        assert_eq!(settings.mouse_sensitivity, 0.006);
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(Settings::from_ron("not ron at all {").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        let settings = Settings::load_or_default(path.to_str().unwrap());
        assert_eq!(settings.enemy_count, Settings::default().enemy_count);
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");

        let mut settings = Settings::default();
        settings.enemy_count = 12;
        settings.enemy_spawn_range = 100.0;
        let text = ron::ser::to_string_pretty(&settings, ron::ser::PrettyConfig::default())
            .unwrap();
        std::fs::write(&path, text).unwrap();

        let loaded = Settings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.enemy_count, 12);
        assert_eq!(loaded.enemy_spawn_range, 100.0);
    }
}
