//! Run configuration
//!
//! Loaded from a JSON file; every field has a default so partial files work.
//! Physics tuning lives in `consts` and is not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FPS, MAX_SUBSTEPS, QUIT_HOLD_SECS};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Driver and demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for the run
    pub seed: u64,
    /// Frames per second the driver feeds the simulation
    pub frame_rate: u32,
    /// Cap on simulation ticks per frame
    pub max_substeps: u32,
    /// Seconds quit must be held before the run stops
    pub quit_hold_secs: f32,
    /// Length of the headless demo in frames
    pub demo_frames: u32,
    /// Print the final snapshot as JSON
    pub print_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            frame_rate: FPS,
            max_substeps: MAX_SUBSTEPS,
            quit_hold_secs: QUIT_HOLD_SECS,
            demo_frames: 60 * 90,
            print_snapshot: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like `load`, but falls back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame_rate must be positive".into()));
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::Invalid("max_substeps must be positive".into()));
        }
        if self.quit_hold_secs.is_nan() || self.quit_hold_secs <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "quit_hold_secs must be positive, got {}",
                self.quit_hold_secs
            )));
        }
        Ok(())
    }

    /// Wall-clock length of one driver frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.max_substeps, 8);
        assert_eq!(settings.quit_hold_secs, 1.2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "print_snapshot": false }"#).unwrap();
        assert_eq!(settings.seed, 42);
        assert!(!settings.print_snapshot);
        assert_eq!(settings.frame_rate, Settings::default().frame_rate);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "frame_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        let err = Settings::from_json(r#"{ "quit_hold_secs": -1.0 }"#).unwrap_err();
        assert!(err.to_string().contains("quit_hold_secs"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/jump-smile/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("jump-smile-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "seed": 7, "demo_frames": 10 }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.demo_frames, 10);
    }
}
