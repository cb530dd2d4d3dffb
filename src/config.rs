//=========================================================================
// Configuration
//=========================================================================
//
// TOML-backed runtime configuration. Every field has a default, so an
// empty file (or no file at all) yields a runnable setup.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

/// Accepted logic rates. Outside it the tick period either cannot be
/// represented or rounds the step to zero.
pub const TPS_RANGE: RangeInclusive<f64> = 1.0..=1000.0;

/// `false` for NaN, infinities and anything outside [`TPS_RANGE`].
pub fn is_valid_tps(tps: f64) -> bool {
    TPS_RANGE.contains(&tps)
}

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

//=== WindowConfig ========================================================

/// Window title and initial inner size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Pitch Demo v0.2"),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

//=== InputConfig =========================================================

/// Keys bound to each movement direction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,

    /// Flips `GameContext::game_mode`; `None` disables toggling.
    pub toggle_game_mode: Option<KeyCode>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            backward: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            toggle_game_mode: Some(KeyCode::KeyP),
        }
    }
}

//=== EngineConfig ========================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logic ticks per second.
    pub tps: f64,

    /// Capacity of the platform → core event channel.
    pub channel_capacity: usize,

    /// Directory mesh and animation files are resolved against.
    pub assets_dir: PathBuf,

    /// Initial value of `GameContext::game_mode`.
    pub start_in_game_mode: bool,

    pub window: WindowConfig,
    pub input: InputConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            assets_dir: PathBuf::from("assets"),
            start_in_game_mode: true,
            window: WindowConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_tps(self.tps) {
            return Err(ConfigError::Invalid(format!(
                "tps must be within {}..={}, got {}",
                TPS_RANGE.start(),
                TPS_RANGE.end(),
                self.tps
            )));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be positive".into()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.window.title, "Pitch Demo v0.2");
        assert_eq!((config.window.width, config.window.height), (1280, 720));
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            tps = 120.0

            [window]
            title = "Scrimmage"

            [input]
            forward = ["KeyI"]
            toggle_game_mode = "Escape"
            "#,
        )
        .unwrap();

        assert_eq!(config.tps, 120.0);
        assert_eq!(config.window.title, "Scrimmage");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.input.forward, vec![KeyCode::KeyI]);
        assert_eq!(config.input.backward, vec![KeyCode::KeyS, KeyCode::ArrowDown]);
        assert_eq!(config.input.toggle_game_mode, Some(KeyCode::Escape));
    }

    #[test]
    fn unknown_key_name_is_a_parse_error() {
        let err = EngineConfig::from_toml(
            r#"
            [input]
            left = ["KeyLeftish"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn non_positive_tps_rejected() {
        let err = EngineConfig::from_toml("tps = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("tps"));
    }

    #[test]
    fn tps_outside_range_rejected() {
        for text in ["tps = inf", "tps = -inf", "tps = nan", "tps = 1e-30", "tps = 0.5", "tps = 1e6"] {
            let err = EngineConfig::from_toml(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{} should be rejected", text);
        }
    }

    #[test]
    fn tps_range_bounds_accepted() {
        assert_eq!(EngineConfig::from_toml("tps = 1.0").unwrap().tps, 1.0);
        assert_eq!(EngineConfig::from_toml("tps = 1000.0").unwrap().tps, 1000.0);
    }

    #[test]
    fn zero_channel_capacity_rejected() {
        let err = EngineConfig::from_toml("channel_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_window_size_rejected() {
        let err = EngineConfig::from_toml("[window]\nwidth = 0").unwrap_err();
        assert!(err.to_string().contains("window size"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default("does/not/exist/pitch_demo.toml").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = EngineConfig::load("does/not/exist/pitch_demo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
