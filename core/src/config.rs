//! Input configuration (input.toml)
//!
//! Handles loading, saving, and providing defaults for the input settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use framekey_shared::{BindingDesc, TargetVersion};
use serde::{Deserialize, Serialize};

use crate::input::{DEFAULT_AXIS_THRESHOLD, SourceOptions, default_bindings};

/// File name of the input configuration inside the config directory.
pub const CONFIG_FILE: &str = "input.toml";

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

/// Input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Script runtime generation to emulate (default: 1, range: 1-3)
    #[serde(default)]
    pub target_version: TargetVersion,

    /// Axis magnitude a joystick axis must exceed to count as pressed
    /// (default: 0x4000)
    #[serde(default = "default_axis_threshold")]
    pub joystick_axis_threshold: i32,

    /// Let touches hold the left mouse button and move the cursor
    /// (default: false)
    #[serde(default)]
    pub touch_emulates_mouse: bool,

    /// User key map. `None` uses the defaults for `target_version`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<Vec<BindingDesc>>,
}

fn default_axis_threshold() -> i32 {
    DEFAULT_AXIS_THRESHOLD
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            target_version: TargetVersion::default(),
            joystick_axis_threshold: default_axis_threshold(),
            touch_emulates_mouse: false,
            bindings: None,
        }
    }
}

impl InputConfig {
    /// The key map to use: the user's if set, otherwise the defaults.
    pub fn effective_bindings(&self) -> Vec<BindingDesc> {
        match &self.bindings {
            Some(bindings) => bindings.clone(),
            None => default_bindings(self.target_version),
        }
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            axis_threshold: self.joystick_axis_threshold,
            touch_emulates_mouse: self.touch_emulates_mouse,
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\framekey\config`
/// On macOS: `~/Library/Application Support/io.framekey.framekey`
/// On Linux: `~/.config/framekey`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.framekey", "", "framekey")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads `input.toml` from the platform's configuration directory.
///
/// A missing directory or file yields the defaults.
pub fn load() -> Result<InputConfig, ConfigError> {
    match config_dir() {
        Some(dir) => load_from(&dir.join(CONFIG_FILE)),
        None => {
            tracing::warn!("No configuration directory; using default input settings");
            Ok(InputConfig::default())
        }
    }
}

/// Loads the configuration from an explicit path.
///
/// A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<InputConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(InputConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: InputConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !(1..=3).contains(&config.target_version.0) {
        tracing::warn!(
            "target_version {} is outside 1-3; repeat timing follows the nearest version",
            config.target_version.0
        );
    }

    Ok(config)
}

/// Saves the configuration to the platform's configuration directory.
///
/// Creates the directory if it doesn't exist.
pub fn save(config: &InputConfig) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to(config: &InputConfig, path: &Path) -> Result<(), ConfigError> {
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use framekey_shared::{AxisDir, ButtonCode, HatPos, Scancode, SourceDesc};

    // =============================================================
    // Default value tests
    // =============================================================

    #[test]
    fn test_config_default() {
        let config = InputConfig::default();
        assert_eq!(config.target_version, TargetVersion::V1);
        assert_eq!(config.joystick_axis_threshold, 0x4000);
        assert!(!config.touch_emulates_mouse);
        assert!(config.bindings.is_none());
    }

    #[test]
    fn test_effective_bindings_fall_back_to_defaults() {
        let config = InputConfig {
            target_version: TargetVersion::V2,
            ..InputConfig::default()
        };
        assert_eq!(config.effective_bindings(), default_bindings(TargetVersion::V2));

        let custom = InputConfig {
            bindings: Some(vec![BindingDesc::key(Scancode::J, ButtonCode::C)]),
            ..InputConfig::default()
        };
        assert_eq!(custom.effective_bindings().len(), 1);
    }

    // =============================================================
    // TOML serialization tests
    // =============================================================

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: InputConfig = toml::from_str("target_version = 3").unwrap();
        assert_eq!(config.target_version, TargetVersion::V3);
        assert_eq!(config.joystick_axis_threshold, 0x4000);
        assert!(config.bindings.is_none());
    }

    #[test]
    fn test_bindings_from_toml() {
        let toml_str = r#"
            target_version = 2
            touch_emulates_mouse = true

            [[bindings]]
            target = "C"
            source = { key = "Z" }

            [[bindings]]
            target = "Left"
            source = { joy_hat = { hat = 0, pos = "LEFT" } }

            [[bindings]]
            target = "Nonsense"
            source = { joy_button = 4 }
        "#;
        let config: InputConfig = toml::from_str(toml_str).unwrap();
        assert!(config.touch_emulates_mouse);

        let bindings = config.bindings.unwrap();
        assert_eq!(bindings[0], BindingDesc::key(Scancode::Z, ButtonCode::C));
        assert_eq!(
            bindings[1].source,
            SourceDesc::JoyHat {
                hat: 0,
                pos: HatPos::LEFT
            }
        );
        assert_eq!(bindings[2].target, ButtonCode::None);
    }

    // =============================================================
    // File tests
    // =============================================================

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = InputConfig {
            target_version: TargetVersion::V3,
            joystick_axis_threshold: 0x2000,
            touch_emulates_mouse: true,
            bindings: Some(vec![
                BindingDesc::key(Scancode::RETURN, ButtonCode::C),
                BindingDesc::joy_axis(1, AxisDir::Positive, ButtonCode::Down),
                BindingDesc::joy_button(0, ButtonCode::A),
            ]),
        };

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(loaded, InputConfig::default());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "target_version = \"three\"").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
