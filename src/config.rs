/// Optional user configuration
///
/// Read from `<config dir>/qr-studio/config.toml`:
/// - Linux: ~/.config/qr-studio/config.toml
/// - macOS: ~/Library/Application Support/qr-studio/config.toml
/// - Windows: %APPDATA%\qr-studio\config.toml
///
/// Every key is optional. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::state::style::EncodeStyle;

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}

/// Main configuration for QR Studio
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style applied to every generated code
    pub style: EncodeStyle,
    pub window: WindowConfig,
}

impl Config {
    /// Load from the default location, falling back to defaults on any problem
    ///
    /// A broken config file is logged and ignored so the app always starts.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("qr-studio");
        path.push("config.toml");
        Some(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.style.validate()?;

        let WindowConfig { width, height } = self.window;
        if !(width.is_finite() && height.is_finite() && width >= 320.0 && height >= 240.0) {
            return Err(ConfigError::InvalidValue(
                "window must be at least 320x240".into(),
            ));
        }
        Ok(())
    }
}
