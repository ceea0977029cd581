//! Application configuration.
//!
//! Read from a `key = value` file (`config.ini`), or from TOML when the
//! `toml` feature is enabled and the file ends in `.toml`. Every field has a
//! default, so a missing file or key is never an error.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::render::{LayoutMode, RenderOptions};

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML
    #[cfg(feature = "toml")]
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Display and playback settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppConfig {
    pub enable_color: bool,
    /// Interpolation factor used by the driver; 1 or less disables it
    pub smoothing_window_size: i32,
    pub layout_mode: LayoutMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_color: false,
            smoothing_window_size: 1,
            layout_mode: LayoutMode::List,
        }
    }
}

impl AppConfig {
    /// Parse `key = value` lines.
    ///
    /// Blank lines and `#` comments are skipped. Values that do not parse
    /// leave the default in place.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use quanta_cerebra::AppConfig;
    ///
    /// let config = AppConfig::from_kv_str("enable_color = true\nsmoothing_window_size = 4\n");
    /// assert!(config.enable_color);
    /// assert_eq!(config.smoothing_window_size, 4);
    /// ```
    pub fn from_kv_str(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "enable_color" => config.enable_color = value == "true",
                "smoothing_window_size" => match value.parse() {
                    Ok(size) => config.smoothing_window_size = size,
                    Err(_) => log::warn!("smoothing_window_size {:?} is not an integer", value),
                },
                "layout_mode" if !value.is_empty() => match value.parse() {
                    Ok(mode) => config.layout_mode = mode,
                    Err(e) => log::warn!("{}", e),
                },
                _ => log::debug!("ignoring config key {:?}", key),
            }
        }

        config
    }

    /// Parse a TOML document.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        #[cfg(feature = "toml")]
        {
            if path.extension().is_some_and(|ext| ext == "toml") {
                return Self::from_toml_str(&text);
            }
        }

        Ok(Self::from_kv_str(&text))
    }

    /// Interpolation factor for `interpolate`; negative sizes map to 0.
    pub fn interpolation_factor(&self) -> usize {
        usize::try_from(self.smoothing_window_size).unwrap_or(0)
    }
}

impl From<&AppConfig> for RenderOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            enable_color: config.enable_color,
            layout: config.layout_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(!config.enable_color);
        assert_eq!(config.smoothing_window_size, 1);
        assert_eq!(config.layout_mode, LayoutMode::List);
        assert_eq!(AppConfig::from_kv_str(""), config);
    }

    #[test]
    fn kv_parsing() {
        let config = AppConfig::from_kv_str(
            "# display\n\
             enable_color = true\n\
             \n\
             smoothing_window_size=3\n\
             layout_mode = flat\n\
             unknown = 1\n",
        );
        assert!(config.enable_color);
        assert_eq!(config.smoothing_window_size, 3);
        assert_eq!(config.layout_mode, LayoutMode::Flat);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = AppConfig::from_kv_str(
            "enable_color = yes\nsmoothing_window_size = many\nlayout_mode = \nno_equals_sign\n",
        );
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_kv_str("layout_mode = grid\n");
        assert_eq!(config.layout_mode, LayoutMode::List);
    }

    #[test]
    fn interpolation_factor() {
        let mut config = AppConfig::default();
        config.smoothing_window_size = 4;
        assert_eq!(config.interpolation_factor(), 4);
        config.smoothing_window_size = -2;
        assert_eq!(config.interpolation_factor(), 0);
    }

    #[test]
    fn render_options_from_config() {
        let config = AppConfig::from_kv_str("enable_color = true\nlayout_mode = flat");
        let options = RenderOptions::from(&config);
        assert!(options.enable_color);
        assert_eq!(options.layout, LayoutMode::Flat);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("config.ini")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_kv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "enable_color = true").unwrap();
        writeln!(file, "smoothing_window_size = 8").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert!(config.enable_color);
        assert_eq!(config.smoothing_window_size, 8);
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_config() {
        let config = AppConfig::from_toml_str("enable_color = true\nlayout_mode = \"flat\"\n").unwrap();
        assert!(config.enable_color);
        assert_eq!(config.smoothing_window_size, 1);
        assert_eq!(config.layout_mode, LayoutMode::Flat);

        assert!(AppConfig::from_toml_str("enable_color = ").is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "smoothing_window_size = 2\n").unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().smoothing_window_size, 2);
    }
}
