//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings cover the tool that is active on
//! startup and its brush width and color.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::DrawingConfig;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::resolve_hex;

const MIN_LINE_WIDTH: f64 = 1.0;
const MAX_LINE_WIDTH: f64 = 50.0;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "highlighter"
/// line_width = 8.0
/// line_color = "yellow"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (tool, width, color)
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced and a warning is logged:
    /// - `line_width`: clamped to 1.0 - 50.0 (NaN falls back to the default)
    /// - `line_color`: must resolve as hex or a known name, otherwise `#000000`
    fn validate_and_clamp(&mut self) {
        let drawing = &mut self.drawing;

        if drawing.line_width.is_nan() {
            warn!("Invalid line_width NaN, using default");
            drawing.line_width = types::default_line_width();
        } else if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&drawing.line_width) {
            warn!(
                "Invalid line_width {:.1}, clamping to {:.1}-{:.1} range",
                drawing.line_width, MIN_LINE_WIDTH, MAX_LINE_WIDTH
            );
            drawing.line_width = drawing.line_width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }

        if let Err(err) = resolve_hex(&drawing.line_color) {
            warn!("{}, falling back to '{}'", err, types::default_line_color());
            drawing.line_color = types::default_line_color();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the config to TOML and writes it to `config_path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to the default path.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.drawing.default_tool, Tool::Pencil);
        assert_eq!(config.drawing.line_width, 3.0);
        assert_eq!(config.drawing.line_color, "#000000");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let (_dir, path) = write_config("[drawing]\ndefault_tool = \"highlighter\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Highlighter);
        assert_eq!(config.drawing.line_width, 3.0);
    }

    #[test]
    fn tool_identity_spelling_is_accepted() {
        let (_dir, path) = write_config("[drawing]\ndefault_tool = \"Highlighter\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Highlighter);
    }

    #[test]
    fn out_of_range_values_are_clamped_or_replaced() {
        let (_dir, path) =
            write_config("[drawing]\nline_width = 400.0\nline_color = \"not-a-color\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.line_width, 50.0);
        assert_eq!(config.drawing.line_color, "#000000");
    }

    #[test]
    fn named_colors_survive_validation() {
        let (_dir, path) = write_config("[drawing]\nline_color = \"Tomato\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.line_color, "Tomato");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let (_dir, path) = write_config("[drawing\nline_width = ");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.drawing.default_tool = Tool::Highlighter;
        config.drawing.line_color = "#ff0".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn example_config_parses_cleanly() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.drawing.tool_config().line_width, config.drawing.line_width);
    }

    #[test]
    fn schema_lists_drawing_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("line_color"));
    }
}
