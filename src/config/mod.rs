//! Configuration file support for photomarker.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/photomarker/config.toml`.
//! Settings include drawing defaults, hit-testing tolerance, and the
//! selection highlight color.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{ColorSpec, DisplayConfig, DrawingConfig, HitConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::draw::{BLACK, Color, FontDescriptor, GRAY, RenderStyle};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// stroke_thickness = 6.0
/// font_size = 20.0
///
/// [hit]
/// stroke_tolerance = 5
///
/// [display]
/// highlight_color = "gray"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (pen color, stroke thickness, font)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Hit-testing tolerances
    #[serde(default)]
    pub hit: HitConfig,

    /// Display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering or selection glitches. Invalid values are clamped to the
    /// nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 20.0
    /// - `font_size`: 8.0 - 72.0
    /// - `stroke_tolerance`: 1 - 50
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.stroke_thickness) {
            log::warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_thickness
            );
            self.drawing.stroke_thickness = self.drawing.stroke_thickness.clamp(1.0, 20.0);
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = self.drawing.font_size.clamp(8.0, 72.0);
        }

        // Stroke hit tolerance: 1 - 50
        if !(1..=50).contains(&self.hit.stroke_tolerance) {
            log::warn!(
                "Invalid stroke_tolerance {}, clamping to 1-50 range",
                self.hit.stroke_tolerance
            );
            self.hit.stroke_tolerance = self.hit.stroke_tolerance.clamp(1, 50);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/photomarker/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("photomarker");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/photomarker/config.toml`. If the file doesn't exist,
    /// returns a Config with default values. All loaded values are validated
    /// and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a configuration from TOML text, validating and clamping all
    /// values.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Invalid TOML syntax")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/photomarker/config.toml`. Creates the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Initial pen color resolved from the drawing section.
    pub fn pen_color(&self) -> Color {
        self.drawing.default_color.to_color(BLACK)
    }

    /// Selection highlight color resolved from the display section.
    pub fn highlight_color(&self) -> Color {
        self.display.highlight_color.to_color(GRAY)
    }

    /// Font descriptor assembled from the drawing section.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.drawing.font_family.clone(),
            self.drawing.font_weight.clone(),
            self.drawing.font_style.clone(),
        )
    }

    /// Render style assembled from the drawing and display sections.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            stroke_thickness: self.drawing.stroke_thickness,
            font: self.font_descriptor(),
            font_size: self.drawing.font_size,
            highlight: self.highlight_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.drawing.stroke_thickness, 6.0);
        assert_eq!(config.drawing.font_size, 20.0);
        assert_eq!(config.hit.stroke_tolerance, 5);
        assert_eq!(config.pen_color(), BLACK);
        assert_eq!(config.highlight_color(), GRAY);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = "red"
            "#,
        )
        .unwrap();
        assert_eq!(config.pen_color(), crate::draw::RED);
        assert_eq!(config.drawing.stroke_thickness, 6.0);
        assert_eq!(config.hit.stroke_tolerance, 5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [drawing]
            stroke_thickness = 99.0
            font_size = 1.0
            font_weight = "wiggly"

            [hit]
            stroke_tolerance = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.stroke_thickness, 20.0);
        assert_eq!(config.drawing.font_size, 8.0);
        assert_eq!(config.drawing.font_weight, "normal");
        assert_eq!(config.hit.stroke_tolerance, 1);
    }

    #[test]
    fn rgb_arrays_and_unknown_names_resolve() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = [255, 0, 0]

            [display]
            highlight_color = "mauve"
            "#,
        )
        .unwrap();
        assert_eq!(config.pen_color(), crate::draw::RED);
        // Unknown names fall back to the documented default.
        assert_eq!(config.highlight_color(), GRAY);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("not = [valid").is_err());
    }

    #[test]
    fn config_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        std::fs::write(&path, &text).unwrap();

        let reloaded = Config::from_toml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            reloaded.drawing.stroke_thickness,
            config.drawing.stroke_thickness
        );
        assert_eq!(reloaded.hit.stroke_tolerance, config.hit.stroke_tolerance);
    }
}
