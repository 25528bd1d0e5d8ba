//! Configuration type definitions.

use crate::draw::Color;
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black, gray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values using
    /// `util::name_to_color()`. Unknown color names fall back to `fallback`
    /// with a warning. RGB arrays are converted from 0-255 range to 0.0-1.0
    /// range with full opacity.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!(
                    "Unknown color '{}', using {}",
                    name,
                    crate::util::color_to_name(&fallback)
                );
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

/// Drawing-related settings.
///
/// Controls the appearance of new strokes and text annotations.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial pen color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black, gray) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke line width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub stroke_thickness: f64,

    /// Font size for text annotations in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font family name for text rendering (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    /// Can be a named weight or a numeric value (100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            stroke_thickness: default_thickness(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Hit-testing settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct HitConfig {
    /// Stroke hit-test tolerance in screen pixels (valid range: 1 - 50).
    /// Each stroke segment's bounding box is expanded by this much on every
    /// side when deciding whether a click selects the stroke.
    #[serde(default = "default_stroke_tolerance")]
    pub stroke_tolerance: i32,
}

impl Default for HitConfig {
    fn default() -> Self {
        Self {
            stroke_tolerance: default_stroke_tolerance(),
        }
    }
}

/// Display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color for the selected stroke and the annotation being edited
    #[serde(default = "default_highlight_color")]
    pub highlight_color: ColorSpec,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_color: default_highlight_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> f64 {
    6.0
}

fn default_font_size() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_stroke_tolerance() -> i32 {
    5
}

fn default_highlight_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}
