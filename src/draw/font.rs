//! Font descriptor and text measurement.

/// Font configuration for text rendering.
///
/// Describes which font to use, including family name, weight, and style.
/// This descriptor is passed through the rendering pipeline to ensure
/// consistent font usage between layout, hit-testing, and painting.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Reference installed system fonts by name
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 32" or "Monospace Italic 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        // Add style if not normal
        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        // Add weight if not normal
        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        // Add size
        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Text measurement used by the shared layout function.
///
/// Both the renderer and the text hit-tester consume layout results produced
/// against the same metrics, so they can never disagree about where a glyph
/// run lands. Production code uses [`PangoMetrics`]; tests substitute a
/// fixed-advance implementation.
pub trait TextMetrics {
    /// Width in pixels of the rendered string.
    fn text_width(&self, text: &str) -> i32;

    /// Height in pixels of one text line.
    fn line_height(&self) -> i32;
}

/// Pango-backed text metrics.
///
/// Holds a Pango layout configured with the widget's font descriptor.
/// Measurement goes through the same layout machinery the renderer uses.
pub struct PangoMetrics {
    layout: pango::Layout,
    line_height: i32,
}

impl PangoMetrics {
    /// Creates metrics bound to an existing Cairo context (the paint path).
    pub fn new(ctx: &cairo::Context, font: &FontDescriptor, size: f64) -> Self {
        let layout = pangocairo::functions::create_layout(ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
        layout.set_font_description(Some(&font_desc));

        let metrics = layout.context().metrics(Some(&font_desc), None);
        let line_height = (metrics.height() as f64 / pango::SCALE as f64).ceil() as i32;

        Self {
            layout,
            line_height,
        }
    }

    /// Creates metrics for measurement outside a paint pass (hit-testing,
    /// drag centering).
    ///
    /// Uses a tiny throwaway image surface; the layout is all we need.
    pub fn for_measurement(font: &FontDescriptor, size: f64) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1)?;
        let ctx = cairo::Context::new(&surface)?;
        Ok(Self::new(&ctx, font, size))
    }
}

impl TextMetrics for PangoMetrics {
    fn text_width(&self, text: &str) -> i32 {
        self.layout.set_text(text);
        self.layout.pixel_size().0
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Fixed-advance metrics for tests: every character is `advance` px wide.
#[cfg(test)]
pub struct FixedMetrics {
    pub advance: i32,
    pub height: i32,
}

#[cfg(test)]
impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self) -> i32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(20.0), "Sans 20");
    }

    #[test]
    fn pango_string_italic() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "normal".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(24.0), "Monospace Italic 24");
    }

    #[test]
    fn pango_string_custom_weight() {
        let font = FontDescriptor::new(
            "JetBrains Mono".to_string(),
            "light".to_string(),
            "normal".to_string(),
        );
        assert_eq!(font.to_pango_string(16.0), "JetBrains Mono Light 16");
    }

    #[test]
    fn fixed_metrics_scale_with_char_count() {
        let metrics = FixedMetrics {
            advance: 7,
            height: 12,
        };
        assert_eq!(metrics.text_width(""), 0);
        assert_eq!(metrics.text_width("abcd"), 28);
        assert_eq!(metrics.line_height(), 12);
    }
}
