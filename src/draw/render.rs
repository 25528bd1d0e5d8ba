//! Cairo-based rendering of the annotated photo.
//!
//! Paint order per frame: the scaled, centered image; then, in annotate
//! mode, every stroke segment in its point's color and every text
//! annotation via the shared greedy layout. The selected stroke and the
//! annotation being edited render in the highlight color.

use super::color::Color;
use super::font::{FontDescriptor, PangoMetrics};
use super::layout::{TextLine, layout_text};
use super::viewport::Viewport;
use crate::model::{PhotoModel, StrokeEntry};

/// Visual parameters of a paint pass, sourced from the configuration.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Stroke line width in pixels
    pub stroke_thickness: f64,
    /// Font used for text annotations
    pub font: FontDescriptor,
    /// Font size in points
    pub font_size: f64,
    /// Color for the selected stroke and the annotation being edited
    pub highlight: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_thickness: 6.0,
            font: FontDescriptor::default(),
            font_size: 20.0,
            highlight: super::color::GRAY,
        }
    }
}

/// Renders one frame: the image, and in annotate mode the strokes and text.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `model` - The annotation model being displayed
/// * `viewport` - Placement of the scaled image, recomputed for this frame
/// * `style` - Visual parameters (thickness, font, highlight color)
/// * `selected_stroke` - Stroke drawn in the highlight color, if any
pub fn render_scene(
    ctx: &cairo::Context,
    model: &PhotoModel,
    viewport: &Viewport,
    style: &RenderStyle,
    selected_stroke: Option<usize>,
) {
    if viewport.is_empty() {
        return;
    }

    render_image(ctx, model, viewport);

    if model.flipped() {
        render_strokes(ctx, model, viewport, style, selected_stroke);
        render_annotations(ctx, model, viewport, style);
    }
}

/// Paints the model's raster scaled and centered per the viewport.
fn render_image(ctx: &cairo::Context, model: &PhotoModel, viewport: &Viewport) {
    let (origin_x, origin_y) = viewport.origin();

    ctx.save().ok();
    ctx.translate(origin_x as f64, origin_y as f64);
    ctx.scale(viewport.scale_x(), viewport.scale_y());
    let _ = ctx.set_source_surface(model.image().surface(), 0.0, 0.0);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Draws every stroke segment, skipping pairs that straddle a stroke
/// boundary and segments whose transformed end point leaves the image area.
fn render_strokes(
    ctx: &cairo::Context,
    model: &PhotoModel,
    viewport: &Viewport,
    style: &RenderStyle,
    selected_stroke: Option<usize>,
) {
    ctx.set_line_width(style.stroke_thickness);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let mut line_index = 0usize;
    for window in model.entries().windows(2) {
        match (&window[0], &window[1]) {
            (StrokeEntry::Break, _) => line_index += 1,
            (StrokeEntry::Point(a), StrokeEntry::Point(b)) => {
                let start = viewport.to_screen((a.x, a.y));
                let end = viewport.to_screen((b.x, b.y));
                if !viewport.is_in_area(end) {
                    continue;
                }

                let color = if selected_stroke == Some(line_index) {
                    style.highlight
                } else {
                    b.color
                };
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                ctx.move_to(start.0 as f64, start.1 as f64);
                ctx.line_to(end.0 as f64, end.1 as f64);
                let _ = ctx.stroke();
            }
            (StrokeEntry::Point(_), StrokeEntry::Break) => {}
        }
    }
}

/// Draws every text annotation through the shared layout. The annotation
/// carrying the edit cursor renders in the highlight color.
fn render_annotations(
    ctx: &cairo::Context,
    model: &PhotoModel,
    viewport: &Viewport,
    style: &RenderStyle,
) {
    let metrics = PangoMetrics::new(ctx, &style.font, style.font_size);

    for annotation in model.annotations() {
        let color = if annotation.has_cursor() {
            style.highlight
        } else {
            annotation.color()
        };

        let start = viewport.to_screen(annotation.origin());
        for line in layout_text(annotation.text(), start, &metrics, viewport) {
            render_text_line(ctx, &line, color, &style.font, style.font_size);
        }
    }
}

/// Renders one laid-out glyph run at its baseline.
fn render_text_line(
    ctx: &cairo::Context,
    line: &TextLine,
    color: Color,
    font: &FontDescriptor,
    size: f64,
) {
    // Save context state to prevent settings from leaking to other drawing
    // operations.
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&line.text);

    // Pango draws from the top-left; the layout positions lines by baseline.
    let baseline_offset = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(line.x as f64, line.baseline as f64 - baseline_offset);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
