//! Annotation model: stroke points, text annotations, the displayed image,
//! and the view/annotate display mode.
//!
//! Freehand strokes are stored as a flat sequence of tagged entries: runs of
//! colored points separated by explicit [`StrokeEntry::Break`] variants. The
//! break is a real variant compared structurally, not a reserved coordinate
//! value, so no point can ever be mistaken for a stroke boundary. Stroke *k*
//! is the maximal run of points between the *k*-th pair of boundaries in
//! list order; consecutive breaks collapse a stroke to empty (zero drawn
//! segments) without disturbing the numbering of later strokes.
//!
//! All mutation goes through the methods below; each logical operation fires
//! the change listeners exactly once, synchronously, in registration order.

pub mod annotation;

pub use annotation::{CURSOR_GLYPH, TextAnnotation};

use crate::draw::Color;
use crate::image::PhotoImage;
use crate::util::point_distance;
use thiserror::Error;

/// Errors raised by index-addressed annotation mutations.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("annotation index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// An image-space stroke point carrying its own color.
///
/// Colors live on the points rather than the stroke so a mid-stroke pen
/// color change is representable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredPoint {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// One entry of the flat stroke sequence: a drawn point or a stroke boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEntry {
    /// A freehand point belonging to the current stroke.
    Point(ColoredPoint),
    /// Terminates the current stroke; never drawn or hit-tested.
    Break,
}

type ChangeListener = Box<dyn FnMut()>;

/// The annotation model owning the image, stroke points, and text labels.
pub struct PhotoModel {
    image: PhotoImage,
    entries: Vec<StrokeEntry>,
    annotations: Vec<TextAnnotation>,
    flipped: bool,
    listeners: Vec<ChangeListener>,
}

impl PhotoModel {
    /// Creates a model displaying `image`, with no annotations and the
    /// plain (unflipped) display mode.
    pub fn new(image: PhotoImage) -> Self {
        Self {
            image,
            entries: Vec::new(),
            annotations: Vec::new(),
            flipped: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a change listener. Listeners run synchronously, in
    /// registration order, once per logical mutation, with no payload:
    /// observers must treat every notification as coarse invalidation.
    pub fn add_change_listener(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn fire_change(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    // ========================================================================
    // Image and display mode
    // ========================================================================

    pub fn image(&self) -> &PhotoImage {
        &self.image
    }

    /// Replaces the displayed raster. Existing annotations are kept.
    pub fn set_image(&mut self, image: PhotoImage) {
        self.image = image;
        self.fire_change();
    }

    /// True in annotate mode (strokes and text visible and editable).
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Toggles between plain display and annotate mode.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
        self.fire_change();
    }

    // ========================================================================
    // Strokes
    // ========================================================================

    /// The raw stroke entry sequence, in draw order.
    pub fn entries(&self) -> &[StrokeEntry] {
        &self.entries
    }

    /// Appends a freehand point to the current stroke.
    pub fn add_point(&mut self, point: (i32, i32), color: Color) {
        self.entries.push(StrokeEntry::Point(ColoredPoint {
            x: point.0,
            y: point.1,
            color,
        }));
        self.fire_change();
    }

    /// Terminates the current stroke. The next added point starts a new one.
    pub fn end_stroke(&mut self) {
        self.entries.push(StrokeEntry::Break);
        self.fire_change();
    }

    /// Number of strokes: boundary count plus the unterminated trailing run.
    pub fn stroke_count(&self) -> usize {
        let breaks = self
            .entries
            .iter()
            .filter(|entry| matches!(entry, StrokeEntry::Break))
            .count();
        let trailing = matches!(self.entries.last(), Some(StrokeEntry::Point(_)));
        breaks + usize::from(trailing)
    }

    /// Entry range `[start, end)` of the points belonging to stroke
    /// `line_index`, or `None` when no such stroke exists. The range may be
    /// empty (consecutive breaks).
    fn stroke_range(&self, line_index: usize) -> Option<(usize, usize)> {
        let mut stroke = 0usize;
        let mut start = 0usize;
        for (i, entry) in self.entries.iter().enumerate() {
            if let StrokeEntry::Break = entry {
                if stroke == line_index {
                    return Some((start, i));
                }
                stroke += 1;
                start = i + 1;
            }
        }
        if stroke == line_index && start < self.entries.len() {
            return Some((start, self.entries.len()));
        }
        None
    }

    /// The points of stroke `line_index`, in draw order.
    pub fn stroke_points(&self, line_index: usize) -> Vec<ColoredPoint> {
        match self.stroke_range(line_index) {
            Some((start, end)) => self.entries[start..end]
                .iter()
                .filter_map(|entry| match entry {
                    StrokeEntry::Point(p) => Some(*p),
                    StrokeEntry::Break => None,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Recolors every point of stroke `line_index`. Silently does nothing
    /// when the index exceeds the stroke count.
    pub fn recolor_stroke(&mut self, line_index: usize, color: Color) {
        let Some((start, end)) = self.stroke_range(line_index) else {
            log::debug!("recolor ignored: no stroke {line_index}");
            return;
        };
        if start == end {
            return;
        }
        for entry in &mut self.entries[start..end] {
            if let StrokeEntry::Point(p) = entry {
                p.color = color;
            }
        }
        self.fire_change();
    }

    /// Drags stroke `line_index` so that its point nearest to `target`
    /// (Euclidean distance, image space) lands exactly on `target`; every
    /// other point of the stroke shifts by the same delta. Strokes have no
    /// designated handle, so the nearest point serves as the drag anchor.
    /// Silently does nothing when the index is invalid.
    pub fn move_stroke(&mut self, line_index: usize, target: (i32, i32)) {
        let Some((start, end)) = self.stroke_range(line_index) else {
            log::debug!("move ignored: no stroke {line_index}");
            return;
        };

        let mut anchor = None;
        let mut best = f64::INFINITY;
        for entry in &self.entries[start..end] {
            if let StrokeEntry::Point(p) = entry {
                let distance = point_distance((p.x, p.y), target);
                if distance < best {
                    best = distance;
                    anchor = Some((p.x, p.y));
                }
            }
        }
        let Some(anchor) = anchor else {
            return;
        };

        let dx = target.0 - anchor.0;
        let dy = target.1 - anchor.1;
        for entry in &mut self.entries[start..end] {
            if let StrokeEntry::Point(p) = entry {
                p.x += dx;
                p.y += dy;
            }
        }
        self.fire_change();
    }

    // ========================================================================
    // Text annotations
    // ========================================================================

    /// Text annotations in insertion order (insertion order is z-order and
    /// hit-test priority).
    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    /// Appends a text annotation anchored at `point`.
    pub fn add_annotation(&mut self, text: String, point: (i32, i32), color: Color) {
        self.annotations
            .push(TextAnnotation::new(text, point, color));
        self.fire_change();
    }

    fn annotation_mut(&mut self, index: usize) -> Result<&mut TextAnnotation, ModelError> {
        let count = self.annotations.len();
        self.annotations
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, count })
    }

    /// Replaces the text of annotation `index`.
    pub fn set_text(&mut self, index: usize, text: String) -> Result<(), ModelError> {
        self.annotation_mut(index)?.set_text(text);
        self.fire_change();
        Ok(())
    }

    /// Moves annotation `index` to a new image-space insertion point.
    pub fn set_origin(&mut self, index: usize, origin: (i32, i32)) -> Result<(), ModelError> {
        self.annotation_mut(index)?.set_origin(origin);
        self.fire_change();
        Ok(())
    }

    /// Recolors annotation `index`.
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), ModelError> {
        self.annotation_mut(index)?.set_color(color);
        self.fire_change();
        Ok(())
    }

    /// Sets or clears the edit-cursor flag of annotation `index`.
    pub fn set_has_cursor(&mut self, index: usize, has_cursor: bool) -> Result<(), ModelError> {
        self.annotation_mut(index)?.set_has_cursor(has_cursor);
        self.fire_change();
        Ok(())
    }
}
