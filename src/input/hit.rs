//! Hit-testing of strokes and text annotations against screen points.
//!
//! Callers that query both on the same click must consult text first: text
//! annotations take priority over strokes.

use crate::draw::font::TextMetrics;
use crate::draw::layout::layout_text;
use crate::draw::viewport::Viewport;
use crate::model::{PhotoModel, StrokeEntry};

/// Returns the first text annotation (insertion order) whose rendered glyph
/// runs contain `point`, or `None`.
///
/// The boxes come from the same greedy layout the renderer uses, so an
/// annotation hit-tests exactly where it is drawn; text truncated at the
/// image's bottom edge is unreachable.
pub fn hit_test_text(
    model: &PhotoModel,
    viewport: &Viewport,
    metrics: &dyn TextMetrics,
    point: (i32, i32),
) -> Option<usize> {
    for (index, annotation) in model.annotations().iter().enumerate() {
        let start = viewport.to_screen(annotation.origin());
        let lines = layout_text(annotation.text(), start, metrics, viewport);
        if lines.iter().any(|line| line.contains(point)) {
            log::debug!("text hit: annotation {index}");
            return Some(index);
        }
    }
    None
}

/// Returns the index of the first stroke with a segment near `point`, or
/// `None`.
///
/// "Near" means: inside the segment's screen-space axis-aligned bounding box
/// expanded by `tolerance` pixels on every side. This is a deliberate cheap
/// proxy for point-to-segment distance; it over-matches around long diagonal
/// segments. Segment pairs straddling a stroke boundary are skipped.
pub fn hit_test_stroke(
    model: &PhotoModel,
    viewport: &Viewport,
    tolerance: i32,
    point: (i32, i32),
) -> Option<usize> {
    let entries = model.entries();
    let mut line_index = 0usize;

    for window in entries.windows(2) {
        match (&window[0], &window[1]) {
            (StrokeEntry::Break, _) => line_index += 1,
            (StrokeEntry::Point(a), StrokeEntry::Point(b)) => {
                let start = viewport.to_screen((a.x, a.y));
                let end = viewport.to_screen((b.x, b.y));
                if segment_box_contains(start, end, tolerance, point) {
                    log::debug!("stroke hit: line {line_index}");
                    return Some(line_index);
                }
            }
            (StrokeEntry::Point(_), StrokeEntry::Break) => {}
        }
    }
    None
}

/// Expanded bounding-box containment test for one screen-space segment.
fn segment_box_contains(
    start: (i32, i32),
    end: (i32, i32),
    tolerance: i32,
    point: (i32, i32),
) -> bool {
    let min_x = start.0.min(end.0) - tolerance;
    let max_x = start.0.max(end.0) + tolerance;
    let min_y = start.1.min(end.1) - tolerance;
    let max_y = start.1.max(end.1) + tolerance;

    point.0 >= min_x && point.0 <= max_x && point.1 >= min_y && point.1 <= max_y
}
