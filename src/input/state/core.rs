//! Interaction state machine and selection management.

use crate::draw::Color;
use crate::model::{PhotoModel, annotation};
use crate::util;

/// Current interaction mode.
///
/// Tracks whether the user is idle, drawing a fresh stroke, dragging an
/// existing stroke, or editing a text annotation. Transitions occur based on
/// pointer and keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// No gesture in progress - waiting for user input
    Idle,
    /// Appending freehand points (button held, no text/stroke target)
    Drawing,
    /// Dragging an existing stroke (button held over a stroke)
    DraggingStroke,
    /// A text annotation has an active edit cursor
    EditingText,
}

/// All interaction state of the annotation surface.
///
/// This struct holds the current mode, the selected annotation or stroke,
/// the edit cursor position, and the pen color. It processes pointer and
/// keyboard events to mutate the [`PhotoModel`] and determine when redraws
/// are needed. It holds no windowing resources, so the whole state machine
/// is unit-testable with synthetic events.
pub struct UiState {
    /// Color applied to newly drawn stroke points
    pen_color: Color,
    /// Stroke hit-test tolerance in screen pixels (from config)
    hit_tolerance: i32,
    /// Current interaction mode
    pub(super) mode: InteractionMode,
    /// Annotation selected by the last press, if any
    pub(super) selected_text: Option<usize>,
    /// Stroke selected by the last press, if any
    pub(super) selected_stroke: Option<usize>,
    /// Character index of the cursor glyph while editing
    pub(super) cursor_position: usize,
    /// Image-space point where the last press landed (text insertion point)
    pub(super) insertion_point: (i32, i32),
    /// Whether the primary button is currently held after an in-area press
    pub(super) mouse_pressed: bool,
    /// Whether the display needs to be redrawn for state-only changes
    /// (selection highlights); model mutations notify listeners separately
    pub needs_redraw: bool,
}

impl UiState {
    /// Creates an idle state with the given pen color and stroke hit
    /// tolerance.
    pub fn new(pen_color: Color, hit_tolerance: i32) -> Self {
        Self {
            pen_color,
            hit_tolerance,
            mode: InteractionMode::Idle,
            selected_text: None,
            selected_stroke: None,
            cursor_position: 0,
            insertion_point: (0, 0),
            mouse_pressed: false,
            needs_redraw: false,
        }
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Color applied to newly drawn stroke points.
    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    /// Stroke hit-test tolerance in screen pixels.
    pub fn hit_tolerance(&self) -> i32 {
        self.hit_tolerance
    }

    /// The annotation selected by the last press, if any.
    pub fn selected_text(&self) -> Option<usize> {
        self.selected_text
    }

    /// The stroke selected by the last press, if any.
    pub fn selected_stroke(&self) -> Option<usize> {
        self.selected_stroke
    }

    /// Character index of the cursor glyph while editing.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Applies a color chosen from the color-picker collaborator.
    ///
    /// Recolors the selected annotation or stroke when one is selected;
    /// otherwise the color becomes the pen color for future strokes.
    pub fn apply_color(&mut self, model: &mut PhotoModel, color: Color) {
        if let Some(index) = self.selected_text {
            if let Err(err) = model.set_color(index, color) {
                log::warn!("color change dropped: {err}");
            }
        } else if let Some(line) = self.selected_stroke {
            model.recolor_stroke(line, color);
        } else {
            self.pen_color = color;
            log::debug!("pen color set to {}", util::color_to_name(&color));
        }
        self.needs_redraw = true;
    }

    /// Commits an in-progress text edit: strips the cursor glyph, clears the
    /// cursor flag, and drops the selection.
    pub(super) fn commit_text_edit(&mut self, model: &mut PhotoModel) {
        if let Some(index) = self.selected_text {
            let editing = model
                .annotations()
                .get(index)
                .is_some_and(|ann| ann.has_cursor());
            if editing {
                let text = model
                    .annotations()
                    .get(index)
                    .map(|ann| annotation::strip_cursor(ann.text(), self.cursor_position));
                if let Some(text) = text {
                    if let Err(err) = model.set_has_cursor(index, false) {
                        log::warn!("commit dropped: {err}");
                    }
                    if let Err(err) = model.set_text(index, text) {
                        log::warn!("commit dropped: {err}");
                    }
                }
            }
        }
        self.selected_text = None;
        self.cursor_position = 0;
        self.mode = InteractionMode::Idle;
    }

    /// Begins editing an existing annotation: ensures the text carries a
    /// trailing cursor glyph and places the cursor on it.
    pub(super) fn begin_text_edit(&mut self, model: &mut PhotoModel, index: usize) {
        let Some(ann) = model.annotations().get(index) else {
            return;
        };
        if ann.has_cursor() {
            self.cursor_position = ann.text().chars().count().saturating_sub(1);
        } else {
            let (text, cursor) = annotation::append_cursor(ann.text());
            if let Err(err) = model.set_text(index, text) {
                log::warn!("edit start dropped: {err}");
                return;
            }
            if let Err(err) = model.set_has_cursor(index, true) {
                log::warn!("edit start dropped: {err}");
            }
            self.cursor_position = cursor;
        }
        self.mode = InteractionMode::EditingText;
    }
}
