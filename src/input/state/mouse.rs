use crate::draw::font::TextMetrics;
use crate::draw::viewport::Viewport;
use crate::input::events::MouseButton;
use crate::input::hit;
use crate::model::PhotoModel;

use super::{InteractionMode, UiState};

impl UiState {
    /// Processes a double click.
    ///
    /// Double-clicking inside the image area toggles between plain display
    /// and annotate mode; clicks outside the area are ignored.
    pub fn on_double_click(&mut self, model: &mut PhotoModel, viewport: &Viewport, x: i32, y: i32) {
        if viewport.is_in_area((x, y)) {
            model.flip();
            self.needs_redraw = true;
        }
    }

    /// Processes a mouse button press.
    ///
    /// # Behavior
    /// Only left presses inside the image area while in annotate mode do
    /// anything. An in-progress text edit is committed first; then the click
    /// is hit-tested - text annotations take priority over strokes:
    /// - over text: that annotation enters editing (trailing cursor glyph)
    /// - over a stroke: the stroke becomes the drag target
    /// - over the bare image: armed to start a fresh stroke on drag
    pub fn on_mouse_press(
        &mut self,
        model: &mut PhotoModel,
        viewport: &Viewport,
        metrics: &dyn TextMetrics,
        button: MouseButton,
        x: i32,
        y: i32,
    ) {
        if button != MouseButton::Left {
            return;
        }
        if !model.flipped() || !viewport.is_in_area((x, y)) {
            return;
        }

        self.commit_text_edit(model);

        self.insertion_point = viewport.to_image((x, y));
        self.selected_stroke = None;

        self.selected_text = hit::hit_test_text(model, viewport, metrics, (x, y));
        if let Some(index) = self.selected_text {
            self.begin_text_edit(model, index);
        } else {
            self.selected_stroke =
                hit::hit_test_stroke(model, viewport, self.hit_tolerance(), (x, y));
            self.mode = if self.selected_stroke.is_some() {
                InteractionMode::DraggingStroke
            } else {
                InteractionMode::Idle
            };
        }

        self.mouse_pressed = true;
        self.needs_redraw = true;
    }

    /// Processes a pointer drag.
    ///
    /// # Behavior
    /// - with a text target: recenters the annotation horizontally on the
    ///   pointer (x shifted by half the rendered text width); blank
    ///   annotations stay put
    /// - with a stroke target: drags the stroke, anchored on its nearest point
    /// - otherwise: appends a freehand point in the pen color
    pub fn on_mouse_drag(
        &mut self,
        model: &mut PhotoModel,
        viewport: &Viewport,
        metrics: &dyn TextMetrics,
        x: i32,
        y: i32,
    ) {
        if !self.mouse_pressed || !viewport.is_in_area((x, y)) {
            return;
        }

        if let Some(index) = self.selected_text {
            let Some(ann) = model.annotations().get(index) else {
                return;
            };
            if !ann.is_blank() {
                let width = metrics.text_width(ann.text());
                let origin = viewport.to_image((x - width / 2, y));
                if let Err(err) = model.set_origin(index, origin) {
                    log::warn!("text drag dropped: {err}");
                }
            }
        } else if let Some(line) = self.selected_stroke {
            model.move_stroke(line, viewport.to_image((x, y)));
            self.mode = InteractionMode::DraggingStroke;
        } else {
            model.add_point(viewport.to_image((x, y)), self.pen_color());
            self.mode = InteractionMode::Drawing;
        }
    }

    /// Processes a mouse button release.
    ///
    /// A left release inside the image area always terminates the current
    /// stroke with a boundary entry; consecutive boundaries collapse to
    /// empty strokes and keep stroke numbering stable.
    pub fn on_mouse_release(
        &mut self,
        model: &mut PhotoModel,
        viewport: &Viewport,
        button: MouseButton,
        x: i32,
        y: i32,
    ) {
        if button != MouseButton::Left {
            return;
        }

        let was_pressed = self.mouse_pressed;
        self.mouse_pressed = false;
        if matches!(
            self.mode,
            InteractionMode::Drawing | InteractionMode::DraggingStroke
        ) {
            self.mode = InteractionMode::Idle;
        }

        if was_pressed && viewport.is_in_area((x, y)) {
            model.end_stroke();
        }
    }
}
