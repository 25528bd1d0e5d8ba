use crate::input::events::Key;
use crate::model::{PhotoModel, annotation};

use super::{InteractionMode, UiState};

impl UiState {
    /// Processes a key press.
    ///
    /// Keys are only consumed while the primary button is held and no
    /// freehand stroke is in progress. With no annotation associated with
    /// this press, a printable character creates a new annotation at the
    /// stored insertion point; with one, the key edits it in place
    /// (backspace, arrow keys, printable insertion).
    pub fn on_key_press(&mut self, model: &mut PhotoModel, key: Key) {
        if !self.mouse_pressed || self.mode == InteractionMode::Drawing {
            return;
        }

        match self.selected_text {
            Some(index) => self.edit_annotation(model, index, key),
            None => self.create_annotation(model, key),
        }
    }

    /// Creates a new annotation seeded with the pressed character plus a
    /// trailing cursor glyph.
    fn create_annotation(&mut self, model: &mut PhotoModel, key: Key) {
        let Key::Char(ch) = key else {
            return;
        };
        if ch.is_control() {
            return;
        }

        let (text, cursor) = annotation::seed_text(ch);
        model.add_annotation(text, self.insertion_point, self.pen_color());
        let index = model.annotations().len() - 1;
        if let Err(err) = model.set_has_cursor(index, true) {
            log::warn!("annotation creation incomplete: {err}");
        }

        self.selected_text = Some(index);
        self.selected_stroke = None;
        self.cursor_position = cursor;
        self.mode = InteractionMode::EditingText;
    }

    /// Edits the selected annotation in place around its cursor glyph.
    fn edit_annotation(&mut self, model: &mut PhotoModel, index: usize, key: Key) {
        let Some(ann) = model.annotations().get(index) else {
            return;
        };
        let text = ann.text().to_string();

        let (new_text, new_cursor) = match key {
            Key::Backspace => annotation::delete_before(&text, self.cursor_position),
            Key::Left => annotation::move_left(&text, self.cursor_position),
            Key::Right => annotation::move_right(&text, self.cursor_position),
            Key::Char(ch) if !ch.is_control() => {
                annotation::insert_char(&text, self.cursor_position, ch)
            }
            _ => return,
        };

        // Guarded edits at the text boundaries resolve to no-ops.
        if new_text == text && new_cursor == self.cursor_position {
            return;
        }

        self.cursor_position = new_cursor;
        if let Err(err) = model.set_has_cursor(index, true) {
            log::warn!("edit dropped: {err}");
            return;
        }
        if let Err(err) = model.set_text(index, new_text) {
            log::warn!("edit dropped: {err}");
        }
    }
}
