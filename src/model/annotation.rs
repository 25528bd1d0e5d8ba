//! Text annotations and cursor-glyph editing.
//!
//! While an annotation is being edited its text embeds exactly one cursor
//! glyph (`|`) at the edit position; the glyph is stripped when the edit is
//! committed. The editing helpers below are pure string surgery over
//! `(text, cursor)` pairs so the interaction state machine stays free of
//! index arithmetic; every operation clamps the cursor before touching the
//! text and degrades to a no-op instead of panicking.

use crate::draw::Color;

/// The literal character embedded in an annotation's text to mark the edit
/// position.
pub const CURSOR_GLYPH: char = '|';

/// A movable, recolorable text label anchored at an image-space point.
#[derive(Debug, Clone)]
pub struct TextAnnotation {
    text: String,
    origin: (i32, i32),
    color: Color,
    has_cursor: bool,
}

impl TextAnnotation {
    /// Creates an annotation with the given content, insertion point, and color.
    pub fn new(text: String, origin: (i32, i32), color: Color) -> Self {
        Self {
            text,
            origin,
            color,
            has_cursor: false,
        }
    }

    /// Current text content (including the cursor glyph while editing).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Image-space insertion point.
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub(crate) fn set_origin(&mut self, origin: (i32, i32)) {
        self.origin = origin;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// True while the annotation is being edited (text embeds the cursor glyph).
    pub fn has_cursor(&self) -> bool {
        self.has_cursor
    }

    pub(crate) fn set_has_cursor(&mut self, has_cursor: bool) {
        self.has_cursor = has_cursor;
    }

    /// True when the text is empty or whitespace-only. Blank annotations are
    /// not recentered while dragged.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// ============================================================================
// Cursor editing operations
// ============================================================================

fn chars_of(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn collect(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

/// Seeds a fresh annotation's text from the first typed character:
/// the character followed by the cursor glyph, cursor at position 1.
pub fn seed_text(ch: char) -> (String, usize) {
    (format!("{ch}{CURSOR_GLYPH}"), 1)
}

/// Appends a trailing cursor glyph to committed text (clicking an existing
/// annotation resumes editing at its end). Returns the new text and the
/// cursor position.
pub fn append_cursor(text: &str) -> (String, usize) {
    let cursor = text.chars().count();
    (format!("{text}{CURSOR_GLYPH}"), cursor)
}

/// Removes the cursor glyph at `cursor`, producing the committed text.
/// Leaves the text untouched when `cursor` does not point at a glyph.
pub fn strip_cursor(text: &str, cursor: usize) -> String {
    let mut chars = chars_of(text);
    if chars.get(cursor) == Some(&CURSOR_GLYPH) {
        chars.remove(cursor);
    }
    collect(chars)
}

/// Inserts a character before the cursor glyph and advances the cursor.
pub fn insert_char(text: &str, cursor: usize, ch: char) -> (String, usize) {
    let mut chars = chars_of(text);
    let cursor = cursor.min(chars.len());
    chars.insert(cursor, ch);
    (collect(chars), cursor + 1)
}

/// Deletes the character immediately before the cursor and moves the cursor
/// back one. No-op when the cursor is already at position 0.
pub fn delete_before(text: &str, cursor: usize) -> (String, usize) {
    let mut chars = chars_of(text);
    if cursor == 0 || cursor > chars.len() {
        return (collect(chars), cursor.min(chars.len()));
    }
    chars.remove(cursor - 1);
    (collect(chars), cursor - 1)
}

/// Moves the cursor glyph one character left by swapping it with its left
/// neighbor. No-op at position 0 or when everything left of the cursor is
/// blank.
pub fn move_left(text: &str, cursor: usize) -> (String, usize) {
    let mut chars = chars_of(text);
    if cursor == 0 || cursor >= chars.len() {
        return (collect(chars), cursor.min(chars.len().saturating_sub(1)));
    }
    if chars[..cursor].iter().all(|c| c.is_whitespace()) {
        return (collect(chars), cursor);
    }
    chars.swap(cursor - 1, cursor);
    (collect(chars), cursor - 1)
}

/// Moves the cursor glyph one character right by swapping it with its right
/// neighbor. No-op when the cursor is already on the last character.
pub fn move_right(text: &str, cursor: usize) -> (String, usize) {
    let mut chars = chars_of(text);
    if chars.is_empty() || cursor + 1 >= chars.len() {
        return (collect(chars), cursor);
    }
    chars.swap(cursor, cursor + 1);
    (collect(chars), cursor + 1)
}
