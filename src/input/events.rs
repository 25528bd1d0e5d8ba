//! Generic input event types for host-toolkit compatibility.

/// Generic key representation for host-toolkit compatibility.
///
/// Host shells map their native key codes to these generic key values for
/// unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Backspace key
    Backspace,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary interaction button)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}
