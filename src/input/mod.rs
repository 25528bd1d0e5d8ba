//! Input handling and the interaction state machine.
//!
//! This module translates host-toolkit keyboard and mouse events into model
//! mutations. It maintains the current interaction mode, the selected
//! annotation or stroke, the edit cursor position, and the pen color, and
//! provides the hit-testing that decides what a click lands on.

pub mod events;
pub mod hit;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use state::{InteractionMode, UiState};
