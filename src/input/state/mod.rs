mod core;
mod keyboard;
mod mouse;
#[cfg(test)]
mod tests;

pub use core::{InteractionMode, UiState};
