//! Photo annotation widget core.
//!
//! Displays an image scaled and centered inside a host component; in
//! annotate mode the user draws freehand colored strokes and places
//! movable, editable text labels over it, with hit-testing to select and
//! recolor existing strokes and labels. Host shells own the window, menus,
//! and toolbars; they embed a [`PhotoSurface`], forward input events to it,
//! and hand it a Cairo context each frame.

pub mod config;
pub mod draw;
pub mod image;
pub mod input;
pub mod model;
pub mod surface;
pub mod util;

pub use config::Config;
pub use image::PhotoImage;
pub use model::PhotoModel;
pub use surface::{ColorPicker, PhotoSurface};
