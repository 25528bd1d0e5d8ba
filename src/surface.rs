//! The annotation surface: model ownership, event forwarding, painting.
//!
//! `PhotoSurface` is what a host shell embeds: it owns the [`PhotoModel`]
//! and the interaction state machine, registers a change listener that
//! raises a repaint flag, and paints one frame at a time into a Cairo
//! context supplied by the host. All model mutation and painting happen on
//! the host's UI thread; change listeners fire synchronously before the
//! triggering event handler returns, so a queued repaint always observes
//! the already-mutated model.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::draw::{Color, PangoMetrics, RenderStyle, Viewport, render_scene};
use crate::image::PhotoImage;
use crate::input::events::{Key, MouseButton};
use crate::input::state::UiState;
use crate::model::PhotoModel;

/// Color selection collaborator (e.g. a toolbar color chooser dialog).
pub trait ColorPicker {
    /// Presents a color selection UI seeded with `current`.
    /// Returns the chosen color, or `None` when the user cancelled.
    fn pick(&mut self, current: Color) -> Option<Color>;
}

/// The embeddable annotation widget core.
pub struct PhotoSurface {
    model: PhotoModel,
    state: UiState,
    style: RenderStyle,
    viewport: Viewport,
    repaint: Rc<Cell<bool>>,
}

impl PhotoSurface {
    /// Creates a surface displaying `image`, configured from `config`.
    pub fn new(image: PhotoImage, config: &Config) -> Self {
        let mut model = PhotoModel::new(image);

        let repaint = Rc::new(Cell::new(true));
        let flag = repaint.clone();
        model.add_change_listener(move || flag.set(true));

        Self {
            model,
            state: UiState::new(config.pen_color(), config.hit.stroke_tolerance),
            style: config.render_style(),
            // Empty until the first paint supplies the component size;
            // pointer events before then land outside the image area.
            viewport: Viewport::fit(0, 0, 0, 0),
            repaint,
        }
    }

    /// Read access to the annotation model.
    pub fn model(&self) -> &PhotoModel {
        &self.model
    }

    /// Read access to the interaction state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Replaces the displayed image, keeping existing annotations.
    pub fn set_image(&mut self, image: PhotoImage) {
        self.model.set_image(image);
    }

    /// True when the model or the interaction state changed since the last
    /// paint.
    pub fn needs_repaint(&self) -> bool {
        self.repaint.get() || self.state.needs_redraw
    }

    /// Paints one frame into `ctx`. The viewport is recomputed from the
    /// component size on every call, so resizes need no extra bookkeeping.
    pub fn paint(&mut self, ctx: &cairo::Context, component_w: i32, component_h: i32) {
        self.viewport = Viewport::fit(
            component_w,
            component_h,
            self.model.image().width(),
            self.model.image().height(),
        );
        render_scene(
            ctx,
            &self.model,
            &self.viewport,
            &self.style,
            self.state.selected_stroke(),
        );
        self.repaint.set(false);
        self.state.needs_redraw = false;
    }

    // ========================================================================
    // Event forwarding
    // ========================================================================

    /// Forwards a double click (flip toggle).
    pub fn handle_double_click(&mut self, x: i32, y: i32) {
        self.state
            .on_double_click(&mut self.model, &self.viewport, x, y);
    }

    /// Forwards a mouse button press.
    pub fn handle_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        let Some(metrics) = self.measurement_metrics() else {
            return;
        };
        self.state
            .on_mouse_press(&mut self.model, &self.viewport, &metrics, button, x, y);
    }

    /// Forwards a pointer drag.
    pub fn handle_mouse_drag(&mut self, x: i32, y: i32) {
        let Some(metrics) = self.measurement_metrics() else {
            return;
        };
        self.state
            .on_mouse_drag(&mut self.model, &self.viewport, &metrics, x, y);
    }

    /// Forwards a mouse button release.
    pub fn handle_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        self.state
            .on_mouse_release(&mut self.model, &self.viewport, button, x, y);
    }

    /// Forwards a key press.
    pub fn handle_key_press(&mut self, key: Key) {
        self.state.on_key_press(&mut self.model, key);
    }

    /// Runs the color-picker collaborator and applies its result to the
    /// current selection, or to the pen when nothing is selected.
    pub fn select_color(&mut self, picker: &mut dyn ColorPicker) {
        let Some(color) = picker.pick(self.state.pen_color()) else {
            return;
        };
        self.state.apply_color(&mut self.model, color);
    }

    /// Text metrics for hit-testing and drag centering outside a paint pass.
    fn measurement_metrics(&self) -> Option<PangoMetrics> {
        match PangoMetrics::for_measurement(&self.style.font, self.style.font_size) {
            Ok(metrics) => Some(metrics),
            Err(err) => {
                log::warn!("text metrics unavailable: {err}");
                None
            }
        }
    }
}
