//! Fit-to-component image viewport and coordinate transforms.
//!
//! The viewport maps between image space (the raster's own pixel grid) and
//! screen space (the host component's surface, where the image is drawn
//! scaled and centered). It is recomputed once per paint pass from the
//! current component size and never cached across resizes.

/// Screen placement of the scaled, centered image inside the host component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    origin_x: i32,
    origin_y: i32,
    scaled_width: i32,
    scaled_height: i32,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    /// Computes the viewport that fits an image inside a component.
    ///
    /// The scale is uniform (`min(w/imgW, h/imgH)`, aspect ratio preserved;
    /// images smaller than the component scale up uniformly). The per-axis
    /// effective scales are recomputed from the truncated scaled dimensions
    /// so that `to_screen`/`to_image` agree exactly with the drawn raster.
    ///
    /// Degenerate component or image dimensions produce an empty viewport
    /// for which [`Viewport::is_in_area`] is always false.
    pub fn fit(component_w: i32, component_h: i32, image_w: i32, image_h: i32) -> Self {
        if component_w <= 0 || component_h <= 0 || image_w <= 0 || image_h <= 0 {
            return Self::empty();
        }

        let scale_x = component_w as f64 / image_w as f64;
        let scale_y = component_h as f64 / image_h as f64;
        let scale = scale_x.min(scale_y);

        let scaled_width = (image_w as f64 * scale) as i32;
        let scaled_height = (image_h as f64 * scale) as i32;
        if scaled_width <= 0 || scaled_height <= 0 {
            return Self::empty();
        }

        Self {
            origin_x: (component_w - scaled_width) / 2,
            origin_y: (component_h - scaled_height) / 2,
            scaled_width,
            scaled_height,
            scale_x: scaled_width as f64 / image_w as f64,
            scale_y: scaled_height as f64 / image_h as f64,
        }
    }

    fn empty() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            scaled_width: 0,
            scaled_height: 0,
            scale_x: 0.0,
            scale_y: 0.0,
        }
    }

    /// Returns true when the viewport has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.scaled_width <= 0 || self.scaled_height <= 0
    }

    /// Maps an image-space point to screen space (`screen = image*scale + origin`).
    pub fn to_screen(&self, point: (i32, i32)) -> (i32, i32) {
        (
            (point.0 as f64 * self.scale_x) as i32 + self.origin_x,
            (point.1 as f64 * self.scale_y) as i32 + self.origin_y,
        )
    }

    /// Maps a screen-space point back to image space (inverse of `to_screen`).
    pub fn to_image(&self, point: (i32, i32)) -> (i32, i32) {
        if self.scale_x <= 0.0 || self.scale_y <= 0.0 {
            return (0, 0);
        }
        (
            ((point.0 - self.origin_x) as f64 / self.scale_x) as i32,
            ((point.1 - self.origin_y) as f64 / self.scale_y) as i32,
        )
    }

    /// Returns true when a screen-space point lies within the scaled image's
    /// bounding rectangle. Bounds are inclusive on all four edges.
    pub fn is_in_area(&self, point: (i32, i32)) -> bool {
        !self.is_empty()
            && point.0 >= self.origin_x
            && point.0 <= self.origin_x + self.scaled_width
            && point.1 >= self.origin_y
            && point.1 <= self.origin_y + self.scaled_height
    }

    /// Screen-space top-left corner of the scaled image.
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    /// Width of the scaled image in screen pixels.
    pub fn scaled_width(&self) -> i32 {
        self.scaled_width
    }

    /// Height of the scaled image in screen pixels.
    pub fn scaled_height(&self) -> i32 {
        self.scaled_height
    }

    /// Screen-space y coordinate of the scaled image's bottom edge.
    /// Text lines laid out at or below this baseline are dropped.
    pub fn bottom(&self) -> i32 {
        self.origin_y + self.scaled_height
    }

    /// Effective horizontal scale (screen pixels per image pixel).
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Effective vertical scale (screen pixels per image pixel).
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_centers_and_preserves_aspect() {
        let vp = Viewport::fit(200, 100, 100, 100);
        assert_eq!(vp.scaled_width(), 100);
        assert_eq!(vp.scaled_height(), 100);
        assert_eq!(vp.origin(), (50, 0));
    }

    #[test]
    fn fit_downscales_uniformly() {
        let vp = Viewport::fit(50, 80, 100, 100);
        assert_eq!(vp.scaled_width(), 50);
        assert_eq!(vp.scaled_height(), 50);
        assert_eq!(vp.origin(), (0, 15));
        assert_eq!(vp.scale_x(), 0.5);
        assert_eq!(vp.scale_y(), 0.5);
    }

    #[test]
    fn fit_upscales_small_images_uniformly() {
        let vp = Viewport::fit(400, 300, 100, 100);
        assert_eq!(vp.scaled_width(), 300);
        assert_eq!(vp.scaled_height(), 300);
        assert_eq!(vp.origin(), (50, 0));
    }

    #[test]
    fn degenerate_dimensions_give_empty_viewport() {
        assert!(Viewport::fit(0, 100, 50, 50).is_empty());
        assert!(Viewport::fit(100, 100, 0, 50).is_empty());
        assert!(!Viewport::fit(100, 100, 50, 50).is_empty());
        assert!(!Viewport::fit(0, 100, 50, 50).is_in_area((0, 0)));
    }

    #[test]
    fn round_trip_within_one_pixel() {
        let vp = Viewport::fit(50, 50, 100, 100);
        for p in [(0, 0), (3, 3), (50, 51), (99, 99), (42, 7)] {
            let back = vp.to_image(vp.to_screen(p));
            assert!(
                (back.0 - p.0).abs() <= 1 && (back.1 - p.1).abs() <= 1,
                "round trip of {p:?} drifted to {back:?}"
            );
        }
    }

    #[test]
    fn transform_matches_affine_form_at_unit_scale() {
        // Wider component than image: unit scale, centered horizontally.
        let vp = Viewport::fit(120, 100, 100, 100);
        assert_eq!(vp.origin(), (10, 0));
        assert_eq!(vp.to_screen((0, 0)), (10, 0));
        assert_eq!(vp.to_screen((100, 100)), (110, 100));
        assert_eq!(vp.to_image((10, 0)), (0, 0));
        assert_eq!(vp.to_image((60, 50)), (50, 50));
    }

    #[test]
    fn is_in_area_inclusive_at_all_edges() {
        let vp = Viewport::fit(120, 100, 100, 100);
        // Image spans [10, 110] horizontally and [0, 100] vertically.
        assert!(vp.is_in_area((10, 50)));
        assert!(vp.is_in_area((110, 50)));
        assert!(vp.is_in_area((60, 0)));
        assert!(vp.is_in_area((60, 100)));
        assert!(!vp.is_in_area((9, 50)));
        assert!(!vp.is_in_area((111, 50)));
        assert!(!vp.is_in_area((60, -1)));
        assert!(!vp.is_in_area((60, 101)));
    }
}
