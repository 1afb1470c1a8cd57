use crate::types::Point;

pub const MIN_ZOOM: i32 = 25;
pub const MAX_ZOOM: i32 = 200;
pub const ZOOM_STEP: i32 = 25;

/// Floor for the comment-pin scale factor: pins shrink with zoom-out, but
/// never below 80% of their natural size.
pub const MIN_PIN_SCALE: f64 = 0.8;

/// Zoom/pan view state for the design canvas.
///
/// Design-space coordinate `d` maps to screen space (pixels relative to the
/// canvas surface's own top-left corner) as `d * scale + pan`, applied
/// independently per axis. `to_design` is the inverse, used when translating
/// a click into a comment position; the placed point is stored in design
/// space once, so it stays pinned under later zoom/pan changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Integer zoom percentage, stepped by 25 within [25, 200].
    pub zoom: i32,
    /// Pan offset in screen pixels.
    pub pan: Point,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: 100,
            pan: Point::zero(),
        }
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.zoom) / 100.0
    }

    pub fn pin_scale(&self) -> f64 {
        self.scale().max(MIN_PIN_SCALE)
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn to_screen(&self, design: Point) -> Point {
        let k = self.scale();
        Point::new(design.x * k + self.pan.x, design.y * k + self.pan.y)
    }

    pub fn to_design(&self, screen: Point) -> Point {
        let k = self.scale();
        Point::new((screen.x - self.pan.x) / k, (screen.y - self.pan.y) / k)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn round_trip_is_exact_for_every_zoom_step() {
        let pans = [
            Point::zero(),
            Point::new(37.5, -12.25),
            Point::new(-400.0, 220.0),
        ];
        let click = Point::new(123.456, 789.012);

        for zoom in (MIN_ZOOM..=MAX_ZOOM).step_by(ZOOM_STEP as usize) {
            for pan in pans {
                let vp = Viewport { zoom, pan };
                assert_close(vp.to_screen(vp.to_design(click)), click);
                assert_close(vp.to_design(vp.to_screen(click)), click);
            }
        }
    }

    #[test]
    fn placed_comment_stays_at_click_position() {
        // Placing at screen point p must re-render at p for the viewport in
        // effect at placement time.
        let vp = Viewport {
            zoom: 75,
            pan: Point::new(14.0, -33.0),
        };
        let click = Point::new(250.0, 97.5);
        let design = vp.to_design(click);
        assert_close(vp.to_screen(design), click);
    }

    #[test]
    fn zoom_in_saturates_at_max() {
        let mut vp = Viewport::new();
        for _ in 0..10 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom, MAX_ZOOM);
        vp.zoom_in();
        assert_eq!(vp.zoom, MAX_ZOOM);
    }

    #[test]
    fn zoom_out_saturates_at_min() {
        let mut vp = Viewport::new();
        for _ in 0..10 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
        vp.zoom_out();
        assert_eq!(vp.zoom, MIN_ZOOM);
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut vp = Viewport {
            zoom: 175,
            pan: Point::new(-90.0, 41.0),
        };
        vp.reset();
        assert_eq!(vp, Viewport::new());
        assert_eq!(vp.zoom, 100);
        assert_eq!(vp.pan, Point::zero());
    }

    #[test]
    fn pin_scale_never_drops_below_floor() {
        let mut vp = Viewport::new();
        assert_eq!(vp.pin_scale(), 1.0);

        vp.zoom = 25;
        assert_eq!(vp.pin_scale(), MIN_PIN_SCALE);
        vp.zoom = 50;
        assert_eq!(vp.pin_scale(), MIN_PIN_SCALE);
        vp.zoom = 150;
        assert_eq!(vp.pin_scale(), 1.5);
    }
}
