// ABOUTME: Pixel and fraction conversions for the split view.
// ABOUTME: Holds the single minimum-size clamping policy shared by both axes.

use serde::Serialize;

/// Pointer coordinate in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle in whole viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x as f64
            && point.x < (self.x + self.width) as f64
            && point.y >= self.y as f64
            && point.y < (self.y + self.height) as f64
    }
}

/// Slack for fractions that were stored as `pixels / base` and lost the
/// last bit on the way back.
const ROUNDING_SLACK: f64 = 1e-6;

/// Round a pixel quantity down, tolerating representation error
pub fn floor_pixels(value: f64) -> i64 {
    (value + ROUNDING_SLACK).floor() as i64
}

/// Resolve a fraction against a base dimension, rounding down.
/// Non-positive bases and non-finite products resolve to zero.
pub fn to_pixels(fraction: f64, base: i64) -> i64 {
    if base <= 0 {
        return 0;
    }
    let pixels = fraction * base as f64;
    if pixels.is_finite() {
        floor_pixels(pixels).max(0)
    } else {
        0
    }
}

/// Inverse of [`to_pixels`], clamped into `[0, 1]`.
pub fn to_fraction(pixels: i64, base: i64) -> f64 {
    if base <= 0 {
        return 0.0;
    }
    (pixels as f64 / base as f64).clamp(0.0, 1.0)
}

/// Enforce `min_size` on a pair of adjacent sizes sharing `combined` pixels.
///
/// The first pane is checked first. When `combined` cannot hold two minimums
/// the floor drops to half of it, so the result always sums to `combined`
/// and neither side goes negative.
pub fn clamp_pair(a: i64, b: i64, combined: i64, min_size: i64) -> (i64, i64) {
    let floor = min_size.min(combined / 2).max(0);
    let rest = (combined - floor).max(0);
    if a < floor {
        (combined - rest, rest)
    } else if b < floor {
        (rest, combined - rest)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixels_floors() {
        assert_eq!(to_pixels(0.33333, 1200), 399);
        assert_eq!(to_pixels(0.5, 985), 492);
    }

    #[test]
    fn to_pixels_survives_fraction_round_trip() {
        // 0.29 * 100.0 is 28.999999999999996 in f64
        assert_eq!(to_pixels(to_fraction(29, 100), 100), 29);
        for px in 0..=1000 {
            assert_eq!(to_pixels(to_fraction(px, 1000), 1000), px);
        }
    }

    #[test]
    fn to_pixels_guards_degenerate_base() {
        assert_eq!(to_pixels(0.5, 0), 0);
        assert_eq!(to_pixels(0.5, -10), 0);
        assert_eq!(to_pixels(f64::NAN, 100), 0);
    }

    #[test]
    fn to_fraction_guards_degenerate_base() {
        assert_eq!(to_fraction(100, 0), 0.0);
        assert_eq!(to_fraction(-5, 100), 0.0);
        assert_eq!(to_fraction(250, 1000), 0.25);
    }

    #[test]
    fn clamp_pair_passes_through_when_both_fit() {
        assert_eq!(clamp_pair(300, 200, 500, 150), (300, 200));
    }

    #[test]
    fn clamp_pair_raises_first_pane() {
        assert_eq!(clamp_pair(100, 400, 500, 150), (150, 350));
    }

    #[test]
    fn clamp_pair_raises_second_pane() {
        assert_eq!(clamp_pair(420, 80, 500, 150), (350, 150));
    }

    #[test]
    fn clamp_pair_stays_inside_small_budget() {
        // 146 px cannot hold two 150 px panes
        assert_eq!(clamp_pair(63, 83, 146, 150), (73, 73));
        assert_eq!(clamp_pair(120, 27, 147, 150), (74, 73));
        for a in -200..=400 {
            let (x, y) = clamp_pair(a, 147 - a, 147, 150);
            assert_eq!(x + y, 147);
            assert!(x >= 73 && y >= 73);
        }
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10, 0, 5, 100);
        assert!(rect.contains(Point::new(10.0, 50.0)));
        assert!(rect.contains(Point::new(14.9, 50.0)));
        assert!(!rect.contains(Point::new(15.0, 50.0)));
        assert!(!Rect::new(10, 0, 0, 100).contains(Point::new(10.0, 50.0)));
    }
}
