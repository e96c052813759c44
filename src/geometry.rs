//! Addressing geometry for the controller's frame memory.
//!
//! Coordinates are byte-addressable (0-255); the panel itself only spans
//! 128x160 of that space. Rectangle bounds are inclusive, matching the
//! CASET/RASET parameter semantics.

/// A single cell in the controller's frame memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Point { x, y }
    }
}

/// A draw window, inclusive on both corners.
///
/// Invariant: `top_left.x <= bottom_right.x` and
/// `top_left.y <= bottom_right.y`. Constructing a rectangle that violates
/// this is a caller error; the width/height math assumes it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Rect {
            top_left,
            bottom_right,
        }
    }

    /// Width in pixels, inclusive of both edges.
    pub const fn width(&self) -> u16 {
        (self.bottom_right.x - self.top_left.x) as u16 + 1
    }

    /// Height in pixels, inclusive of both edges.
    pub const fn height(&self) -> u16 {
        (self.bottom_right.y - self.top_left.y) as u16 + 1
    }

    /// Number of frame memory cells the window covers.
    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let r = Rect::new(Point::new(10, 20), Point::new(10, 20));
        assert_eq!(r.width(), 1);
        assert_eq!(r.height(), 1);
        assert_eq!(r.pixel_count(), 1);
    }

    #[test]
    fn full_panel_dimensions() {
        let r = Rect::new(Point::new(0, 0), Point::new(127, 159));
        assert_eq!(r.width(), 128);
        assert_eq!(r.height(), 160);
        assert_eq!(r.pixel_count(), 128 * 160);
    }

    #[test]
    fn pixel_count_does_not_overflow_byte_coords() {
        let r = Rect::new(Point::new(0, 0), Point::new(255, 255));
        assert_eq!(r.pixel_count(), 256 * 256);
    }
}
