//! Geometric primitives for diagram-interchange coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, used for waypoints and translations
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box, as recorded by a DI `dc:Bounds` record
//!
//! # Coordinate System
//!
//! BPMN DI uses the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner and Y grows downward, so DI coordinates
//! can be written into the SVG output without any flipping.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use bpmnview_core::geometry::Point;
/// let waypoint = Point::new(136.0, 120.5);
///
/// assert_eq!(waypoint.x(), 136.0);
/// assert_eq!(waypoint.y(), 120.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of the two dimensions
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the center of a box of this size whose top-left corner is the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A rectangular box as recorded by `dc:Bounds`: a top-left corner and a size.
///
/// Both parts are stored exactly as read, so the width and height handed to
/// the shape renderers are the recorded values, never a difference of corners.
///
/// # Examples
///
/// ```
/// # use bpmnview_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(152.7, 20.0), Size::new(100.1, 50.0));
/// assert_eq!(bounds.top_left(), Point::new(152.7, 20.0));
/// assert_eq!(bounds.size(), Size::new(100.1, 50.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    top_left: Point,
    size: Size,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self { top_left, size }
    }

    /// Returns the x-coordinate of the top-left corner
    pub fn x(self) -> f32 {
        self.top_left.x
    }

    /// Returns the y-coordinate of the top-left corner
    pub fn y(self) -> f32 {
        self.top_left.y
    }

    /// Returns the recorded width
    pub fn width(self) -> f32 {
        self.size.width
    }

    /// Returns the recorded height
    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Returns the top-left corner as a Point
    pub fn top_left(self) -> Point {
        self.top_left
    }

    /// Returns the recorded size
    pub fn size(self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_approx_eq!(f32, bounds.x(), 10.0);
        assert_approx_eq!(f32, bounds.y(), 20.0);
        assert_approx_eq!(f32, bounds.width(), 100.0);
        assert_approx_eq!(f32, bounds.height(), 50.0);
    }

    #[test]
    fn test_bounds_keep_recorded_size() {
        let cases = [
            (152.7, 100.1),
            (1032.666_7, 36.3),
            (100_000.0, 0.3),
            (16_777_216.0, 1.0),
        ];

        for (x, width) in cases {
            let bounds = Bounds::new_from_top_left(Point::new(x, 0.0), Size::new(width, 10.0));
            assert_eq!(bounds.width(), width);
            assert_eq!(bounds.size(), Size::new(width, 10.0));
            assert_eq!(bounds.top_left().x(), x);
        }
    }

    #[test]
    fn test_size_center_and_min_dimension() {
        let size = Size::new(36.0, 40.0);

        assert_eq!(size.center(), Point::new(18.0, 20.0));
        assert_approx_eq!(f32, size.min_dimension(), 36.0);
    }
}
