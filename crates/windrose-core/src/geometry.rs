//! Geometric primitives for rose layout and placement.
//!
//! This module provides the small set of geometric types used throughout
//! Windrose to describe vertices, symbol sizes, and view boxes.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Windrose uses a coordinate system consistent with SVG, with the rose
//! centred on the origin:
//!
//! ```text
//!          -Y
//!           ▲
//!           │
//!   -X ◄────┼────► +X
//!           │
//!           ▼
//!          +Y
//! ```
//!
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//! - **Rotation**: Positive angles turn clockwise on screen, matching SVG's
//!   `rotate(θ)` transform
//!
//! Angles are always expressed in degrees and converted to radians only at
//! the point where a trigonometric function is called.

/// A 2D point representing a position in drawing space.
///
/// # Examples
///
/// ```
/// # use windrose_core::geometry::Point;
/// let p = Point::new(3.0, 4.0);
///
/// assert_eq!(p.x(), 3.0);
/// assert_eq!(p.hypot(), 5.0);
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

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Rotates the point about the origin by `degrees`.
    ///
    /// Uses the same matrix as SVG's `rotate(θ)`, so with Y pointing down a
    /// positive angle turns the point clockwise on screen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use windrose_core::geometry::Point;
    /// // A point straight "below" the origin moves to the left after a quarter turn
    /// let p = Point::new(0.0, 10.0).rotate(90.0);
    /// assert!((p.x() + 10.0).abs() < 1e-4);
    /// assert!(p.y().abs() < 1e-4);
    /// ```
    pub fn rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

/// Represents the dimensions of an element with width and height
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
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate (left edge) of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (top edge) of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate (right edge) of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (bottom edge) of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Maps `point`, given in this box's coordinates, into `target`.
    ///
    /// This is the view-box transform used when a symbol template is placed:
    /// the template's own bounds are stretched onto the placement rectangle.
    /// A degenerate source axis maps to the target's minimum on that axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use windrose_core::geometry::{Bounds, Point, Size};
    /// let source = Bounds::new_from_top_left(Point::new(-1.0, 0.0), Size::new(2.0, 1.0));
    /// let target = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(4.0, 2.0));
    ///
    /// let mapped = source.map_to(target, Point::new(0.0, 1.0));
    /// assert_eq!(mapped, Point::new(12.0, 12.0));
    /// ```
    pub fn map_to(self, target: Bounds, point: Point) -> Point {
        let scale_x = if self.width() == 0.0 {
            0.0
        } else {
            target.width() / self.width()
        };
        let scale_y = if self.height() == 0.0 {
            0.0
        } else {
            target.height() / self.height()
        };

        Point::new(
            target.min_x + (point.x - self.min_x) * scale_x,
            target.min_y + (point.y - self.min_y) * scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_rotate_matches_svg_convention() {
        let p = Point::new(0.0, 100.0);

        let quarter = p.rotate(90.0);
        assert_approx_eq!(f32, quarter.x(), -100.0, epsilon = 1e-3);
        assert_approx_eq!(f32, quarter.y(), 0.0, epsilon = 1e-3);

        let half = p.rotate(180.0);
        assert_approx_eq!(f32, half.x(), 0.0, epsilon = 1e-3);
        assert_approx_eq!(f32, half.y(), -100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_point_rotate_zero_is_identity() {
        let p = Point::new(12.5, -7.0);
        assert_eq!(p.rotate(0.0), p);
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(-5.0, 2.0), Size::new(10.0, 4.0));

        assert_eq!(bounds.min_x(), -5.0);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_x(), 5.0);
        assert_eq!(bounds.max_y(), 6.0);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 4.0);
    }

    #[test]
    fn test_bounds_map_to_identity() {
        let bounds = Bounds::new_from_top_left(Point::new(-3.0, 1.0), Size::new(6.0, 2.0));
        let point = Point::new(1.5, 2.5);
        assert_eq!(bounds.map_to(bounds, point), point);
    }

    #[test]
    fn test_bounds_map_to_degenerate_source() {
        let flat = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(0.0, 4.0));
        let target = Bounds::new_from_top_left(Point::new(7.0, 0.0), Size::new(3.0, 8.0));
        let mapped = flat.map_to(target, Point::new(0.0, 2.0));

        assert_eq!(mapped, Point::new(7.0, 4.0));
    }
}
