//! Drawing primitives and their placements.

use std::rc::Rc;

use crate::{
    draw::{StyleClass, SymbolTemplate},
    geometry::{Bounds, Point, Size},
};

/// A single shape, described in the unrotated frame where it points along +Y.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Closed polygon through the given vertices.
    Polygon { points: Vec<Point> },
    /// Straight segment.
    Line { from: Point, to: Point },
    /// Circle outline or disc.
    Circle { center: Point, radius: f32 },
    /// Text drawn at `anchor`; alignment comes from the style class.
    Text { content: String, anchor: Point },
    /// An instance of a shared symbol, its view box stretched onto the
    /// rectangle at `insert` with `size`.
    Instance {
        symbol: Rc<SymbolTemplate>,
        insert: Point,
        size: Size,
    },
}

/// A primitive together with its rotation about the origin and style class.
///
/// Every shape in a rose is defined once pointing along +Y and then turned
/// into position; the rotation is never baked into the primitive itself.
///
/// # Examples
///
/// ```
/// # use windrose_core::draw::{Placement, Primitive, StyleClass};
/// # use windrose_core::geometry::Point;
/// let spoke = Primitive::Line {
///     from: Point::default(),
///     to: Point::new(0.0, 100.0),
/// };
/// let placement = Placement::new(spoke, StyleClass::WindLine).with_rotation(90.0);
///
/// let tip = placement.world_points()[1];
/// assert!((tip.x() + 100.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    primitive: Primitive,
    rotation: f32,
    class: StyleClass,
}

impl Placement {
    /// Construct an unrotated placement.
    pub fn new(primitive: Primitive, class: StyleClass) -> Self {
        Self {
            primitive,
            rotation: 0.0,
            class,
        }
    }

    /// Set the rotation in degrees (builder style).
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Rotation about the origin, in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn class(&self) -> StyleClass {
        self.class
    }

    /// Resolves the placement's defining points to absolute coordinates.
    ///
    /// Returns the polygon vertices, the two line endpoints, the circle
    /// centre, or the text anchor after rotation. For symbol instances the
    /// template vertices are first mapped from the template's view box onto
    /// the insertion rectangle.
    pub fn world_points(&self) -> Vec<Point> {
        let local = match &self.primitive {
            Primitive::Polygon { points } => points.clone(),
            Primitive::Line { from, to } => vec![*from, *to],
            Primitive::Circle { center, .. } => vec![*center],
            Primitive::Text { anchor, .. } => vec![*anchor],
            Primitive::Instance {
                symbol,
                insert,
                size,
            } => {
                let target = Bounds::new_from_top_left(*insert, *size);
                let view_box = symbol.view_box();
                symbol
                    .points()
                    .iter()
                    .map(|point| view_box.map_to(target, *point))
                    .collect()
            }
        };

        local
            .into_iter()
            .map(|point| point.rotate(self.rotation))
            .collect()
    }
}
