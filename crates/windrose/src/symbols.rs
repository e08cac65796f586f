//! Marker symbol construction.
//!
//! Builds the three shared marker templates and the insertion rectangle each
//! one is placed with. Templates are defined pointing along +Y; a placement
//! only adds a rotation.
//!
//! | Symbol | Half base | Placed base/centre | Reaches |
//! |--------|-----------|--------------------|---------|
//! | small triangle | `ring0·sin(u/2)` | base on `ring0` | `base_radius` |
//! | large triangle | `ring0·sin(u)` | base on `inner_boundary` | `outer_ring` |
//! | diamond | `ring0·sin(u/2)` | centre on `ring0` | `base_radius` |

use std::rc::Rc;

use windrose_core::{
    draw::{Placement, Primitive, StyleClass, SymbolKind, SymbolTemplate},
    geometry::{Bounds, Point, Size},
};

use crate::kernel::{DerivedConstants, sin_deg};

/// A shared template plus the rectangle every instance is inserted at.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSymbol {
    template: Rc<SymbolTemplate>,
    insert: Point,
    size: Size,
}

impl MarkerSymbol {
    pub fn template(&self) -> &Rc<SymbolTemplate> {
        &self.template
    }

    /// Top-left corner of the insertion rectangle before rotation.
    pub fn insert(&self) -> Point {
        self.insert
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Creates one instance of this symbol rotated by `degrees`.
    pub fn place(&self, degrees: f32) -> Placement {
        Placement::new(
            Primitive::Instance {
                symbol: Rc::clone(&self.template),
                insert: self.insert,
                size: self.size,
            },
            self.template.class(),
        )
        .with_rotation(degrees)
    }
}

/// The three marker symbols of a rose.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSet {
    small_triangle: MarkerSymbol,
    large_triangle: MarkerSymbol,
    diamond: MarkerSymbol,
}

impl SymbolSet {
    /// Builds all marker symbols from the derived constants.
    pub fn new(constants: &DerivedConstants) -> Self {
        Self {
            small_triangle: small_triangle(constants),
            large_triangle: large_triangle(constants),
            diamond: diamond(constants),
        }
    }

    pub fn small_triangle(&self) -> &MarkerSymbol {
        &self.small_triangle
    }

    pub fn large_triangle(&self) -> &MarkerSymbol {
        &self.large_triangle
    }

    pub fn diamond(&self) -> &MarkerSymbol {
        &self.diamond
    }

    /// Shared templates in definition order.
    pub fn templates(&self) -> Vec<Rc<SymbolTemplate>> {
        vec![
            Rc::clone(&self.small_triangle.template),
            Rc::clone(&self.large_triangle.template),
            Rc::clone(&self.diamond.template),
        ]
    }
}

/// Triangle with its base on the local X axis and its apex at `(0, height)`.
fn triangle(kind: SymbolKind, half_base: f32, triangle_ratio: f32) -> (SymbolTemplate, Size) {
    let length = half_base * 2.0;
    let height = triangle_ratio * length;
    let points = vec![
        Point::new(-half_base, 0.0),
        Point::new(half_base, 0.0),
        Point::new(0.0, height),
    ];
    let size = Size::new(length, height);
    let view_box = Bounds::new_from_top_left(Point::new(-half_base, 0.0), size);

    (
        SymbolTemplate::new(kind, points, view_box, StyleClass::Marker),
        size,
    )
}

fn small_triangle(constants: &DerivedConstants) -> MarkerSymbol {
    let half_base = constants.ring0() * sin_deg(constants.unit_angle() / 2.0);
    let (template, size) = triangle(
        SymbolKind::SmallTriangle,
        half_base,
        constants.triangle_ratio(),
    );

    MarkerSymbol {
        template: Rc::new(template),
        insert: Point::new(-half_base, constants.ring0()),
        size,
    }
}

fn large_triangle(constants: &DerivedConstants) -> MarkerSymbol {
    let half_base = constants.ring0() * sin_deg(constants.unit_angle());
    let (template, size) = triangle(
        SymbolKind::LargeTriangle,
        half_base,
        constants.triangle_ratio(),
    );

    // Pulled inward by half its height so it is centred on ring0
    MarkerSymbol {
        template: Rc::new(template),
        insert: Point::new(-half_base, constants.ring0() - size.height() / 2.0),
        size,
    }
}

fn diamond(constants: &DerivedConstants) -> MarkerSymbol {
    let half_base = constants.ring0() * sin_deg(constants.unit_angle() / 2.0);
    let length = half_base * 2.0;
    let height = constants.triangle_ratio() * length;

    let points = vec![
        Point::new(-half_base, 0.0),
        Point::new(0.0, -height),
        Point::new(half_base, 0.0),
        Point::new(0.0, height),
    ];
    let size = Size::new(length, height * 2.0);
    let view_box = Bounds::new_from_top_left(Point::new(-half_base, -height), size);

    MarkerSymbol {
        template: Rc::new(SymbolTemplate::new(
            SymbolKind::Diamond,
            points,
            view_box,
            StyleClass::Marker,
        )),
        insert: Point::new(-half_base, constants.ring0() - height),
        size,
    }
}
