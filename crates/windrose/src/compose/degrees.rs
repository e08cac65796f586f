//! The 360 degree scale around the rose.

use windrose_core::{
    draw::{Layer, LayerKind, Placement, Primitive, StyleClass},
    geometry::Point,
};

use crate::kernel::DerivedConstants;

const DEGREES: u16 = 360;

/// Every tenth degree gets the heavier tick.
const MAJOR_TICK_INTERVAL: u16 = 10;

/// One tick per integer degree outside the base radius, closed by a circle.
pub fn degree_ring(constants: &DerivedConstants) -> Layer {
    let outer = constants.tick_radius();
    let start = Point::new(0.0, constants.base_radius());
    let end = Point::new(0.0, outer);

    let mut layer = Layer::from_placements(
        LayerKind::DegreeRing,
        (0..DEGREES).map(|degree| {
            let class = if degree % MAJOR_TICK_INTERVAL == 0 {
                StyleClass::DegreeTickMajor
            } else {
                StyleClass::DegreeTick
            };
            Placement::new(
                Primitive::Line {
                    from: start,
                    to: end,
                },
                class,
            )
            .with_rotation(f32::from(degree))
        }),
    );

    layer.push(Placement::new(
        Primitive::Circle {
            center: Point::default(),
            radius: outer,
        },
        StyleClass::GuideRing,
    ));

    layer
}
