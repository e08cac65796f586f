//! Cardinal and intercardinal letters.

use windrose_core::{
    draw::{Layer, LayerKind, Placement, Primitive, StyleClass},
    geometry::Point,
};

use crate::kernel::DerivedConstants;

/// Letters in clockwise order starting from north.
pub const CARDINAL_LETTERS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Letters over the large triangles, only laid out for the 32-point rose.
///
/// Each letter's baseline sits `0.8 · boundary_height` inside `ring0`, above
/// the centre before rotation. Cardinal letters use the large label class and
/// intercardinal ones the small class. Other point counts get an empty layer.
pub fn labels(constants: &DerivedConstants) -> Layer {
    if !constants.supports_cardinal_labels() {
        return Layer::new(LayerKind::Labels);
    }

    let anchor = Point::new(
        0.0,
        -(constants.ring0() - constants.boundary_height() * 0.8),
    );
    let step = constants.unit_angle() * 4.0;

    Layer::from_placements(
        LayerKind::Labels,
        CARDINAL_LETTERS.iter().enumerate().map(|(index, letter)| {
            let class = if index % 2 == 0 {
                StyleClass::LabelLarge
            } else {
                StyleClass::LabelSmall
            };
            Placement::new(
                Primitive::Text {
                    content: (*letter).to_string(),
                    anchor,
                },
                class,
            )
            .with_rotation(step * index as f32)
        }),
    )
}
