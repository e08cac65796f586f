//! Wind-line spokes and concentric rings.

use windrose_core::{
    draw::{Layer, LayerKind, Placement, Primitive, StyleClass},
    geometry::Point,
};

use crate::kernel::DerivedConstants;

/// One spoke per compass point, ending on the inner boundary.
pub fn wind_lines(constants: &DerivedConstants) -> Layer {
    let end = Point::new(0.0, constants.inner_boundary());
    let count = constants.total_points();

    Layer::from_placements(
        LayerKind::WindLines,
        (0..count).map(|i| {
            Placement::new(
                Primitive::Line {
                    from: Point::default(),
                    to: end,
                },
                StyleClass::WindLine,
            )
            .with_rotation(constants.unit_angle() * i as f32)
        }),
    )
}

/// The six concentric circles, drawn in a fixed order.
pub fn rings(constants: &DerivedConstants) -> Layer {
    let inner_boundary = constants.inner_boundary();
    let circles = [
        (constants.base_radius() / 10.0, StyleClass::CenterDisc),
        (inner_boundary, StyleClass::BoundaryRing),
        (inner_boundary * 1.05, StyleClass::GuideRing),
        (constants.ring0(), StyleClass::GuideRing),
        (constants.outer_ring(), StyleClass::GuideRing),
        (inner_boundary * 0.8, StyleClass::HairlineRing),
    ];

    Layer::from_placements(
        LayerKind::Rings,
        circles.into_iter().map(|(radius, class)| {
            Placement::new(
                Primitive::Circle {
                    center: Point::default(),
                    radius,
                },
                class,
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::kernel::{Parameters, derive_constants};

    fn constants(divisions: i32) -> DerivedConstants {
        derive_constants(&Parameters::default().with_num_primary_divisions(divisions))
            .expect("valid parameters")
    }

    fn circle_radius(placement: &Placement) -> f32 {
        match placement.primitive() {
            Primitive::Circle { radius, .. } => *radius,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_wind_line_count() {
        assert_eq!(wind_lines(&constants(8)).len(), 32);
        assert_eq!(wind_lines(&constants(4)).len(), 16);
        assert_eq!(wind_lines(&constants(1)).len(), 4);
    }

    #[test]
    fn test_wind_line_rotations_cover_full_turn() {
        let c = constants(8);
        let layer = wind_lines(&c);
        let rotations: Vec<f32> = layer.iter().map(Placement::rotation).collect();

        assert_eq!(rotations[0], 0.0);
        assert_eq!(rotations[1], 11.25);
        assert_eq!(rotations[8], 90.0);
        assert_eq!(rotations[31], 348.75);
    }

    #[test]
    fn test_ring_radii_and_classes() {
        let c = constants(8);
        let layer = rings(&c);
        assert_eq!(layer.len(), 6);

        let radii: Vec<f32> = layer.iter().map(circle_radius).collect();
        assert_approx_eq!(f32, radii[0], 36.0, epsilon = 1e-4);
        assert_eq!(radii[1], c.inner_boundary());
        assert_approx_eq!(f32, radii[2], c.inner_boundary() * 1.05, epsilon = 1e-4);
        assert_eq!(radii[3], c.ring0());
        assert_eq!(radii[4], c.outer_ring());
        assert_approx_eq!(f32, radii[5], c.inner_boundary() * 0.8, epsilon = 1e-4);

        let classes: Vec<StyleClass> = layer.iter().map(Placement::class).collect();
        assert_eq!(
            classes,
            vec![
                StyleClass::CenterDisc,
                StyleClass::BoundaryRing,
                StyleClass::GuideRing,
                StyleClass::GuideRing,
                StyleClass::GuideRing,
                StyleClass::HairlineRing,
            ]
        );
    }

    #[test]
    fn test_rings_are_centred_and_unrotated() {
        let layer = rings(&constants(8));
        for placement in layer.iter() {
            assert_eq!(placement.rotation(), 0.0);
            assert_eq!(placement.world_points(), vec![Point::default()]);
        }
    }
}
