//! Geometry kernel: every length and angle of the rose, derived once.
//!
//! The kernel turns three [`Parameters`] into [`DerivedConstants`]. All other
//! stages (symbols, layers, styles) read their radii from the constants
//! instead of recomputing them, which keeps triangle apexes, ring radii and
//! label anchors aligned for any valid input.
//!
//! # The inner ring
//!
//! `ring0` is chosen so that a small triangle standing on it, whose half base
//! spans half a unit angle, reaches exactly the outer radius:
//!
//! ```text
//! ring0 = base_radius / (1 + sin(unit_angle / 2) · 2 · triangle_ratio)
//! ```
//!
//! Angles are degrees everywhere; [`sin_deg`] converts at the call.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use windrose_core::geometry::{Bounds, Point, Size};

/// Largest accepted primary division count (a unit angle of one degree).
pub const MAX_PRIMARY_DIVISIONS: i32 = 90;

/// The division count whose 32 points carry cardinal letters.
pub const CARDINAL_LABEL_DIVISIONS: u32 = 8;

/// Errors raised while deriving rose geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl GeometryError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Sine of an angle given in degrees.
pub fn sin_deg(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

/// The three inputs a rose is generated from.
///
/// Values are validated by [`derive_constants`], not on construction, so any
/// combination can be represented and reported. This is also the `[rose]`
/// section of a configuration file; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    base_radius: f32,
    num_primary_divisions: i32,
    triangle_ratio: f32,
}

impl Default for Parameters {
    /// A 32-point rose of radius 360 with equilateral triangles.
    fn default() -> Self {
        Self {
            base_radius: 360.0,
            num_primary_divisions: 8,
            triangle_ratio: sin_deg(60.0),
        }
    }
}

impl Parameters {
    pub fn new(base_radius: f32, num_primary_divisions: i32, triangle_ratio: f32) -> Self {
        Self {
            base_radius,
            num_primary_divisions,
            triangle_ratio,
        }
    }

    pub fn with_base_radius(mut self, base_radius: f32) -> Self {
        self.base_radius = base_radius;
        self
    }

    pub fn with_num_primary_divisions(mut self, num_primary_divisions: i32) -> Self {
        self.num_primary_divisions = num_primary_divisions;
        self
    }

    pub fn with_triangle_ratio(mut self, triangle_ratio: f32) -> Self {
        self.triangle_ratio = triangle_ratio;
        self
    }

    /// Outer scale of the figure; small triangle apexes touch this radius.
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Number of large-triangle sectors; the rose has four times as many points.
    pub fn num_primary_divisions(&self) -> i32 {
        self.num_primary_divisions
    }

    /// Height-to-base ratio of every marker triangle.
    pub fn triangle_ratio(&self) -> f32 {
        self.triangle_ratio
    }
}

/// All lengths and angles derived from valid [`Parameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    base_radius: f32,
    num_primary_divisions: u32,
    triangle_ratio: f32,
    unit_angle: f32,
    ring0: f32,
    boundary_height: f32,
}

impl DerivedConstants {
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn num_primary_divisions(&self) -> u32 {
        self.num_primary_divisions
    }

    pub fn triangle_ratio(&self) -> f32 {
        self.triangle_ratio
    }

    /// Angle between neighbouring wind lines, in degrees.
    pub fn unit_angle(&self) -> f32 {
        self.unit_angle
    }

    /// Radius the small triangles stand on and the diamonds are centred on.
    pub fn ring0(&self) -> f32 {
        self.ring0
    }

    /// Half the height of a large triangle.
    ///
    /// Large triangles are centred on `ring0`, so this is the distance from
    /// `ring0` to both the inner boundary and the outer ring.
    pub fn boundary_height(&self) -> f32 {
        self.boundary_height
    }

    /// Radius where the wind lines end and the large triangle bases sit.
    pub fn inner_boundary(&self) -> f32 {
        self.ring0 - self.boundary_height
    }

    /// Radius reached by the large triangle apexes.
    pub fn outer_ring(&self) -> f32 {
        self.ring0 + self.boundary_height
    }

    /// Length of the degree ticks outside the base radius.
    pub fn tick_length(&self) -> f32 {
        self.base_radius / 10.0
    }

    /// Radius reached by the outer end of the degree ticks.
    pub fn tick_radius(&self) -> f32 {
        self.base_radius + self.tick_length()
    }

    /// Total number of compass points.
    pub fn total_points(&self) -> u32 {
        self.num_primary_divisions * 4
    }

    /// Whether the rose has the 32 points the cardinal letters are laid out for.
    pub fn supports_cardinal_labels(&self) -> bool {
        self.num_primary_divisions == CARDINAL_LABEL_DIVISIONS
    }

    /// The square view box centred on the origin, `2.4 · base_radius` wide.
    pub fn view_bounds(&self) -> Bounds {
        // 1.2 · base_radius, kept exact for integral radii
        let half = self.base_radius * 6.0 / 5.0;
        Bounds::new_from_top_left(Point::new(-half, -half), Size::new(half * 2.0, half * 2.0))
    }
}

/// Validates `parameters` and derives every constant the rose needs.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidParameter`] if:
/// - `num_primary_divisions` is not in `1..=MAX_PRIMARY_DIVISIONS`
/// - `triangle_ratio` is not a finite value in `(0, 1]`
/// - `base_radius` is not a finite positive value
/// - the combination yields a non-positive inner boundary
/// - `base_radius` is so large that the view box or the tick ring overflows
///
/// # Examples
///
/// ```
/// use windrose::kernel::{Parameters, derive_constants};
///
/// let constants = derive_constants(&Parameters::default()).unwrap();
/// assert_eq!(constants.unit_angle(), 11.25);
/// assert_eq!(constants.total_points(), 32);
///
/// assert!(derive_constants(&Parameters::default().with_num_primary_divisions(0)).is_err());
/// ```
pub fn derive_constants(parameters: &Parameters) -> Result<DerivedConstants, GeometryError> {
    let divisions = parameters.num_primary_divisions;
    if divisions <= 0 || divisions > MAX_PRIMARY_DIVISIONS {
        return Err(GeometryError::invalid(
            "num_primary_divisions",
            format!("must be between 1 and {MAX_PRIMARY_DIVISIONS}, got {divisions}"),
        ));
    }

    let triangle_ratio = parameters.triangle_ratio;
    if !triangle_ratio.is_finite() || triangle_ratio <= 0.0 || triangle_ratio > 1.0 {
        return Err(GeometryError::invalid(
            "triangle_ratio",
            format!("must be greater than 0 and at most 1, got {triangle_ratio}"),
        ));
    }

    let base_radius = parameters.base_radius;
    if !base_radius.is_finite() || base_radius <= 0.0 {
        return Err(GeometryError::invalid(
            "base_radius",
            format!("must be a positive number, got {base_radius}"),
        ));
    }

    let num_primary_divisions = divisions.unsigned_abs();
    let unit_angle = 90.0 / num_primary_divisions as f32;
    let ring0 = base_radius / (1.0 + sin_deg(unit_angle / 2.0) * 2.0 * triangle_ratio);

    let large_base = ring0 * sin_deg(unit_angle) * 2.0;
    let boundary_height = large_base * triangle_ratio / 2.0;

    let constants = DerivedConstants {
        base_radius,
        num_primary_divisions,
        triangle_ratio,
        unit_angle,
        ring0,
        boundary_height,
    };

    // A single sector with isosceles triangles collapses the inner boundary onto the centre
    if constants.inner_boundary() <= 0.0 {
        return Err(GeometryError::invalid(
            "triangle_ratio",
            format!(
                "{triangle_ratio} leaves no room inside the markers for {num_primary_divisions} division(s)"
            ),
        ));
    }

    if !constants.view_bounds().width().is_finite() || !constants.tick_radius().is_finite() {
        return Err(GeometryError::invalid(
            "base_radius",
            format!("{base_radius} is too large to lay out the view box"),
        ));
    }

    debug!(
        unit_angle = constants.unit_angle,
        ring0 = constants.ring0,
        inner_boundary = constants.inner_boundary(),
        outer_ring = constants.outer_ring();
        "Derived rose constants"
    );

    Ok(constants)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn defaults() -> DerivedConstants {
        derive_constants(&Parameters::default()).expect("default parameters are valid")
    }

    #[test]
    fn test_default_parameters() {
        let params = Parameters::default();
        assert_eq!(params.base_radius(), 360.0);
        assert_eq!(params.num_primary_divisions(), 8);
        assert_approx_eq!(f32, params.triangle_ratio(), 0.866_025_4, epsilon = 1e-6);
    }

    #[test]
    fn test_default_scenario() {
        let constants = defaults();

        assert_eq!(constants.unit_angle(), 11.25);
        assert_eq!(constants.total_points(), 32);
        assert_approx_eq!(f32, constants.ring0(), 307.75, epsilon = 0.1);
        assert_approx_eq!(f32, constants.boundary_height(), 52.0, epsilon = 0.1);
        assert_approx_eq!(f32, constants.inner_boundary(), 255.76, epsilon = 0.1);
        assert_approx_eq!(f32, constants.tick_length(), 36.0, epsilon = 1e-4);
        assert!(constants.supports_cardinal_labels());
    }

    #[test]
    fn test_ring0_small_triangle_reaches_base_radius() {
        let constants = defaults();
        let small_height =
            constants.ring0() * sin_deg(constants.unit_angle() / 2.0) * 2.0 * constants.triangle_ratio();
        assert_approx_eq!(
            f32,
            constants.ring0() + small_height,
            constants.base_radius(),
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_radius_ordering() {
        let constants = defaults();
        assert!(0.0 < constants.inner_boundary());
        assert!(constants.inner_boundary() < constants.ring0());
        assert!(constants.ring0() < constants.outer_ring());
        assert!(constants.outer_ring() <= constants.base_radius());
    }

    #[test]
    fn test_view_bounds() {
        let bounds = defaults().view_bounds();
        assert_approx_eq!(f32, bounds.min_x(), -432.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.min_y(), -432.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.width(), 864.0, epsilon = 1e-3);
        assert_approx_eq!(f32, bounds.height(), 864.0, epsilon = 1e-3);
    }

    #[test]
    fn test_reject_zero_divisions() {
        let err = derive_constants(&Parameters::default().with_num_primary_divisions(0)).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InvalidParameter {
                name: "num_primary_divisions",
                ..
            }
        ));
    }

    #[test]
    fn test_reject_negative_divisions() {
        let result = derive_constants(&Parameters::default().with_num_primary_divisions(-3));
        assert!(matches!(
            result,
            Err(GeometryError::InvalidParameter {
                name: "num_primary_divisions",
                ..
            })
        ));
    }

    #[test]
    fn test_reject_too_many_divisions() {
        assert!(derive_constants(&Parameters::default().with_num_primary_divisions(91)).is_err());
        assert!(derive_constants(&Parameters::default().with_num_primary_divisions(90)).is_ok());
    }

    #[test]
    fn test_reject_bad_triangle_ratio() {
        for ratio in [0.0, -0.5, 1.5, f32::NAN, f32::INFINITY] {
            let result = derive_constants(&Parameters::default().with_triangle_ratio(ratio));
            assert!(
                matches!(
                    result,
                    Err(GeometryError::InvalidParameter {
                        name: "triangle_ratio",
                        ..
                    })
                ),
                "ratio {ratio} should be rejected"
            );
        }
    }

    #[test]
    fn test_isosceles_ratio_accepted() {
        let constants = derive_constants(&Parameters::default().with_triangle_ratio(1.0))
            .expect("isosceles ratio is valid");
        assert!(constants.inner_boundary() > 0.0);
    }

    #[test]
    fn test_reject_bad_base_radius() {
        for radius in [0.0, -10.0, f32::NAN] {
            let result = derive_constants(&Parameters::default().with_base_radius(radius));
            assert!(matches!(
                result,
                Err(GeometryError::InvalidParameter {
                    name: "base_radius",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_reject_overflowing_base_radius() {
        for radius in [f32::MAX, f32::MAX / 2.0, f32::MAX / 5.0] {
            let result = derive_constants(&Parameters::default().with_base_radius(radius));
            assert!(
                matches!(
                    result,
                    Err(GeometryError::InvalidParameter {
                        name: "base_radius",
                        ..
                    })
                ),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn test_large_finite_base_radius_accepted() {
        let constants = derive_constants(&Parameters::default().with_base_radius(1.0e30))
            .expect("large but representable radius");

        assert!(constants.view_bounds().width().is_finite());
        assert!(constants.tick_radius().is_finite());
    }

    #[test]
    fn test_reject_collapsed_inner_boundary() {
        let params = Parameters::new(100.0, 1, 1.0);
        assert!(derive_constants(&params).is_err());
    }

    #[test]
    fn test_labels_only_for_eight_divisions() {
        for divisions in [1, 2, 4, 7, 9, 16] {
            let params = Parameters::default().with_num_primary_divisions(divisions);
            let constants = derive_constants(&params).expect("valid divisions");
            assert!(!constants.supports_cardinal_labels());
        }
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = derive_constants(&Parameters::default().with_triangle_ratio(0.0)).unwrap_err();
        assert!(err.to_string().contains("triangle_ratio"));
    }
}
