//! Scene assembly.
//!
//! A [`Scene`] is everything a renderer needs: the shared symbol templates,
//! the layers in back-to-front order, the stylesheet and the view bounds.
//! It is built once from [`Parameters`] and never modified afterwards.

use std::rc::Rc;

use log::{debug, info};

use windrose_core::{
    draw::{Layer, LayerKind, StyleSheet, SymbolTemplate},
    geometry::Bounds,
};

use crate::{
    compose,
    kernel::{self, DerivedConstants, GeometryError, Parameters},
    style::{self, Palette},
    symbols::SymbolSet,
};

/// A fully composed compass rose.
#[derive(Debug, Clone)]
pub struct Scene {
    constants: DerivedConstants,
    symbols: Vec<Rc<SymbolTemplate>>,
    layers: Vec<Layer>,
    style_sheet: StyleSheet,
}

impl Scene {
    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Symbol templates referenced by marker instances, in definition order.
    pub fn symbols(&self) -> &[Rc<SymbolTemplate>] {
        &self.symbols
    }

    /// Layers from back to front. Empty layers are never included.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the layer of the given kind, if the scene has one.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind() == kind)
    }

    pub fn style_sheet(&self) -> &StyleSheet {
        &self.style_sheet
    }

    /// The square view box, `2.4 · base_radius` wide and centred on the origin.
    pub fn view_bounds(&self) -> Bounds {
        self.constants.view_bounds()
    }

    /// Total number of placements across all layers.
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }
}

/// Builds a scene from parameters and a palette.
///
/// Layers are stacked in a fixed order: wind lines, rings, small triangles,
/// large triangles, diamonds, labels (32-point roses only), degree ring.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidParameter`] if the parameters are rejected
/// by [`kernel::derive_constants`]; nothing is composed in that case.
///
/// # Examples
///
/// ```
/// use windrose::{kernel::Parameters, scene, style::Palette};
///
/// let scene = scene::assemble(&Parameters::default(), &Palette::default()).unwrap();
/// assert_eq!(scene.primitive_count(), 439);
/// ```
pub fn assemble(parameters: &Parameters, palette: &Palette) -> Result<Scene, GeometryError> {
    let constants = kernel::derive_constants(parameters)?;
    let symbols = SymbolSet::new(&constants);

    let mut layers = vec![
        compose::wind_lines(&constants),
        compose::rings(&constants),
        compose::small_triangles(&constants, &symbols),
        compose::large_triangles(&constants, &symbols),
        compose::diamonds(&constants, &symbols),
    ];

    let labels = compose::labels(&constants);
    if labels.is_empty() {
        debug!(points = constants.total_points(); "Skipping cardinal labels");
    } else {
        layers.push(labels);
    }

    layers.push(compose::degree_ring(&constants));

    let scene = Scene {
        constants,
        symbols: symbols.templates(),
        layers,
        style_sheet: style::build_style_sheet(&constants, palette),
    };

    info!(
        points = constants.total_points(),
        layers = scene.layers.len(),
        primitives = scene.primitive_count();
        "Scene assembled"
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use windrose_core::draw::{Placement, Primitive, RenderGroup};

    use super::*;

    fn default_scene() -> Scene {
        assemble(&Parameters::default(), &Palette::default()).expect("default scene")
    }

    #[test]
    fn test_default_scene_counts() {
        let scene = default_scene();

        let count = |kind| scene.layer(kind).map_or(0, Layer::len);
        assert_eq!(count(LayerKind::WindLines), 32);
        assert_eq!(count(LayerKind::Rings), 6);
        assert_eq!(count(LayerKind::SmallTriangles), 16);
        assert_eq!(count(LayerKind::LargeTriangles), 8);
        assert_eq!(count(LayerKind::Diamonds), 8);
        assert_eq!(count(LayerKind::Labels), 8);
        assert_eq!(count(LayerKind::DegreeRing), 361);
        assert_eq!(scene.primitive_count(), 439);
    }

    #[test]
    fn test_layer_order_is_fixed() {
        let scene = default_scene();
        let kinds: Vec<LayerKind> = scene.layers().iter().map(Layer::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LayerKind::WindLines,
                LayerKind::Rings,
                LayerKind::SmallTriangles,
                LayerKind::LargeTriangles,
                LayerKind::Diamonds,
                LayerKind::Labels,
                LayerKind::DegreeRing,
            ]
        );

        let groups: Vec<RenderGroup> = scene.layers().iter().map(Layer::group).collect();
        assert!(groups.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_no_label_layer_for_16_points() {
        let params = Parameters::default().with_num_primary_divisions(4);
        let scene = assemble(&params, &Palette::default()).expect("valid scene");

        assert!(scene.layer(LayerKind::Labels).is_none());
        assert_eq!(scene.layers().len(), 6);
        // 16 spokes + 6 rings + 8 + 4 + 4 markers + 361 degree ring
        assert_eq!(scene.primitive_count(), 399);
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        for params in [
            Parameters::default().with_num_primary_divisions(0),
            Parameters::default().with_num_primary_divisions(-3),
            Parameters::default().with_triangle_ratio(0.0),
            Parameters::default().with_base_radius(f32::MAX),
        ] {
            let result = assemble(&params, &Palette::default());
            assert!(matches!(
                result,
                Err(GeometryError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let first = default_scene();
        let second = default_scene();

        assert_eq!(first.layers(), second.layers());
        assert_eq!(first.style_sheet(), second.style_sheet());
        assert_eq!(first.view_bounds(), second.view_bounds());
    }

    #[test]
    fn test_view_bounds() {
        let params = Parameters::default().with_base_radius(100.0);
        let scene = assemble(&params, &Palette::default()).expect("valid scene");
        let bounds = scene.view_bounds();

        assert_approx_eq!(f32, bounds.min_x(), -120.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.min_y(), -120.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.width(), 240.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.height(), 240.0, epsilon = 1e-4);
    }

    #[test]
    fn test_all_instances_reference_scene_symbols() {
        let scene = default_scene();
        for placement in scene.layers().iter().flat_map(Layer::iter) {
            if let Primitive::Instance { symbol, .. } = placement.primitive() {
                assert!(scene.symbols().iter().any(|s| Rc::ptr_eq(s, symbol)));
            }
        }
    }

    #[test]
    fn test_every_class_used_has_a_rule() {
        let scene = default_scene();
        for placement in scene.layers().iter().flat_map(Layer::iter) {
            assert!(scene.style_sheet().get(placement.class()).is_some());
        }
        for symbol in scene.symbols() {
            assert!(scene.style_sheet().get(symbol.class()).is_some());
        }
    }

    #[test]
    fn test_doubling_radius_keeps_rotations() {
        let base = default_scene();
        let doubled = assemble(
            &Parameters::default().with_base_radius(720.0),
            &Palette::default(),
        )
        .expect("valid scene");

        let rotations = |scene: &Scene| -> Vec<f32> {
            scene
                .layers()
                .iter()
                .flat_map(Layer::iter)
                .map(Placement::rotation)
                .collect()
        };
        assert_eq!(rotations(&base), rotations(&doubled));
    }
}
