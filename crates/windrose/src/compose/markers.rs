//! Triangle and diamond marker layers.

use windrose_core::draw::{Layer, LayerKind};

use crate::{kernel::DerivedConstants, symbols::SymbolSet};

/// One small triangle per half sector, offset by a unit angle from the spokes
/// of the large triangles.
pub fn small_triangles(constants: &DerivedConstants, symbols: &SymbolSet) -> Layer {
    let unit = constants.unit_angle();
    let count = constants.num_primary_divisions() * 2;

    Layer::from_placements(
        LayerKind::SmallTriangles,
        (0..count).map(|i| {
            symbols
                .small_triangle()
                .place(unit + unit * 2.0 * i as f32)
        }),
    )
}

/// One large triangle per primary division.
pub fn large_triangles(constants: &DerivedConstants, symbols: &SymbolSet) -> Layer {
    let unit = constants.unit_angle();

    Layer::from_placements(
        LayerKind::LargeTriangles,
        (0..constants.num_primary_divisions())
            .map(|i| symbols.large_triangle().place(unit * 4.0 * i as f32)),
    )
}

/// One diamond midway between each pair of large triangles.
pub fn diamonds(constants: &DerivedConstants, symbols: &SymbolSet) -> Layer {
    let unit = constants.unit_angle();

    Layer::from_placements(
        LayerKind::Diamonds,
        (0..constants.num_primary_divisions())
            .map(|i| symbols.diamond().place(unit * 2.0 + unit * 4.0 * i as f32)),
    )
}
