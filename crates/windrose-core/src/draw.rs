//! Draw model for compass rose rendering.
//!
//! Everything a renderer needs to reproduce a rose lives here, expressed as
//! plain data rather than as markup:
//!
//! - [`SymbolTemplate`]: a shape defined once, pointing along +Y from the centre
//! - [`Primitive`] and [`Placement`]: one drawing instruction plus its rotation
//!   about the origin and its style class
//! - [`Layer`], [`LayerKind`] and [`RenderGroup`]: ordered placement lists and
//!   the z-order groups they are stacked into
//! - [`StyleSheet`] and friends: semantic class names mapped to visual attributes
//!
//! Renderers resolve [`StyleClass`] references against the [`StyleSheet`] at
//! render time; placements never carry concrete colors or widths.

mod layer;
mod primitive;
mod style;
mod symbol;

pub use layer::{Layer, LayerKind, RenderGroup};
pub use primitive::{Placement, Primitive};
pub use style::{FontDefinition, StrokeDefinition, StyleClass, StyleRule, StyleSheet};
pub use symbol::{SymbolKind, SymbolTemplate};
