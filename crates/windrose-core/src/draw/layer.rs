//! Layers and render groups.
//!
//! A rose is stacked from a fixed sequence of [`Layer`]s. Each layer belongs
//! to a [`RenderGroup`]; renderers emit one group element per render group,
//! bottom to top in declaration order.

use crate::draw::Placement;

/// Defines the z-order groups a rose is rendered in.
///
/// Groups are rendered from bottom to top in the order defined by variant
/// declaration. The `Ord` derive uses declaration order, so the first variant
/// renders first (bottom), and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderGroup {
    /// Wind-line spokes and concentric rings
    Background,
    /// Triangle and diamond point markers
    Markers,
    /// Cardinal and intercardinal letters
    Labels,
    /// Outer 360 degree scale
    DegreeRing,
}

impl RenderGroup {
    /// Returns a human-readable name for this group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Markers => "markers",
            Self::Labels => "labels",
            Self::DegreeRing => "degree-ring",
        }
    }
}

/// The visual layers a rose is composed of, in back-to-front order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    WindLines,
    Rings,
    SmallTriangles,
    LargeTriangles,
    Diamonds,
    Labels,
    DegreeRing,
}

impl LayerKind {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WindLines => "wind-lines",
            Self::Rings => "rings",
            Self::SmallTriangles => "small-triangles",
            Self::LargeTriangles => "large-triangles",
            Self::Diamonds => "diamonds",
            Self::Labels => "labels",
            Self::DegreeRing => "degree-ring",
        }
    }

    /// Returns the render group this layer is drawn in.
    pub fn group(&self) -> RenderGroup {
        match self {
            Self::WindLines | Self::Rings => RenderGroup::Background,
            Self::SmallTriangles | Self::LargeTriangles | Self::Diamonds => RenderGroup::Markers,
            Self::Labels => RenderGroup::Labels,
            Self::DegreeRing => RenderGroup::DegreeRing,
        }
    }
}

/// An ordered sequence of placements making up one visual layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: LayerKind,
    placements: Vec<Placement>,
}

impl Layer {
    /// Creates an empty layer of the given kind.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            placements: Vec::new(),
        }
    }

    /// Creates a layer from an iterator of placements, keeping their order.
    pub fn from_placements(kind: LayerKind, placements: impl IntoIterator<Item = Placement>) -> Self {
        Self {
            kind,
            placements: placements.into_iter().collect(),
        }
    }

    /// Appends a placement; placements render in insertion order.
    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn group(&self) -> RenderGroup {
        self.kind.group()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if the layer has no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
