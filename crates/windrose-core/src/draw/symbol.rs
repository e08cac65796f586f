//! Reusable symbol templates.
//!
//! A [`SymbolTemplate`] is a polygon defined once in its own local frame,
//! together with the view box that frames it. Placements reference a template
//! through an `Rc` and position it by mapping the view box onto an insertion
//! rectangle and rotating about the origin, so N instances share one definition.

use crate::{
    draw::StyleClass,
    geometry::{Bounds, Point},
};

/// The point-marker shapes a rose is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    /// Narrow triangle marking the half-sector points.
    SmallTriangle,
    /// Wide triangle marking the primary points.
    LargeTriangle,
    /// Two small triangles joined at their base, marking the intermediate points.
    Diamond,
}

impl SymbolKind {
    /// Returns the identifier renderers use to define and reference the symbol.
    pub fn id(&self) -> &'static str {
        match self {
            Self::SmallTriangle => "small-triangle",
            Self::LargeTriangle => "large-triangle",
            Self::Diamond => "diamond",
        }
    }
}

/// A normalized polygon plus the view box that frames it.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTemplate {
    kind: SymbolKind,
    points: Vec<Point>,
    view_box: Bounds,
    class: StyleClass,
}

impl SymbolTemplate {
    /// Creates a template from its vertices, in drawing order.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which marker this template defines.
    /// * `points` - Polygon vertices in the template's local frame.
    /// * `view_box` - The local rectangle mapped onto each placement's insertion rectangle.
    /// * `class` - Style class applied to the polygon inside the symbol.
    pub fn new(kind: SymbolKind, points: Vec<Point>, view_box: Bounds, class: StyleClass) -> Self {
        Self {
            kind,
            points,
            view_box,
            class,
        }
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Shorthand for `self.kind().id()`.
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn view_box(&self) -> Bounds {
        self.view_box
    }

    pub fn class(&self) -> StyleClass {
        self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_symbol_kind_ids_are_distinct() {
        let ids = [
            SymbolKind::SmallTriangle.id(),
            SymbolKind::LargeTriangle.id(),
            SymbolKind::Diamond.id(),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn test_symbol_template_accessors() {
        let view_box = Bounds::new_from_top_left(Point::new(-1.0, 0.0), Size::new(2.0, 3.0));
        let points = vec![
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        let template = SymbolTemplate::new(
            SymbolKind::SmallTriangle,
            points.clone(),
            view_box,
            StyleClass::Marker,
        );

        assert_eq!(template.kind(), SymbolKind::SmallTriangle);
        assert_eq!(template.id(), "small-triangle");
        assert_eq!(template.points(), points.as_slice());
        assert_eq!(template.view_box(), view_box);
        assert_eq!(template.class(), StyleClass::Marker);
    }
}
