//! SVG rendering for scenes.
//!
//! The document mirrors the scene's structure: templates become `<symbol>`
//! definitions instanced with `<use>`, the stylesheet becomes a `<style>`
//! block, and each render group becomes a `<g data-group="...">` holding its
//! layers in order. Every element carries its rotation as `rotate(θ)`.

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use windrose_core::{
    draw::{Layer, Placement, Primitive, RenderGroup, SymbolTemplate},
    geometry::{Bounds, Point},
};

use super::{Error, Exporter};
use crate::scene::Scene;

/// Type alias for boxed SVG nodes.
type SvgNode = Box<dyn svg::Node>;

/// Renders scenes to SVG documents.
#[derive(Debug, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the SVG document for `scene`.
    ///
    /// Every `<use>` refers to a `<symbol>` in the definitions, since a scene
    /// only instances templates it owns.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let view = scene.view_bounds();

        let mut defs = svg_element::Definitions::new()
            .add(svg_element::Style::new(scene.style_sheet().to_css()));
        for template in scene.symbols() {
            defs = defs.add(render_symbol(template));
        }

        let mut doc = Document::new()
            .set("viewBox", view_box_value(view))
            .add(defs);

        for (group, layers) in group_layers(scene.layers()) {
            let mut element = svg_element::Group::new().set("data-group", group.name());
            for layer in layers {
                for placement in layer.iter() {
                    element = element.add(render_placement(placement));
                }
            }
            debug!(group = group.name(); "Rendered SVG group");
            doc = doc.add(element);
        }

        doc
    }
}

impl Exporter for SvgExporter {
    type Output = String;

    fn export_scene(&self, scene: &Scene) -> Result<String, Error> {
        let doc = self.render_document(scene);
        let svg = doc.to_string();
        trace!(bytes = svg.len(); "SVG document serialized");
        Ok(svg)
    }
}

/// Splits the back-to-front layers into runs sharing a render group.
fn group_layers(layers: &[Layer]) -> Vec<(RenderGroup, Vec<&Layer>)> {
    let mut groups: Vec<(RenderGroup, Vec<&Layer>)> = Vec::new();
    for layer in layers {
        match groups.last_mut() {
            Some((group, members)) if *group == layer.group() => members.push(layer),
            _ => groups.push((layer.group(), vec![layer])),
        }
    }
    groups
}

fn view_box_value(bounds: Bounds) -> String {
    format!(
        "{} {} {} {}",
        bounds.min_x(),
        bounds.min_y(),
        bounds.width(),
        bounds.height()
    )
}

fn points_value(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_symbol(template: &SymbolTemplate) -> svg_element::Symbol {
    let polygon = svg_element::Polygon::new()
        .set("points", points_value(template.points()))
        .set("class", template.class().name());

    svg_element::Symbol::new()
        .set("id", template.id())
        .set("viewBox", view_box_value(template.view_box()))
        .add(polygon)
}

fn render_placement(placement: &Placement) -> SvgNode {
    let class = placement.class().name();
    let transform = format!("rotate({})", placement.rotation());

    match placement.primitive() {
        Primitive::Polygon { points } => svg_element::Polygon::new()
            .set("points", points_value(points))
            .set("class", class)
            .set("transform", transform)
            .into(),
        Primitive::Line { from, to } => svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y())
            .set("class", class)
            .set("transform", transform)
            .into(),
        Primitive::Circle { center, radius } => svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", *radius)
            .set("class", class)
            .set("transform", transform)
            .into(),
        Primitive::Text { content, anchor } => svg_element::Text::new(content.as_str())
            .set("x", anchor.x())
            .set("y", anchor.y())
            .set("class", class)
            .set("transform", transform)
            .into(),
        Primitive::Instance {
            symbol,
            insert,
            size,
        } => svg_element::Use::new()
            .set("href", format!("#{}", symbol.id()))
            .set("x", insert.x())
            .set("y", insert.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("transform", transform)
            .into(),
    }
}
