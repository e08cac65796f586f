//! Example: Inspecting a scene without rendering it
//!
//! This example assembles a rose directly from kernel parameters, walks its
//! layers in world coordinates, and finally renders it to SVG.

use windrose::{
    Exporter, Parameters, SvgExporter,
    draw::Placement,
    scene,
    style::Palette,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = Parameters::default().with_base_radius(180.0);
    let scene = scene::assemble(&params, &Palette::default())?;

    let constants = scene.constants();
    println!(
        "{}-point rose: ring0 = {:.3}, inner boundary = {:.3}, outer ring = {:.3}",
        constants.total_points(),
        constants.ring0(),
        constants.inner_boundary(),
        constants.outer_ring(),
    );

    for layer in scene.layers() {
        let furthest = layer
            .iter()
            .flat_map(Placement::world_points)
            .map(|point| point.hypot())
            .fold(0.0_f32, f32::max);
        println!(
            "{:>16} ({:>11}): {:>3} placements, furthest anchor at {furthest:.3}",
            layer.kind().name(),
            layer.group().name(),
            layer.len(),
        );
    }

    let svg = SvgExporter::new().export_scene(&scene)?;
    println!("\nRendered {} bytes of SVG", svg.len());

    Ok(())
}
