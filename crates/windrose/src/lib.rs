//! Windrose - procedural 32-point compass rose generation.
//!
//! Geometry, composition, styling and SVG rendering for compass roses. Three
//! parameters (base radius, primary division count and triangle ratio) fully
//! determine the figure; [`RoseBuilder`] runs the whole pipeline.

pub mod compose;
pub mod config;
pub mod kernel;
pub mod scene;
pub mod style;
pub mod symbols;

mod error;
mod export;

pub use windrose_core::{color, draw, geometry};

pub use error::RoseError;
pub use export::{Error as ExportError, Exporter, svg::SvgExporter};
pub use kernel::{GeometryError, Parameters};
pub use scene::Scene;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for assembling and rendering compass roses.
///
/// # Examples
///
/// ```rust
/// use windrose::{RoseBuilder, config::AppConfig};
///
/// let builder = RoseBuilder::new(AppConfig::default());
///
/// let scene = builder.build_scene()
///     .expect("Failed to build scene");
///
/// let svg = builder.render_svg(&scene)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct RoseBuilder {
    config: AppConfig,
}

impl RoseBuilder {
    /// Create a new rose builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry parameters and style overrides
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate the configured parameters and assemble a scene.
    ///
    /// # Errors
    ///
    /// Returns [`RoseError::Config`] if a configured color is invalid, and
    /// [`RoseError::Geometry`] if the geometry parameters are rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose::{Parameters, RoseBuilder, config::AppConfig};
    ///
    /// let rose = Parameters::default().with_num_primary_divisions(0);
    /// let builder = RoseBuilder::new(AppConfig::default().with_rose(rose));
    /// assert!(builder.build_scene().is_err());
    /// ```
    pub fn build_scene(&self) -> Result<Scene, RoseError> {
        let parameters = *self.config.rose();
        info!(
            base_radius = parameters.base_radius(),
            divisions = parameters.num_primary_divisions(),
            triangle_ratio = parameters.triangle_ratio();
            "Building compass rose"
        );

        let palette = self.config.style().palette().map_err(RoseError::Config)?;
        trace!(palette:?; "Resolved palette");

        let scene = scene::assemble(&parameters, &palette)?;
        debug!(primitives = scene.primitive_count(); "Scene built successfully");

        Ok(scene)
    }

    /// Render a scene to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`RoseError::Export`] if the scene cannot be serialized.
    pub fn render_svg(&self, scene: &Scene) -> Result<String, RoseError> {
        info!("Rendering SVG");
        let svg = SvgExporter::new().export_scene(scene)?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
