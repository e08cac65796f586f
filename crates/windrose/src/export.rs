//! Export functionality for Windrose scenes.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting an assembled [`Scene`] into an output format. It is the final
//! stage in the Windrose pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Parameters
//!     ↓ kernel
//! Derived Constants
//!     ↓ symbols + compose + style
//! Scene
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`RoseError::Export`] at the crate boundary.
//!
//! [`RoseError::Export`]: crate::RoseError::Export

/// SVG export backend.
pub mod svg;

use crate::scene::Scene;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// The rendered document type.
    type Output;

    /// Renders a scene to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be expressed in the
    /// target format.
    fn export_scene(&self, scene: &Scene) -> Result<Self::Output, Error>;
}

/// Errors that can occur during scene export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
