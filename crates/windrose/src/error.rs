//! Error types for Windrose operations.
//!
//! This module provides the main error type [`RoseError`] which wraps the
//! failures that can occur between reading parameters and writing a document.

use std::io;

use thiserror::Error;

use crate::kernel::GeometryError;

/// The main error type for Windrose operations.
#[derive(Debug, Error)]
pub enum RoseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RoseError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
