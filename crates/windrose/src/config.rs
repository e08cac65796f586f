//! Configuration types for compass rose generation.
//!
//! This module provides configuration structures that control the geometry
//! and colors of a rose. All types implement [`serde::Deserialize`] so they
//! can be loaded from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining rose and style settings.
//! - [`Parameters`] - The `[rose]` section, deserialized straight into the kernel type.
//! - [`StyleConfig`] - Optional color and font overrides.
//!
//! # Example
//!
//! ```
//! # use windrose::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.rose().num_primary_divisions(), 8);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use windrose_core::color::Color;

use crate::{kernel::Parameters, style::Palette};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geometry section.
    #[serde(default)]
    rose: Parameters,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    pub fn new(rose: Parameters, style: StyleConfig) -> Self {
        Self { rose, style }
    }

    /// Returns the geometry parameters.
    pub fn rose(&self) -> &Parameters {
        &self.rose
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the geometry parameters.
    pub fn with_rose(mut self, rose: Parameters) -> Self {
        self.rose = rose;
        self
    }
}

/// Visual styling configuration.
///
/// Every field is optional; unset fields keep the [`Palette::default`] value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Marker fill and inner boundary color, as a color string.
    #[serde(default)]
    accent_color: Option<String>,

    /// Spoke, ring and tick color, as a color string.
    #[serde(default)]
    line_color: Option<String>,

    /// Centre disc fill, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Cardinal letter fill, as a color string.
    #[serde(default)]
    label_color: Option<String>,

    /// CSS font family for the cardinal letters.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Resolves the configured overrides into a [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key if a color string cannot be
    /// parsed into a valid [`Color`].
    pub fn palette(&self) -> Result<Palette, String> {
        let defaults = Palette::default();

        Ok(Palette::new(
            parse_color("accent_color", self.accent_color.as_deref(), defaults.accent())?,
            parse_color("line_color", self.line_color.as_deref(), defaults.line())?,
            parse_color(
                "background_color",
                self.background_color.as_deref(),
                defaults.background(),
            )?,
            parse_color("label_color", self.label_color.as_deref(), defaults.label())?,
            self.font_family
                .as_deref()
                .unwrap_or(defaults.font_family()),
        ))
    }
}

fn parse_color(key: &str, value: Option<&str>, fallback: Color) -> Result<Color, String> {
    value
        .map(Color::new)
        .transpose()
        .map(|color| color.unwrap_or(fallback))
        .map_err(|err| format!("Invalid {key} in config: {err}"))
}
