//! Color handling for Windrose styles
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so palettes can be written with any CSS color syntax.
//! Colors are always written back out as sRGB hex, whatever syntax they were
//! given in.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#b13136", "rgb(255, 0, 0)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use windrose_core::color::Color;
    ///
    /// let accent = Color::new("#b13136").unwrap();
    /// assert_eq!(accent.to_string(), "#b13136");
    ///
    /// let label = Color::new("white").unwrap();
    /// assert_eq!(label.to_string(), "#ffffff");
    ///
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    /// Writes `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)?;
        if rgba.a != u8::MAX {
            write!(f, "{:02x}", rgba.a)?;
        }
        Ok(())
    }
}
