//! Stylesheet construction.
//!
//! Stroke widths and font sizes are fixed fractions of the base radius and of
//! `ring0`, so the whole figure re-scales with the base radius. Colors and the
//! label font family come from a [`Palette`].

use windrose_core::{
    color::Color,
    draw::{FontDefinition, StrokeDefinition, StyleClass, StyleRule, StyleSheet},
};

use crate::kernel::DerivedConstants;

/// The colors and font a rose is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    accent: Color,
    line: Color,
    background: Color,
    label: Color,
    font_family: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::new("#b13136").expect("'#b13136' is a valid CSS color"),
            line: Color::new("#cccccc").expect("'#cccccc' is a valid CSS color"),
            background: Color::new("#eeeeee").expect("'#eeeeee' is a valid CSS color"),
            label: Color::new("white").expect("'white' is a valid CSS color"),
            font_family: "serif".to_string(),
        }
    }
}

impl Palette {
    pub fn new(
        accent: Color,
        line: Color,
        background: Color,
        label: Color,
        font_family: impl Into<String>,
    ) -> Self {
        Self {
            accent,
            line,
            background,
            label,
            font_family: font_family.into(),
        }
    }

    /// Marker fill and inner boundary ring.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Spokes, rings and ticks.
    pub fn line(&self) -> Color {
        self.line
    }

    /// Centre disc fill.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Letter fill.
    pub fn label(&self) -> Color {
        self.label
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

/// Builds the rule for every [`StyleClass`] a rose uses.
pub fn build_style_sheet(constants: &DerivedConstants, palette: &Palette) -> StyleSheet {
    let base = constants.base_radius();
    let thin = base / 360.0;
    let medium = base / 120.0;
    let heavy = base / 40.0;

    let line = |width| StrokeDefinition::new(palette.line, width);

    let mut sheet = StyleSheet::new();
    sheet.insert(StyleClass::Marker, StyleRule::new().with_fill(palette.accent));
    sheet.insert(
        StyleClass::CenterDisc,
        StyleRule::new()
            .with_fill(palette.background)
            .with_stroke(line(medium)),
    );
    sheet.insert(
        StyleClass::BoundaryRing,
        StyleRule::new().with_stroke(StrokeDefinition::new(palette.accent, heavy)),
    );
    sheet.insert(StyleClass::GuideRing, StyleRule::new().with_stroke(line(heavy)));
    sheet.insert(StyleClass::HairlineRing, StyleRule::new().with_stroke(line(medium)));
    sheet.insert(StyleClass::WindLine, StyleRule::new().with_stroke(line(medium)));
    sheet.insert(StyleClass::DegreeTick, StyleRule::new().with_stroke(line(thin)));
    sheet.insert(
        StyleClass::DegreeTickMajor,
        StyleRule::new().with_stroke(line(medium)),
    );
    sheet.insert(
        StyleClass::LabelLarge,
        StyleRule::new()
            .with_fill(palette.label)
            .with_font(FontDefinition::new(&palette.font_family, constants.ring0() / 5.0)),
    );
    sheet.insert(
        StyleClass::LabelSmall,
        StyleRule::new()
            .with_fill(palette.label)
            .with_font(FontDefinition::new(&palette.font_family, constants.ring0() / 7.0)),
    );

    sheet
}
