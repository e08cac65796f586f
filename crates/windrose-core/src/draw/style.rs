//! Style classes and the stylesheet that resolves them.
//!
//! Placements only name a [`StyleClass`]. The [`StyleSheet`] maps each class to
//! a [`StyleRule`] holding the concrete fill, stroke and font, and can render
//! itself as CSS for renderers that support class-based styling.
//!
//! # CSS Mapping
//!
//! | Rust Property | CSS Property | Example Values |
//! |--------------|---------------|----------------|
//! | `fill` | `fill` | `#b13136`, `none` |
//! | `stroke.color` | `stroke` | `#cccccc`, `none` |
//! | `stroke.width` | `stroke-width` | `3` |
//! | `font.family` | `font-family` | `serif` |
//! | `font.size` | `font-size` | `61.5px` |

use indexmap::IndexMap;

use crate::color::Color;

/// Semantic style classes used by rose primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleClass {
    /// Filled triangle and diamond markers
    Marker,
    /// Small filled disc at the centre
    CenterDisc,
    /// Heavy accent ring at the inner boundary
    BoundaryRing,
    /// Heavy neutral rings
    GuideRing,
    /// Thin neutral ring
    HairlineRing,
    /// Radial spokes
    WindLine,
    /// One-degree scale tick
    DegreeTick,
    /// Ten-degree scale tick
    DegreeTickMajor,
    /// Letters for the four cardinal points
    LabelLarge,
    /// Letters for the four intercardinal points
    LabelSmall,
}

impl StyleClass {
    /// Returns the class name used in rendered output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::CenterDisc => "center-disc",
            Self::BoundaryRing => "boundary-ring",
            Self::GuideRing => "guide-ring",
            Self::HairlineRing => "hairline-ring",
            Self::WindLine => "wind-line",
            Self::DegreeTick => "degree-tick",
            Self::DegreeTickMajor => "degree-tick-major",
            Self::LabelLarge => "label-large",
            Self::LabelSmall => "label-small",
        }
    }
}

/// Stroke color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Font family and size for text classes.
///
/// Text is always centred horizontally on its anchor and sits on the anchor's
/// baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDefinition {
    family: String,
    size: f32,
}

impl FontDefinition {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// The visual attributes of one style class.
///
/// A missing fill or stroke renders as `none`. Rules carrying a font are text
/// rules and render font declarations instead of a stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRule {
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    font: Option<FontDefinition>,
}

impl StyleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color (builder style).
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the stroke (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the font (builder style).
    pub fn with_font(mut self, font: FontDefinition) -> Self {
        self.font = Some(font);
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn font(&self) -> Option<&FontDefinition> {
        self.font.as_ref()
    }

    /// Returns the rule as ordered `(property, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use windrose_core::draw::{StrokeDefinition, StyleRule};
    /// # use windrose_core::color::Color;
    /// let rule = StyleRule::new().with_stroke(StrokeDefinition::new(Color::default(), 2.0));
    /// let declarations = rule.declarations();
    ///
    /// assert_eq!(declarations[0], ("fill", "none".to_string()));
    /// assert_eq!(declarations[2], ("stroke-width", "2".to_string()));
    /// ```
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let fill = self
            .fill
            .map_or_else(|| "none".to_string(), |color| color.to_string());

        if let Some(font) = &self.font {
            return vec![
                ("font-family", font.family.clone()),
                ("fill", fill),
                ("text-anchor", "middle".to_string()),
                ("dominant-baseline", "baseline".to_string()),
                ("font-size", format!("{}px", font.size)),
            ];
        }

        let mut declarations = vec![("fill", fill)];
        match &self.stroke {
            Some(stroke) => {
                declarations.push(("stroke", stroke.color.to_string()));
                declarations.push(("stroke-width", stroke.width.to_string()));
            }
            None => declarations.push(("stroke", "none".to_string())),
        }
        declarations
    }
}

/// Ordered mapping from style class to rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: IndexMap<StyleClass, StyleRule>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the rule for `class`. A replaced rule keeps its position.
    pub fn insert(&mut self, class: StyleClass, rule: StyleRule) {
        self.rules.insert(class, rule);
    }

    pub fn get(&self, class: StyleClass) -> Option<&StyleRule> {
        self.rules.get(&class)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleClass, &StyleRule)> {
        self.rules.iter().map(|(class, rule)| (*class, rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders the stylesheet as CSS, one class selector per line, in insertion order.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|(class, rule)| {
                let body: String = rule
                    .declarations()
                    .into_iter()
                    .map(|(property, value)| format!("{property}: {value}; "))
                    .collect();
                format!(".{} {{ {body}}}\n", class.name())
            })
            .collect()
    }
}
