//! Stroke definitions for outlines and edge paths.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and dash style of a line
//! - [`StrokeStyle`]: solid or dashed line pattern
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke` | `"#000000"` |
//! | `width` | `stroke-width` | `2` |
//! | `style` | `stroke-dasharray` | `"4 4"` |

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with the given SVG dasharray, e.g. `"4 4"`
    Dashed(String),
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<&str> {
        match self {
            Self::Solid => None,
            Self::Dashed(pattern) => Some(pattern),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use bpmnview_core::draw::{StrokeDefinition, StrokeStyle};
/// use bpmnview_core::color::Color;
///
/// let outline = StrokeDefinition::solid(Color::default(), 2.0);
/// assert_eq!(outline.style(), &StrokeStyle::Solid);
///
/// let placeholder = StrokeDefinition::dashed(Color::new("#999").unwrap(), 1.0, "4 4");
/// assert_eq!(placeholder.style().to_svg_value(), Some("4 4"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke with an SVG dasharray pattern.
    pub fn dashed(color: Color, width: f32, pattern: impl Into<String>) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed(pattern.into()),
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    /// Black, 2 units wide, solid: the outline of every BPMN shape and edge.
    fn default() -> Self {
        Self::solid(Color::default(), 2.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use bpmnview_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = bpmnview_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
