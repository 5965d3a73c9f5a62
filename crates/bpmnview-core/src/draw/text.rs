//! Text labels for shapes.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style (font size)
//! - [`TextAnchor`] - Horizontal anchoring of the text around its position
//! - [`TextLabel`] - A positioned, optionally rotated piece of text
//!
//! Labels are not measured: BPMN DI already fixes where shapes sit, and label
//! placement is derived from shape bounds alone (see
//! [`LabelPlacement`](crate::draw::LabelPlacement)).

use svg::node::{Text as SvgText, element as svg_element};

use crate::geometry::Point;

/// Defines the visual style for text elements.
///
/// # Examples
///
/// ```
/// # use bpmnview_core::draw::TextDefinition;
/// let style = TextDefinition::with_font_size(11);
/// assert_eq!(style.font_size(), Some(11));
///
/// let plain = TextDefinition::new();
/// assert_eq!(plain.font_size(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDefinition {
    font_size: Option<u16>,
}

impl TextDefinition {
    /// Creates a definition that leaves every property to the SVG defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a definition with the given font size in pixels.
    pub fn with_font_size(size: u16) -> Self {
        Self {
            font_size: Some(size),
        }
    }

    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }
}

/// Horizontal anchoring of a label around its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position (SVG default)
    #[default]
    Start,
    /// Text is centered on the position
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Middle => Some("middle"),
        }
    }
}

/// A positioned text label in a shape's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    content: String,
    position: Point,
    anchor: TextAnchor,
    baseline_shift: Option<&'static str>,
    rotation: Option<f32>,
    definition: TextDefinition,
}

impl TextLabel {
    pub fn new(content: impl Into<String>, position: Point, definition: TextDefinition) -> Self {
        Self {
            content: content.into(),
            position,
            anchor: TextAnchor::default(),
            baseline_shift: None,
            rotation: None,
            definition,
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Shifts the baseline by an SVG `dy` length such as `".3em"`.
    pub fn with_baseline_shift(mut self, dy: &'static str) -> Self {
        self.baseline_shift = Some(dy);
        self
    }

    /// Rotates the label by `degrees` around its own position.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn rotation(&self) -> Option<f32> {
        self.rotation
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Renders the label as an SVG `<text>` element.
    pub fn to_svg(&self) -> svg_element::Text {
        let mut text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y());

        if let Some(anchor) = self.anchor.to_svg_value() {
            text = text.set("text-anchor", anchor);
        }
        if let Some(dy) = self.baseline_shift {
            text = text.set("dy", dy);
        }
        if let Some(degrees) = self.rotation {
            text = text.set(
                "transform",
                format!(
                    "rotate({degrees}, {}, {})",
                    self.position.x(),
                    self.position.y()
                ),
            );
        }
        if let Some(size) = self.definition.font_size() {
            text = text.set("style", format!("font-size: {size}px;"));
        }

        text.add(SvgText::new(self.content.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_centered_with_shift() {
        let label = TextLabel::new(
            "Review",
            Point::new(60.0, 40.0),
            TextDefinition::with_font_size(12),
        )
        .with_anchor(TextAnchor::Middle)
        .with_baseline_shift(".3em");

        let rendered = label.to_svg().to_string();
        assert!(rendered.contains(r#"x="60""#));
        assert!(rendered.contains(r#"y="40""#));
        assert!(rendered.contains(r#"text-anchor="middle""#));
        assert!(rendered.contains(r#"dy=".3em""#));
        assert!(rendered.contains("font-size: 12px;"));
        assert!(rendered.contains(">Review<"));
    }

    #[test]
    fn test_label_rotation_is_about_position() {
        let label = TextLabel::new("Pool", Point::new(15.0, 100.0), TextDefinition::new())
            .with_rotation(-90.0);

        let rendered = label.to_svg().to_string();
        assert!(rendered.contains(r#"transform="rotate(-90, 15, 100)""#));
    }

    #[test]
    fn test_plain_label_has_no_optional_attributes() {
        let label = TextLabel::new("Task", Point::new(0.0, -5.0), TextDefinition::new());

        let rendered = label.to_svg().to_string();
        assert!(!rendered.contains("text-anchor"));
        assert!(!rendered.contains("style"));
        assert!(!rendered.contains("transform"));
    }

    #[test]
    fn test_label_content_is_escaped() {
        let label = TextLabel::new("A & B", Point::default(), TextDefinition::new());

        let rendered = label.to_svg().to_string();
        assert!(rendered.contains("A &amp; B"));
    }
}
