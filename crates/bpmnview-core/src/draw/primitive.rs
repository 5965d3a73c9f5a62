//! Vector primitives that make up a rendered shape.
//!
//! A [`Primitive`] lives in the local coordinate space of its shape group:
//! `(0, 0)` is the top-left corner of the shape's DI bounds.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{StrokeDefinition, TextLabel},
    geometry::{Point, Size},
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Fill and stroke of a closed primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    fill: Option<Color>,
    stroke: StrokeDefinition,
}

impl Paint {
    /// `fill: None` renders as `fill="none"`.
    pub fn new(fill: Option<Color>, stroke: StrokeDefinition) -> Self {
        Self { fill, stroke }
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    fn fill_value(&self) -> String {
        self.fill
            .map(|color| color.to_string())
            .unwrap_or_else(|| "none".to_string())
    }
}

/// A single drawable element inside a shape group.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Rectangle anchored at the local origin.
    Rect {
        size: Size,
        corner_radius: Option<f32>,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    /// Closed polygon through `points`.
    Polygon { points: Vec<Point>, paint: Paint },
    Text(TextLabel),
}

impl Primitive {
    /// Returns the label carried by a text primitive.
    pub fn as_text(&self) -> Option<&TextLabel> {
        match self {
            Self::Text(label) => Some(label),
            _ => None,
        }
    }

    /// Renders the primitive to an SVG node.
    pub fn to_svg(&self) -> SvgNode {
        match self {
            Self::Rect {
                size,
                corner_radius,
                paint,
            } => {
                let mut rect = svg_element::Rectangle::new()
                    .set("width", size.width())
                    .set("height", size.height());
                if let Some(radius) = corner_radius {
                    rect = rect.set("rx", *radius).set("ry", *radius);
                }
                let rect = rect.set("fill", paint.fill_value());
                Box::new(apply_stroke!(rect, paint.stroke()))
            }
            Self::Circle {
                center,
                radius,
                paint,
            } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", *radius)
                    .set("fill", paint.fill_value());
                Box::new(apply_stroke!(circle, paint.stroke()))
            }
            Self::Polygon { points, paint } => {
                let polygon = svg_element::Polygon::new()
                    .set("points", points_value(points))
                    .set("fill", paint.fill_value());
                Box::new(apply_stroke!(polygon, paint.stroke()))
            }
            Self::Text(label) => Box::new(label.to_svg()),
        }
    }
}

/// Formats points as an SVG `points` list: `"x1,y1 x2,y2 ..."`.
fn points_value(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x(), point.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::TextDefinition;

    #[test]
    fn test_rounded_rect() {
        let rect = Primitive::Rect {
            size: Size::new(120.0, 80.0),
            corner_radius: Some(10.0),
            paint: Paint::new(Some(Color::white()), StrokeDefinition::default()),
        };

        let rendered = rect.to_svg().to_string();
        assert!(rendered.contains(r#"width="120""#));
        assert!(rendered.contains(r#"height="80""#));
        assert!(rendered.contains(r#"rx="10""#));
        assert!(rendered.contains(r#"ry="10""#));
        assert!(rendered.contains(r##"fill="#ffffff""##));
        assert!(rendered.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn test_unfilled_rect() {
        let rect = Primitive::Rect {
            size: Size::new(10.0, 10.0),
            corner_radius: None,
            paint: Paint::new(None, StrokeDefinition::default()),
        };

        let rendered = rect.to_svg().to_string();
        assert!(rendered.contains(r#"fill="none""#));
        assert!(!rendered.contains("rx="));
    }

    #[test]
    fn test_polygon_points() {
        let polygon = Primitive::Polygon {
            points: vec![
                Point::new(25.0, 0.0),
                Point::new(50.0, 25.0),
                Point::new(25.0, 50.0),
                Point::new(0.0, 25.0),
            ],
            paint: Paint::new(Some(Color::white()), StrokeDefinition::default()),
        };

        let rendered = polygon.to_svg().to_string();
        assert!(rendered.contains(r#"points="25,0 50,25 25,50 0,25""#));
    }

    #[test]
    fn test_circle() {
        let circle = Primitive::Circle {
            center: Point::new(18.0, 18.0),
            radius: 18.0,
            paint: Paint::new(Some(Color::white()), StrokeDefinition::default()),
        };

        let rendered = circle.to_svg().to_string();
        assert!(rendered.contains(r#"cx="18""#));
        assert!(rendered.contains(r#"r="18""#));
    }

    #[test]
    fn test_as_text() {
        let label = TextLabel::new("x", Point::default(), TextDefinition::new());
        assert!(Primitive::Text(label).as_text().is_some());

        let circle = Primitive::Circle {
            center: Point::default(),
            radius: 1.0,
            paint: Paint::new(None, StrokeDefinition::default()),
        };
        assert!(circle.as_text().is_none());
    }
}
