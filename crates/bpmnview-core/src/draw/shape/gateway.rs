use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::{LabelPlacement, Paint, Primitive, StrokeDefinition, TextDefinition},
    geometry::{Point, Size},
};

/// Gateways: a diamond touching the midpoint of each side of the bounds.
#[derive(Debug, Clone)]
pub struct GatewayDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl Default for GatewayDefinition {
    fn default() -> Self {
        Self {
            fill_color: Color::white(),
            stroke: StrokeDefinition::default(),
            text: TextDefinition::with_font_size(11),
        }
    }
}

impl ShapeDefinition for GatewayDefinition {
    fn render_outline(&self, size: Size) -> Primitive {
        let (w, h) = (size.width(), size.height());
        Primitive::Polygon {
            points: vec![
                Point::new(w / 2.0, 0.0),
                Point::new(w, h / 2.0),
                Point::new(w / 2.0, h),
                Point::new(0.0, h / 2.0),
            ],
            paint: Paint::new(Some(self.fill_color), self.stroke.clone()),
        }
    }

    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::BelowShape
    }

    fn text(&self) -> &TextDefinition {
        &self.text
    }
}
