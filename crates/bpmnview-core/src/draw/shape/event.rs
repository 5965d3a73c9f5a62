use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::{LabelPlacement, Paint, Primitive, StrokeDefinition, TextDefinition},
    geometry::Size,
};

/// Start, intermediate, boundary and end events: a circle inscribed in the
/// bounds with the name underneath.
#[derive(Debug, Clone)]
pub struct EventDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl Default for EventDefinition {
    fn default() -> Self {
        Self {
            fill_color: Color::white(),
            stroke: StrokeDefinition::default(),
            text: TextDefinition::with_font_size(11),
        }
    }
}

impl ShapeDefinition for EventDefinition {
    fn render_outline(&self, size: Size) -> Primitive {
        Primitive::Circle {
            center: size.center(),
            radius: size.min_dimension() / 2.0,
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
