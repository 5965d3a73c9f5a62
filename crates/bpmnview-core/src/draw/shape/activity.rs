use super::ShapeDefinition;
use crate::{
    color::Color,
    draw::{LabelPlacement, Paint, Primitive, StrokeDefinition, TextDefinition},
    geometry::Size,
};

/// Tasks, sub-processes and call activities: a white rounded rectangle with a
/// centered name.
#[derive(Debug, Clone)]
pub struct ActivityDefinition {
    fill_color: Color,
    stroke: StrokeDefinition,
    corner_radius: f32,
    text: TextDefinition,
}

impl Default for ActivityDefinition {
    fn default() -> Self {
        Self {
            fill_color: Color::white(),
            stroke: StrokeDefinition::default(),
            corner_radius: 10.0,
            text: TextDefinition::with_font_size(12),
        }
    }
}

impl ShapeDefinition for ActivityDefinition {
    fn render_outline(&self, size: Size) -> Primitive {
        Primitive::Rect {
            size,
            corner_radius: Some(self.corner_radius),
            paint: Paint::new(Some(self.fill_color), self.stroke.clone()),
        }
    }

    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::Center
    }

    fn text(&self) -> &TextDefinition {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_is_rounded_rect_of_full_size() {
        let outline = ActivityDefinition::default().render_outline(Size::new(120.0, 80.0));

        match outline {
            Primitive::Rect {
                size,
                corner_radius,
                paint,
            } => {
                assert_eq!(size, Size::new(120.0, 80.0));
                assert_eq!(corner_radius, Some(10.0));
                assert_eq!(paint.fill(), Some(Color::white()));
                assert_eq!(paint.stroke().width(), 2.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_label_is_centered_at_font_size_12() {
        let definition = ActivityDefinition::default();
        assert_eq!(definition.label_placement(), LabelPlacement::Center);
        assert_eq!(definition.text().font_size(), Some(12));
    }
}
