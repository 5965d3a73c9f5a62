use super::ShapeDefinition;
use crate::{
    draw::{LabelPlacement, Paint, Primitive, StrokeDefinition, TextDefinition},
    geometry::Size,
};

/// Pools and lanes: an unfilled outline whose label runs along the leading edge.
#[derive(Debug, Clone)]
pub struct ContainerDefinition {
    horizontal: bool,
    stroke: StrokeDefinition,
    text: TextDefinition,
}

impl ContainerDefinition {
    /// Creates a container definition. Horizontal containers label their left
    /// edge with rotated text, vertical ones label their top edge.
    pub fn new(horizontal: bool) -> Self {
        Self {
            horizontal,
            stroke: StrokeDefinition::default(),
            text: TextDefinition::with_font_size(12),
        }
    }

    /// Resolves a DI `isHorizontal` attribute: only an explicit `false` is vertical.
    pub fn from_is_horizontal(is_horizontal: Option<bool>) -> Self {
        Self::new(is_horizontal != Some(false))
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }
}

impl Default for ContainerDefinition {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ShapeDefinition for ContainerDefinition {
    fn render_outline(&self, size: Size) -> Primitive {
        Primitive::Rect {
            size,
            corner_radius: None,
            paint: Paint::new(None, self.stroke.clone()),
        }
    }

    fn label_placement(&self) -> LabelPlacement {
        if self.horizontal {
            LabelPlacement::LeftEdgeRotated
        } else {
            LabelPlacement::TopEdge
        }
    }

    fn text(&self) -> &TextDefinition {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_horizontal_resolution() {
        assert!(ContainerDefinition::from_is_horizontal(None).is_horizontal());
        assert!(ContainerDefinition::from_is_horizontal(Some(true)).is_horizontal());
        assert!(!ContainerDefinition::from_is_horizontal(Some(false)).is_horizontal());
    }

    #[test]
    fn test_outline_has_no_fill() {
        let outline = ContainerDefinition::default().render_outline(Size::new(600.0, 250.0));

        match outline {
            Primitive::Rect {
                corner_radius,
                paint,
                ..
            } => {
                assert_eq!(corner_radius, None);
                assert_eq!(paint.fill(), None);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn test_label_placement_follows_orientation() {
        assert_eq!(
            ContainerDefinition::new(true).label_placement(),
            LabelPlacement::LeftEdgeRotated
        );
        assert_eq!(
            ContainerDefinition::new(false).label_placement(),
            LabelPlacement::TopEdge
        );
    }
}
