use crate::{
    draw::{TextAnchor, TextDefinition, TextLabel},
    geometry::{Point, Size},
};

/// Gap between the bottom edge of a shape and a label placed below it.
const BELOW_SHAPE_TEXT_GAP: f32 = 15.0;

/// Inset of a container label from the container's leading edge.
const CONTAINER_LABEL_INSET: f32 = 15.0;

/// Height above the origin at which an unlabelled caption sits.
const CAPTION_RISE: f32 = 5.0;

/// Where a shape's label goes, relative to the shape's local `0..w, 0..h` box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Centered on both axes
    Center,
    /// Centered horizontally, below the bottom edge
    BelowShape,
    /// Along the left edge, vertically centered, rotated to read bottom to top
    LeftEdgeRotated,
    /// Centered horizontally, just inside the top edge
    TopEdge,
    /// Just above the origin, unanchored
    AboveOrigin,
}

impl LabelPlacement {
    /// Builds the label for `content` inside a shape of `size`.
    pub fn place(&self, content: &str, size: Size, definition: &TextDefinition) -> TextLabel {
        let definition = definition.clone();
        match self {
            Self::Center => TextLabel::new(content, size.center(), definition)
                .with_anchor(TextAnchor::Middle)
                .with_baseline_shift(".3em"),
            Self::BelowShape => TextLabel::new(
                content,
                Point::new(size.width() / 2.0, size.height() + BELOW_SHAPE_TEXT_GAP),
                definition,
            )
            .with_anchor(TextAnchor::Middle),
            Self::LeftEdgeRotated => TextLabel::new(
                content,
                Point::new(CONTAINER_LABEL_INSET, size.height() / 2.0),
                definition,
            )
            .with_anchor(TextAnchor::Middle)
            .with_rotation(-90.0),
            Self::TopEdge => TextLabel::new(
                content,
                Point::new(size.width() / 2.0, CONTAINER_LABEL_INSET),
                definition,
            )
            .with_anchor(TextAnchor::Middle),
            Self::AboveOrigin => TextLabel::new(content, Point::new(0.0, -CAPTION_RISE), definition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(placement: LabelPlacement, size: Size) -> TextLabel {
        placement.place("label", size, &TextDefinition::new())
    }

    #[test]
    fn test_center() {
        let label = place(LabelPlacement::Center, Size::new(120.0, 80.0));
        assert_eq!(label.position(), Point::new(60.0, 40.0));
        assert_eq!(label.anchor(), TextAnchor::Middle);
        assert_eq!(label.rotation(), None);
    }

    #[test]
    fn test_below_shape() {
        let label = place(LabelPlacement::BelowShape, Size::new(36.0, 36.0));
        assert_eq!(label.position(), Point::new(18.0, 51.0));
        assert_eq!(label.anchor(), TextAnchor::Middle);
    }

    #[test]
    fn test_left_edge_rotated() {
        let label = place(LabelPlacement::LeftEdgeRotated, Size::new(600.0, 250.0));
        assert_eq!(label.position(), Point::new(15.0, 125.0));
        assert_eq!(label.rotation(), Some(-90.0));
    }

    #[test]
    fn test_top_edge() {
        let label = place(LabelPlacement::TopEdge, Size::new(200.0, 400.0));
        assert_eq!(label.position(), Point::new(100.0, 15.0));
        assert_eq!(label.rotation(), None);
    }

    #[test]
    fn test_above_origin() {
        let label = place(LabelPlacement::AboveOrigin, Size::new(100.0, 50.0));
        assert_eq!(label.position(), Point::new(0.0, -5.0));
        assert_eq!(label.anchor(), TextAnchor::Start);
    }
}
