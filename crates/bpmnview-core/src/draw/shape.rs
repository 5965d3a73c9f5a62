//! Shape definitions for BPMN node and container shapes.
//!
//! Each [`ShapeDefinition`] knows how to draw one family of BPMN elements into
//! the local coordinate space of its group, where `(0, 0)` is the top-left
//! corner of the DI bounds and `size` is the bounds' width and height.

use std::fmt;

use crate::{
    draw::{LabelPlacement, Primitive, TextDefinition},
    geometry::Size,
};

mod activity;
mod container;
mod event;
mod fallback;
mod gateway;

pub use activity::ActivityDefinition;
pub use container::ContainerDefinition;
pub use event::EventDefinition;
pub use fallback::FallbackDefinition;
pub use gateway::GatewayDefinition;

/// A trait for shape definitions that provide stateless drawing.
pub trait ShapeDefinition: fmt::Debug {
    /// Returns the outline primitive sized to `size`.
    fn render_outline(&self, size: Size) -> Primitive;

    /// Returns where the element's name goes.
    fn label_placement(&self) -> LabelPlacement;

    /// Get the text definition for the label.
    fn text(&self) -> &TextDefinition;

    /// Renders the outline followed by the label, if there is one.
    fn render(&self, size: Size, label: Option<&str>) -> Vec<Primitive> {
        let mut primitives = vec![self.render_outline(size)];
        if let Some(content) = label {
            let text = self.label_placement().place(content, size, self.text());
            primitives.push(Primitive::Text(text));
        }
        primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_render_without_label_is_outline_only() {
        let primitives = ActivityDefinition::default().render(Size::new(100.0, 80.0), None);
        assert_eq!(primitives.len(), 1);
        assert!(primitives[0].as_text().is_none());
    }

    #[test]
    fn test_render_with_label_appends_text() {
        let primitives = EventDefinition::default().render(Size::new(36.0, 36.0), Some("Start"));
        assert_eq!(primitives.len(), 2);

        let label = primitives[1].as_text().expect("label should be text");
        assert_eq!(label.content(), "Start");
        assert_eq!(label.position(), Point::new(18.0, 51.0));
    }
}
