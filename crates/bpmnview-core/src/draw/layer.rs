//! Z-order layers for the rendered scene.
//!
//! Drawables say which [`RenderLayer`] they belong to, and
//! [`LayeredOutput`] emits them bottom to top regardless of the order they
//! were added in. Within a layer, insertion order is kept.
//!
//! # Example
//!
//! ```
//! # use bpmnview_core::draw::{LayeredOutput, RenderLayer};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Node, "task");
//! output.add_to_layer(RenderLayer::Edge, "flow");
//! output.add_to_layer(RenderLayer::Container, "pool");
//!
//! let ordered: Vec<_> = output.into_ordered().into_iter().map(|(_, item)| item).collect();
//! assert_eq!(ordered, vec!["flow", "pool", "task"]);
//! ```

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Sequence and message flows - renders first
    Edge,
    /// Pools and lanes
    Container,
    /// Activities, events, gateways and unrecognised elements
    Node,
}

impl RenderLayer {
    /// Returns the name used as the CSS class of groups on this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Container => "container",
            Self::Node => "node",
        }
    }
}

/// Items grouped by rendering layer.
#[derive(Debug)]
pub struct LayeredOutput<T> {
    items: Vec<(RenderLayer, T)>,
}

impl<T> Default for LayeredOutput<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> LayeredOutput<T> {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single item to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, item: T) {
        self.items.push((layer, item));
    }

    /// Consumes the output and returns its items bottom layer first.
    ///
    /// The sort is stable, so items on the same layer keep insertion order.
    pub fn into_ordered(mut self) -> Vec<(RenderLayer, T)> {
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_has_nothing_to_order() {
        let output: LayeredOutput<u8> = LayeredOutput::new();
        assert!(output.into_ordered().is_empty());
    }

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Edge < RenderLayer::Container);
        assert!(RenderLayer::Container < RenderLayer::Node);
    }

    #[test]
    fn test_into_ordered_is_stable_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, 1);
        output.add_to_layer(RenderLayer::Edge, 2);
        output.add_to_layer(RenderLayer::Node, 3);
        output.add_to_layer(RenderLayer::Container, 4);
        output.add_to_layer(RenderLayer::Edge, 5);

        let ordered = output.into_ordered();
        assert_eq!(
            ordered,
            vec![
                (RenderLayer::Edge, 2),
                (RenderLayer::Edge, 5),
                (RenderLayer::Container, 4),
                (RenderLayer::Node, 1),
                (RenderLayer::Node, 3),
            ]
        );
    }

    #[test]
    fn test_layer_names() {
        assert_eq!(RenderLayer::Edge.name(), "edge");
        assert_eq!(RenderLayer::Container.name(), "container");
        assert_eq!(RenderLayer::Node.name(), "node");
    }
}
