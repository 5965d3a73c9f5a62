//! Drawable Components for BPMN Rendering
//!
//! This module provides the visual vocabulary of the renderer: per-family
//! [`ShapeDefinition`]s that turn a size and an optional name into
//! [`Primitive`]s, stroke and text styling, label placement rules and the
//! [`RenderLayer`] ordering used when a scene is assembled.
//!
//! # Layer-Based Rendering
//!
//! Scene items are tagged with a [`RenderLayer`] and emitted through
//! [`LayeredOutput`], which orders edges below containers below nodes.
mod layer;
mod primitive;
mod shape;
mod stroke;
mod text;
mod text_positioning;

pub use layer::{LayeredOutput, RenderLayer};
pub use primitive::{Paint, Primitive, SvgNode};
pub use shape::{
    ActivityDefinition, ContainerDefinition, EventDefinition, FallbackDefinition,
    GatewayDefinition, ShapeDefinition,
};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{TextAnchor, TextDefinition, TextLabel};
pub use text_positioning::LabelPlacement;
