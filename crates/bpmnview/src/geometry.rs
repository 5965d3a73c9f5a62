//! Geometry resolution for DI records.
//!
//! Pure projections from DI records to drawable geometry. A shape without
//! bounds cannot be placed; that is reported per shape and the caller skips
//! it without aborting the render.

use thiserror::Error;

use bpmnview_core::{
    geometry::{Bounds, Point},
    identifier::Id,
    semantic::{EdgeElement, ShapeElement},
};

/// Why a DI record could not be placed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("shape {} has no bounds", display_id(.0))]
    MissingBounds(Option<Id>),
}

fn display_id(id: &Option<Id>) -> String {
    id.map_or_else(|| "<anonymous>".to_string(), |id| format!("`{id}`"))
}

/// Returns the DI bounds of a shape.
///
/// # Errors
///
/// Returns [`GeometryError::MissingBounds`] when the shape has no usable
/// `dc:Bounds`.
pub fn bounds_of(shape: &ShapeElement) -> Result<Bounds, GeometryError> {
    shape
        .bounds()
        .ok_or(GeometryError::MissingBounds(shape.id()))
}

/// Returns the waypoints of an edge in document order.
pub fn waypoints_of(edge: &EdgeElement) -> &[Point] {
    edge.waypoints()
}
