//! Drawing surfaces.
//!
//! A [`Surface`] is the output a [`DrawPlan`](crate::scene::DrawPlan) is
//! applied to. The plan decides what to draw and in which order; the surface
//! only knows how to put a canvas, a marker, an edge or a shape group onto
//! its medium.
//!
//! # Available Backends
//!
//! - [`svg::SvgSurface`]: an in-memory SVG document

pub mod svg;

use thiserror::Error;

use bpmnview_core::{color::Color, geometry::Size};

use crate::scene::{EdgePath, MarkerDefinition, ShapeGroup};

pub use self::svg::SvgSurface;

/// Errors reported by a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Something was drawn before [`Surface::create_canvas`].
    #[error("no canvas: create_canvas must be called before drawing")]
    NoCanvas,
}

/// Abstraction for drawing backends.
pub trait Surface {
    /// Removes everything drawn so far, including the canvas.
    fn clear(&mut self);

    /// Creates the root canvas with a logical `viewport` and an optional
    /// background fill.
    fn create_canvas(&mut self, viewport: Size, background: Option<Color>);

    /// Registers a marker that edges can reference by id.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoCanvas`] if no canvas exists.
    fn define_marker(&mut self, marker: &MarkerDefinition) -> Result<(), SurfaceError>;

    /// Draws an open polyline in canvas coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoCanvas`] if no canvas exists.
    fn draw_edge(&mut self, edge: &EdgePath) -> Result<(), SurfaceError>;

    /// Draws a group translated to its origin, holding primitives in local
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NoCanvas`] if no canvas exists.
    fn draw_group(&mut self, group: &ShapeGroup) -> Result<(), SurfaceError>;
}
