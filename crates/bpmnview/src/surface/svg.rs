//! SVG surface.

use log::{debug, trace};
use svg::{Document, Node, node::element as svg_element};

use bpmnview_core::{apply_stroke, color::Color, geometry::Size};

use super::{Surface, SurfaceError};
use crate::scene::{EdgePath, MarkerDefinition, ShapeGroup};

/// Border drawn around the canvas.
const CANVAS_BORDER: &str = "border: 1px solid #ccc";

/// An in-memory SVG document.
///
/// The document only exists between [`Surface::create_canvas`] and the next
/// [`Surface::clear`].
#[derive(Debug, Default)]
pub struct SvgSurface {
    document: Option<Document>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once a canvas exists.
    pub fn has_canvas(&self) -> bool {
        self.document.is_some()
    }

    /// Serializes the current document, or `None` if there is no canvas.
    pub fn to_svg_string(&self) -> Option<String> {
        self.document.as_ref().map(ToString::to_string)
    }

    fn append<T>(&mut self, node: T) -> Result<(), SurfaceError>
    where
        T: Into<Box<dyn Node>>,
    {
        let document = self.document.take().ok_or(SurfaceError::NoCanvas)?;
        self.document = Some(document.add(node));
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        if self.document.take().is_some() {
            trace!("SVG surface cleared");
        }
    }

    fn create_canvas(&mut self, viewport: Size, background: Option<Color>) {
        let mut document = Document::new()
            .set("width", "100%")
            .set("height", "100%")
            .set(
                "viewBox",
                format!("0 0 {} {}", viewport.width(), viewport.height()),
            )
            .set("style", CANVAS_BORDER);

        if let Some(color) = background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", viewport.width())
                .set("height", viewport.height())
                .set("fill", &color);
            document = document.add(rect);
        }

        debug!(width = viewport.width(), height = viewport.height(); "SVG canvas created");
        self.document = Some(document);
    }

    fn define_marker(&mut self, marker: &MarkerDefinition) -> Result<(), SurfaceError> {
        let path = svg_element::Path::new()
            .set("d", marker.path())
            .set("fill", &marker.fill());

        let definitions = svg_element::Definitions::new().add(
            svg_element::Marker::new()
                .set("id", marker.id())
                .set("viewBox", marker.view_box())
                .set("refX", marker.ref_x())
                .set("refY", marker.ref_y())
                .set("markerWidth", marker.width())
                .set("markerHeight", marker.height())
                .set("orient", "auto")
                .add(path),
        );

        self.append(definitions)
    }

    fn draw_edge(&mut self, edge: &EdgePath) -> Result<(), SurfaceError> {
        let mut path = svg_element::Path::new()
            .set("class", "edge")
            .set("d", edge.path_data())
            .set("fill", "none");
        if let Some(id) = edge.element_id() {
            path = path.set("data-element-id", id.to_string());
        }
        let mut path = apply_stroke!(path, edge.stroke());
        if let Some(marker) = edge.marker_end() {
            path = path.set("marker-end", marker);
        }

        self.append(path)
    }

    fn draw_group(&mut self, group: &ShapeGroup) -> Result<(), SurfaceError> {
        let mut element = svg_element::Group::new().set("class", group.class());
        if let Some(id) = group.element_id() {
            element = element.set("data-element-id", id.to_string());
        }
        let element = group
            .primitives()
            .iter()
            .fold(element.set("transform", group.transform()), |element, primitive| {
                element.add(primitive.to_svg())
            });

        self.append(element)
    }
}
