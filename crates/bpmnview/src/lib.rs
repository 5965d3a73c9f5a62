//! bpmnview - Render BPMN 2.0 diagrams from their diagram-interchange layout.
//!
//! A BPMN file carries its own layout: every shape has bounds and every edge
//! has waypoints. This crate reads that layout and draws it, without any
//! layout computation of its own.
//!
//! # Pipeline
//!
//! ```text
//! BPMN XML
//!     ↓ parse            (bpmnview-parser)
//! BpmnDocument
//!     ↓ build            (model)
//! DiagramModel: edges, containers, nodes
//!     ↓ plan             (scene)
//! DrawPlan
//!     ↓ apply            (surface)
//! SVG
//! ```

pub mod classify;
pub mod config;
pub mod geometry;
pub mod model;
pub mod scene;
pub mod surface;
pub mod viewer;

mod error;

pub use bpmnview_core::{color, draw, identifier, semantic};

pub use error::BpmnViewError;

use log::{debug, info, trace};

use bpmnview_parser::error::Diagnostic;

use config::AppConfig;
use model::DiagramModel;
use scene::{Canvas, DrawPlan};
use surface::{SurfaceError, SvgSurface};

/// Builder for parsing and rendering BPMN diagrams.
///
/// # Examples
///
/// ```rust
/// use bpmnview::{DiagramRenderer, config::AppConfig};
///
/// let xml = r#"<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL"
///     xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
///     xmlns:dc="http://www.omg.org/spec/DD/20100524/DC">
///   <bpmn:process id="P"><bpmn:task id="T" name="Review"/></bpmn:process>
///   <bpmndi:BPMNDiagram id="D">
///     <bpmndi:BPMNPlane id="PL" bpmnElement="P">
///       <bpmndi:BPMNShape id="T_di" bpmnElement="T">
///         <dc:Bounds x="100" y="100" width="100" height="80"/>
///       </bpmndi:BPMNShape>
///     </bpmndi:BPMNPlane>
///   </bpmndi:BPMNDiagram>
/// </bpmn:definitions>"#;
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
/// let document = renderer.parse(xml).expect("Failed to parse");
/// let svg = renderer.render_svg(&document).expect("Failed to render");
/// assert!(svg.contains("Review"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse BPMN XML into a document.
    ///
    /// Import warnings (unresolved references, invalid attributes, ...) are
    /// logged and do not fail the parse.
    ///
    /// # Errors
    ///
    /// Returns [`BpmnViewError::Parse`] if the XML is malformed or its root
    /// is not a BPMN `definitions` element.
    pub fn parse(&self, xml: &str) -> Result<semantic::BpmnDocument, BpmnViewError> {
        info!("Parsing BPMN document");
        let document = model::parse(xml)?;
        trace!(document:?; "Parsed document");
        Ok(document)
    }

    /// Parse BPMN XML, returning the import warnings instead of logging them.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramRenderer::parse`].
    pub fn parse_with_warnings(
        &self,
        xml: &str,
    ) -> Result<(semantic::BpmnDocument, Vec<Diagnostic>), BpmnViewError> {
        info!("Parsing BPMN document");
        model::parse_with_warnings(xml)
    }

    /// Build the drawable model of the document's first diagram.
    ///
    /// # Errors
    ///
    /// Returns [`BpmnViewError::NoDiagram`] or [`BpmnViewError::NoPlaneElements`]
    /// if there is nothing to draw.
    pub fn build_model(
        &self,
        document: &semantic::BpmnDocument,
    ) -> Result<DiagramModel, BpmnViewError> {
        DiagramModel::from_document(document)
    }

    /// Render the document's first diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`BpmnViewError`] if the configuration is invalid, the
    /// document has nothing to draw, or drawing fails.
    pub fn render_svg(&self, document: &semantic::BpmnDocument) -> Result<String, BpmnViewError> {
        let canvas = Canvas::from_config(&self.config)?;
        let model = self.build_model(document)?;

        let plan = DrawPlan::from_model(&model, canvas);
        debug!(commands = plan.commands().len(); "Applying draw plan");

        let mut surface = SvgSurface::new();
        plan.apply(&mut surface)?;
        let svg = surface.to_svg_string().ok_or(SurfaceError::NoCanvas)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
