//! Diagram model building.
//!
//! Turns a parsed [`BpmnDocument`] into the three drawable partitions of its
//! first DI plane: edges, containers (pools and lanes) and nodes (everything
//! else with a resolvable semantic element).

use log::{debug, info, trace, warn};

use bpmnview_core::semantic::{BpmnDocument, EdgeElement, PlaneElement, ShapeElement};
use bpmnview_parser::error::Diagnostic;

use crate::{
    classify::{ShapeCategory, classify},
    error::BpmnViewError,
};

/// A DI shape joined with the semantic element it depicts.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelShape {
    shape: ShapeElement,
    type_name: String,
    name: Option<String>,
    category: ShapeCategory,
}

impl ModelShape {
    pub fn shape(&self) -> &ShapeElement {
        &self.shape
    }

    /// The semantic type name, e.g. `bpmn:Task`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The semantic element's `name`, used as the label.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> ShapeCategory {
        self.category
    }
}

/// The drawable content of one diagram, partitioned by render layer.
///
/// Each partition keeps document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagramModel {
    edges: Vec<EdgeElement>,
    containers: Vec<ModelShape>,
    nodes: Vec<ModelShape>,
}

impl DiagramModel {
    /// Builds the model from the first diagram of `document`.
    ///
    /// Shapes whose `bpmnElement` did not resolve are skipped. Plane records
    /// that are neither shapes nor edges are ignored.
    ///
    /// # Errors
    ///
    /// - [`BpmnViewError::NoDiagram`] when the document has no DI diagram.
    /// - [`BpmnViewError::NoPlaneElements`] when the first diagram's plane has
    ///   no `planeElement` list. An explicitly empty list is a valid, empty model.
    pub fn from_document(document: &BpmnDocument) -> Result<Self, BpmnViewError> {
        let Some((diagram, rest)) = document.diagrams().split_first() else {
            return Err(BpmnViewError::NoDiagram);
        };
        if !rest.is_empty() {
            debug!(skipped = rest.len(); "Only the first diagram is rendered");
        }

        let plane_elements = diagram
            .plane()
            .plane_elements()
            .ok_or(BpmnViewError::NoPlaneElements)?;

        let mut model = Self::default();
        for plane_element in plane_elements {
            match plane_element {
                PlaneElement::Edge(edge) => model.edges.push(edge.clone()),
                PlaneElement::Shape(shape) => model.add_shape(document, shape),
                PlaneElement::Other { type_name } => {
                    trace!(type_name = type_name.as_str(); "Ignoring plane element");
                }
            }
        }

        debug!(
            edges = model.edges.len(),
            containers = model.containers.len(),
            nodes = model.nodes.len();
            "Diagram model built"
        );
        Ok(model)
    }

    fn add_shape(&mut self, document: &BpmnDocument, shape: &ShapeElement) {
        let Some(element) = shape.bpmn_element().and_then(|id| document.element(id)) else {
            debug!(shape_id:? = shape.id(); "Skipping shape without semantic element");
            return;
        };

        let category = classify(element.type_name());
        let model_shape = ModelShape {
            shape: shape.clone(),
            type_name: element.type_name().to_string(),
            name: element
                .name()
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            category,
        };

        if category.is_container() {
            self.containers.push(model_shape);
        } else {
            self.nodes.push(model_shape);
        }
    }

    pub fn edges(&self) -> &[EdgeElement] {
        &self.edges
    }

    pub fn containers(&self) -> &[ModelShape] {
        &self.containers
    }

    pub fn nodes(&self) -> &[ModelShape] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.containers.is_empty() && self.nodes.is_empty()
    }
}

/// Parses BPMN XML, logging every import warning.
///
/// # Errors
///
/// Returns [`BpmnViewError::Parse`] when the XML is rejected.
pub fn parse(xml: &str) -> Result<BpmnDocument, BpmnViewError> {
    let (document, warnings) = parse_with_warnings(xml)?;
    for warning in &warnings {
        warn!("BPMN import warning: {warning}");
    }
    Ok(document)
}

/// Parses BPMN XML and hands the import warnings back to the caller.
///
/// Each warning keeps its code, labelled spans into `xml` and help text, so
/// callers can render them against the source.
///
/// # Errors
///
/// Returns [`BpmnViewError::Parse`] when the XML is rejected.
pub fn parse_with_warnings(xml: &str) -> Result<(BpmnDocument, Vec<Diagnostic>), BpmnViewError> {
    let output =
        bpmnview_parser::from_xml(xml).map_err(|err| BpmnViewError::new_parse_error(err, xml))?;

    let (document, warnings) = output.into_parts();
    info!(warnings = warnings.len(); "BPMN document parsed");
    Ok((document, warnings))
}

/// Parses `xml` and builds the model of its first diagram.
///
/// # Errors
///
/// Any error of [`parse`] or [`DiagramModel::from_document`].
pub fn build(xml: &str) -> Result<DiagramModel, BpmnViewError> {
    let document = parse(xml)?;
    DiagramModel::from_document(&document)
}
