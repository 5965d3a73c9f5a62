//! Walks a parsed XML tree and builds the typed [`BpmnDocument`].
//!
//! Reading happens in two passes. The first registers every semantic model
//! element that declares an `id`, the second reads the DI diagrams so that
//! `bpmnElement` back-references can be resolved against the complete table.

use indexmap::IndexMap;
use log::{debug, trace};
use roxmltree::{Document, Node};
use thiserror::Error;

use bpmnview_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    semantic::{
        BpmnDocument, Definitions, Diagram, EdgeElement, Plane, PlaneElement, SemanticElement,
        ShapeElement,
    },
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    namespace::{BPMN_DI_NS, DC_NS, DI_NS, MODEL_NS, is_element, qualified_name},
    span::Span,
};

/// A parsed document together with the non-fatal problems found while reading it.
#[derive(Debug)]
pub struct ParseOutput {
    document: BpmnDocument,
    warnings: Vec<Diagnostic>,
}

impl ParseOutput {
    fn new(document: BpmnDocument, warnings: Vec<Diagnostic>) -> Self {
        Self { document, warnings }
    }

    pub fn document(&self) -> &BpmnDocument {
        &self.document
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_parts(self) -> (BpmnDocument, Vec<Diagnostic>) {
        (self.document, self.warnings)
    }
}

/// Why a typed attribute could not be read.
#[derive(Debug, Error, PartialEq)]
enum AttributeError {
    #[error("missing attribute `{0}`")]
    Missing(&'static str),

    #[error("attribute `{name}` is not a number: `{value}`")]
    NotANumber { name: &'static str, value: String },

    #[error("attribute `{name}` is not finite: `{value}`")]
    NotFinite { name: &'static str, value: String },

    #[error("attribute `{name}` must not be negative: `{value}`")]
    Negative { name: &'static str, value: String },

    #[error("attribute `{name}` is not a boolean: `{value}`")]
    NotABoolean { name: &'static str, value: String },
}

/// Parses `source` and builds the document.
pub(crate) fn read(source: &str) -> Result<ParseOutput, ParseError> {
    let xml = Document::parse(source).map_err(|err| malformed_xml(source, &err))?;

    let root = xml.root_element();
    if !is_element(root, MODEL_NS, "definitions") {
        return Err(Diagnostic::error(format!(
            "root element is `{}`, expected `bpmn:definitions`",
            qualified_name(root)
        ))
        .with_code(ErrorCode::E002)
        .with_label(tag_span(source, root), "not a BPMN definitions element")
        .with_help(format!(
            "a BPMN 2.0 file starts with <definitions xmlns=\"{MODEL_NS}\">"
        ))
        .into());
    }

    let mut reader = Reader::new(source);
    let mut document = BpmnDocument::new(reader.definitions(root));
    reader.register_elements(root, &mut document);
    reader.read_diagrams(root, &mut document);

    let warnings = reader.collector.finish();
    debug!(
        elements = document.elements().count(),
        diagrams = document.diagrams().len(),
        warnings = warnings.len();
        "BPMN document read"
    );
    Ok(ParseOutput::new(document, warnings))
}

fn malformed_xml(source: &str, err: &roxmltree::Error) -> ParseError {
    let pos = err.pos();
    Diagnostic::error(err.to_string())
        .with_code(ErrorCode::E001)
        .with_label(Span::at_position(source, pos.row, pos.col), "malformed XML")
        .into()
}

/// The span of an element's start tag.
fn tag_span(source: &str, node: Node<'_, '_>) -> Span {
    let range = node.range();
    let end = source
        .get(range.clone())
        .and_then(|text| text.find('>'))
        .map_or(range.end, |close| range.start + close + 1);
    Span::new(range.start..end)
}

struct Reader<'s> {
    source: &'s str,
    collector: DiagnosticCollector,
    declared: IndexMap<Id, Span>,
}

impl<'s> Reader<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            collector: DiagnosticCollector::new(),
            declared: IndexMap::new(),
        }
    }

    fn definitions(&self, root: Node<'_, '_>) -> Definitions {
        let mut definitions = Definitions::new(root.attribute("id").map(Id::new));
        if let Some(name) = root.attribute("name") {
            definitions = definitions.with_name(name);
        }
        if let Some(target_namespace) = root.attribute("targetNamespace") {
            definitions = definitions.with_target_namespace(target_namespace);
        }
        definitions
    }

    /// Registers every model element below the root that declares an id.
    fn register_elements(&mut self, root: Node<'_, '_>, document: &mut BpmnDocument) {
        for node in root.descendants().skip(1) {
            if !node.is_element() || node.tag_name().namespace() != Some(MODEL_NS) {
                continue;
            }
            let Some(raw_id) = node.attribute("id") else {
                continue;
            };

            let id = Id::new(raw_id);
            let span = tag_span(self.source, node);
            if let Some(first) = self.declared.get(&id).copied() {
                self.collector.emit(
                    Diagnostic::warning(format!("duplicate id `{raw_id}`"))
                        .with_code(ErrorCode::E101)
                        .with_label(span, "declared again here")
                        .with_secondary_label(first, "first declared here")
                        .with_help("the first declaration is kept"),
                );
                continue;
            }

            let mut element = SemanticElement::new(id, qualified_name(node));
            if let Some(name) = node.attribute("name") {
                element = element.with_name(name);
            }
            trace!(id = raw_id, type_name = element.type_name(); "Registered element");
            document.insert_element(element);
            self.declared.insert(id, span);
        }
    }

    fn read_diagrams(&mut self, root: Node<'_, '_>, document: &mut BpmnDocument) {
        for node in root
            .children()
            .filter(|child| is_element(*child, BPMN_DI_NS, "BPMNDiagram"))
        {
            let diagram = self.diagram(node, document);
            document.push_diagram(diagram);
        }
    }

    fn diagram(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> Diagram {
        let plane = node
            .children()
            .find(|child| is_element(*child, BPMN_DI_NS, "BPMNPlane"))
            .map_or_else(|| Plane::new(None), |plane| self.plane(plane, document));

        let mut diagram = Diagram::new(plane);
        if let Some(id) = node.attribute("id") {
            diagram = diagram.with_id(Id::new(id));
        }
        if let Some(name) = node.attribute("name") {
            diagram = diagram.with_name(name);
        }
        diagram
    }

    /// Reads a plane. A plane without child records has no `planeElement` list.
    fn plane(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> Plane {
        let elements: Vec<PlaneElement> = node
            .children()
            .filter(Node::is_element)
            .map(|child| self.plane_element(child, document))
            .collect();

        let mut plane = Plane::new((!elements.is_empty()).then_some(elements));
        if let Some(id) = node.attribute("id") {
            plane = plane.with_id(Id::new(id));
        }
        if let Some(target) = self.resolve_reference(node, document) {
            plane = plane.with_bpmn_element(target);
        }
        plane
    }

    fn plane_element(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> PlaneElement {
        if is_element(node, BPMN_DI_NS, "BPMNShape") {
            PlaneElement::Shape(self.shape(node, document))
        } else if is_element(node, BPMN_DI_NS, "BPMNEdge") {
            PlaneElement::Edge(self.edge(node, document))
        } else {
            let type_name = qualified_name(node);
            self.collector.emit(
                Diagnostic::warning(format!("unknown DI element `{type_name}`"))
                    .with_code(ErrorCode::E103)
                    .with_label(tag_span(self.source, node), "not a shape or an edge")
                    .with_help("the record is ignored"),
            );
            PlaneElement::Other { type_name }
        }
    }

    fn shape(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> ShapeElement {
        let mut shape = ShapeElement::new(self.resolve_reference(node, document));
        if let Some(id) = node.attribute("id") {
            shape = shape.with_id(Id::new(id));
        }

        match parse_optional_bool(node, "isHorizontal") {
            Ok(Some(is_horizontal)) => shape = shape.with_is_horizontal(is_horizontal),
            Ok(None) => {}
            Err(err) => self.invalid_attribute(node, &err, "the attribute is ignored"),
        }

        let bounds_node = node
            .children()
            .find(|child| is_element(*child, DC_NS, "Bounds"));
        if let Some(bounds_node) = bounds_node {
            match parse_bounds(bounds_node) {
                Ok(bounds) => shape = shape.with_bounds(bounds),
                Err(err) => self.invalid_attribute(bounds_node, &err, "the shape is not drawn"),
            }
        }
        shape
    }

    fn edge(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> EdgeElement {
        let mut waypoints = Vec::new();
        for point_node in node
            .children()
            .filter(|child| is_element(*child, DI_NS, "waypoint"))
        {
            match parse_point(point_node) {
                Ok(point) => waypoints.push(point),
                Err(err) => self.invalid_attribute(point_node, &err, "the waypoint is skipped"),
            }
        }

        let mut edge = EdgeElement::new(self.resolve_reference(node, document), waypoints);
        if let Some(id) = node.attribute("id") {
            edge = edge.with_id(Id::new(id));
        }
        edge
    }

    /// Resolves the `bpmnElement` attribute of a DI record.
    fn resolve_reference(&mut self, node: Node<'_, '_>, document: &BpmnDocument) -> Option<Id> {
        let raw = node.attribute("bpmnElement")?;
        let id = Id::new(raw);
        if document.contains_element(id) {
            return Some(id);
        }

        self.collector.emit(
            Diagnostic::warning(format!("`bpmnElement` refers to unknown element `{raw}`"))
                .with_code(ErrorCode::E100)
                .with_label(tag_span(self.source, node), "unresolved reference")
                .with_help("no model element declares this id"),
        );
        None
    }

    fn invalid_attribute(&mut self, node: Node<'_, '_>, err: &AttributeError, consequence: &str) {
        self.collector.emit(
            Diagnostic::warning(err.to_string())
                .with_code(ErrorCode::E102)
                .with_label(tag_span(self.source, node), "invalid attribute")
                .with_help(consequence.to_string()),
        );
    }
}

fn parse_number(node: Node<'_, '_>, name: &'static str) -> Result<f32, AttributeError> {
    let value = node
        .attribute(name)
        .ok_or(AttributeError::Missing(name))?;
    let number: f32 = value
        .trim()
        .parse()
        .map_err(|_| AttributeError::NotANumber {
            name,
            value: value.to_string(),
        })?;
    if !number.is_finite() {
        return Err(AttributeError::NotFinite {
            name,
            value: value.to_string(),
        });
    }
    Ok(number)
}

fn parse_extent(node: Node<'_, '_>, name: &'static str) -> Result<f32, AttributeError> {
    let extent = parse_number(node, name)?;
    if extent < 0.0 {
        return Err(AttributeError::Negative {
            name,
            value: node.attribute(name).unwrap_or_default().to_string(),
        });
    }
    Ok(extent)
}

fn parse_point(node: Node<'_, '_>) -> Result<Point, AttributeError> {
    Ok(Point::new(parse_number(node, "x")?, parse_number(node, "y")?))
}

fn parse_bounds(node: Node<'_, '_>) -> Result<Bounds, AttributeError> {
    let top_left = parse_point(node)?;
    let size = Size::new(parse_extent(node, "width")?, parse_extent(node, "height")?);
    Ok(Bounds::new_from_top_left(top_left, size))
}

/// Reads an XML Schema boolean (`true`, `false`, `1`, `0`).
fn parse_optional_bool(
    node: Node<'_, '_>,
    name: &'static str,
) -> Result<Option<bool>, AttributeError> {
    let Some(value) = node.attribute(name) else {
        return Ok(None);
    };
    match value.trim() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(AttributeError::NotABoolean {
            name,
            value: value.to_string(),
        }),
    }
}
