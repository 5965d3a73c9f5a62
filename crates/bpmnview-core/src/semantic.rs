//! Typed BPMN document model.
//!
//! A [`BpmnDocument`] owns every semantic process element (tasks, events,
//! gateways, participants, lanes, flows, ...) in an identifier-keyed table,
//! plus the diagram-interchange records ([`Diagram`] → [`Plane`] →
//! [`PlaneElement`]) that place those elements on a canvas.
//!
//! DI records never own semantic elements. They hold the element's [`Id`] and
//! resolve it through [`BpmnDocument::element`].
//!
//! # Example
//!
//! ```
//! # use bpmnview_core::{
//! #     geometry::{Bounds, Point, Size},
//! #     identifier::Id,
//! #     semantic::{BpmnDocument, Diagram, Plane, PlaneElement, SemanticElement, ShapeElement},
//! # };
//! let task = SemanticElement::new(Id::new("Task_1"), "bpmn:Task").with_name("Review");
//! let shape = ShapeElement::new(Some(Id::new("Task_1")))
//!     .with_bounds(Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(120.0, 80.0)));
//!
//! let document = BpmnDocument::default()
//!     .with_element(task)
//!     .with_diagram(Diagram::new(Plane::new(Some(vec![PlaneElement::Shape(shape)]))));
//!
//! assert_eq!(document.diagrams().len(), 1);
//! assert_eq!(document.element(Id::new("Task_1")).and_then(|e| e.name()), Some("Review"));
//! ```

use indexmap::IndexMap;

use crate::{
    geometry::{Bounds, Point},
    identifier::Id,
};

/// Qualified type name of a DI shape record.
pub const SHAPE_TYPE: &str = "bpmndi:BPMNShape";

/// Qualified type name of a DI edge record.
pub const EDGE_TYPE: &str = "bpmndi:BPMNEdge";

/// A semantic BPMN element such as `bpmn:Task` or `bpmn:Lane`.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticElement {
    id: Id,
    type_name: String,
    name: Option<String>,
}

impl SemanticElement {
    /// Creates an element with a qualified type name (for example `bpmn:ExclusiveGateway`).
    pub fn new(id: Id, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            name: None,
        }
    }

    /// Sets the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the namespace-prefixed type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// The `bpmn:Definitions` root of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    id: Option<Id>,
    name: Option<String>,
    target_namespace: Option<String>,
}

impl Definitions {
    pub fn new(id: Option<Id>) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_target_namespace(mut self, target_namespace: impl Into<String>) -> Self {
        self.target_namespace = Some(target_namespace.into());
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target_namespace(&self) -> Option<&str> {
        self.target_namespace.as_deref()
    }
}

/// A DI shape record (`bpmndi:BPMNShape`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeElement {
    id: Option<Id>,
    bpmn_element: Option<Id>,
    bounds: Option<Bounds>,
    is_horizontal: Option<bool>,
}

impl ShapeElement {
    /// Creates a shape referencing `bpmn_element`, or nothing when the reference is unresolved.
    pub fn new(bpmn_element: Option<Id>) -> Self {
        Self {
            bpmn_element,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_is_horizontal(mut self, is_horizontal: bool) -> Self {
        self.is_horizontal = Some(is_horizontal);
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    /// Returns the back-reference to the semantic element this shape visualizes.
    pub fn bpmn_element(&self) -> Option<Id> {
        self.bpmn_element
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Returns the `isHorizontal` attribute exactly as recorded; `None` when absent.
    pub fn is_horizontal(&self) -> Option<bool> {
        self.is_horizontal
    }
}

/// A DI edge record (`bpmndi:BPMNEdge`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeElement {
    id: Option<Id>,
    bpmn_element: Option<Id>,
    waypoints: Vec<Point>,
}

impl EdgeElement {
    pub fn new(bpmn_element: Option<Id>, waypoints: Vec<Point>) -> Self {
        Self {
            id: None,
            bpmn_element,
            waypoints,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn bpmn_element(&self) -> Option<Id> {
        self.bpmn_element
    }

    /// Returns the waypoints in document order.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }
}

/// One entry of a plane's `planeElement` sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneElement {
    Shape(ShapeElement),
    Edge(EdgeElement),
    /// Any other DI record, kept only for its type name.
    Other { type_name: String },
}

impl PlaneElement {
    /// Returns the qualified DI type name, the discriminant used for partitioning.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Shape(_) => SHAPE_TYPE,
            Self::Edge(_) => EDGE_TYPE,
            Self::Other { type_name } => type_name,
        }
    }
}

/// A DI plane (`bpmndi:BPMNPlane`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plane {
    id: Option<Id>,
    bpmn_element: Option<Id>,
    plane_elements: Option<Vec<PlaneElement>>,
}

impl Plane {
    /// Creates a plane. `None` means the plane carries no `planeElement` list at all,
    /// which is different from an explicitly empty one.
    pub fn new(plane_elements: Option<Vec<PlaneElement>>) -> Self {
        Self {
            plane_elements,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_bpmn_element(mut self, bpmn_element: Id) -> Self {
        self.bpmn_element = Some(bpmn_element);
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    /// Returns the process or collaboration this plane visualizes.
    pub fn bpmn_element(&self) -> Option<Id> {
        self.bpmn_element
    }

    pub fn plane_elements(&self) -> Option<&[PlaneElement]> {
        self.plane_elements.as_deref()
    }
}

/// A DI diagram (`bpmndi:BPMNDiagram`); always owns exactly one [`Plane`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    id: Option<Id>,
    name: Option<String>,
    plane: Plane,
}

impl Diagram {
    pub fn new(plane: Plane) -> Self {
        Self {
            id: None,
            name: None,
            plane,
        }
    }

    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}

/// A parsed BPMN document: root definitions, semantic elements and DI diagrams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BpmnDocument {
    root: Definitions,
    elements: IndexMap<Id, SemanticElement>,
    diagrams: Vec<Diagram>,
}

impl BpmnDocument {
    pub fn new(root: Definitions) -> Self {
        Self {
            root,
            elements: IndexMap::new(),
            diagrams: Vec::new(),
        }
    }

    /// Adds a semantic element, replacing any earlier element with the same id.
    pub fn with_element(mut self, element: SemanticElement) -> Self {
        self.insert_element(element);
        self
    }

    pub fn with_diagram(mut self, diagram: Diagram) -> Self {
        self.diagrams.push(diagram);
        self
    }

    /// Adds a semantic element and returns the element it replaced, if any.
    pub fn insert_element(&mut self, element: SemanticElement) -> Option<SemanticElement> {
        self.elements.insert(element.id(), element)
    }

    pub fn push_diagram(&mut self, diagram: Diagram) {
        self.diagrams.push(diagram);
    }

    pub fn root(&self) -> &Definitions {
        &self.root
    }

    /// Resolves a back-reference to the semantic element it names.
    pub fn element(&self, id: Id) -> Option<&SemanticElement> {
        self.elements.get(&id)
    }

    /// Returns true if an element with this id exists.
    pub fn contains_element(&self, id: Id) -> bool {
        self.elements.contains_key(&id)
    }

    /// Iterates semantic elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &SemanticElement> {
        self.elements.values()
    }

    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }
}
