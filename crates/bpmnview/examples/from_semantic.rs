//! Example: Rendering a document built from the semantic model
//!
//! This example builds a BPMN document programmatically, without any XML,
//! and renders it to SVG.

use bpmnview::{
    DiagramRenderer,
    identifier::Id,
    semantic::{
        BpmnDocument, Definitions, Diagram, EdgeElement, Plane, PlaneElement, SemanticElement,
        ShapeElement,
    },
};
use bpmnview_core::geometry::{Bounds, Point, Size};

fn shape(id: &str, element: Id, x: f32, y: f32, width: f32, height: f32) -> PlaneElement {
    PlaneElement::Shape(
        ShapeElement::new(Some(element))
            .with_id(Id::new(id))
            .with_bounds(Bounds::new_from_top_left(
                Point::new(x, y),
                Size::new(width, height),
            )),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building BPMN document from semantic model...\n");

    let start = Id::new("Start");
    let approve = Id::new("Approve");
    let flow = Id::new("Flow");

    let plane = Plane::new(Some(vec![
        shape("Start_di", start, 100.0, 102.0, 36.0, 36.0),
        shape("Approve_di", approve, 200.0, 80.0, 100.0, 80.0),
        PlaneElement::Edge(
            EdgeElement::new(
                Some(flow),
                vec![Point::new(136.0, 120.0), Point::new(200.0, 120.0)],
            )
            .with_id(Id::new("Flow_di")),
        ),
    ]));

    let document = BpmnDocument::new(Definitions::new(Some(Id::new("Definitions"))))
        .with_element(SemanticElement::new(start, "bpmn:StartEvent").with_name("Submitted"))
        .with_element(SemanticElement::new(approve, "bpmn:UserTask").with_name("Approve"))
        .with_element(SemanticElement::new(flow, "bpmn:SequenceFlow"))
        .with_diagram(Diagram::new(plane).with_id(Id::new("Diagram")));

    let renderer = DiagramRenderer::default();
    let model = renderer.build_model(&document)?;
    println!(
        "Model: {} edge(s), {} container(s), {} node(s)",
        model.edges().len(),
        model.containers().len(),
        model.nodes().len()
    );

    let svg = renderer.render_svg(&document)?;
    println!("{svg}");

    Ok(())
}
