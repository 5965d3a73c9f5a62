//! Scene rendering.
//!
//! A render pass is split in two. [`DrawPlan::from_model`] turns a
//! [`DiagramModel`] into an immutable, ordered list of [`DrawCommand`]s
//! without touching any output. [`DrawPlan::apply`] then replays the plan
//! against a [`Surface`].
//!
//! # Draw order
//!
//! Commands are emitted through a [`LayeredOutput`], so every edge precedes
//! every container, which precedes every node, whatever the order of the
//! records in the DI plane. Within a layer, document order is kept.

mod dispatch;

use log::{debug, trace, warn};

use bpmnview_core::{
    color::Color,
    draw::{LayeredOutput, Primitive, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
    identifier::Id,
    semantic::EdgeElement,
};

use crate::{
    config::AppConfig,
    error::BpmnViewError,
    geometry::{bounds_of, waypoints_of},
    model::{DiagramModel, ModelShape},
    surface::{Surface, SurfaceError},
};

/// Identifier of the shared arrowhead marker.
pub const ARROWHEAD_ID: &str = "arrowhead";

/// A reusable marker placed at path ends.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDefinition {
    id: &'static str,
    view_box: &'static str,
    ref_x: f32,
    ref_y: f32,
    width: f32,
    height: f32,
    path: &'static str,
    fill: Color,
}

impl MarkerDefinition {
    /// The filled triangle every edge ends with.
    pub fn arrowhead() -> Self {
        Self {
            id: ARROWHEAD_ID,
            view_box: "0 -5 10 10",
            ref_x: 10.0,
            ref_y: 0.0,
            width: 6.0,
            height: 6.0,
            path: "M0,-5L10,0L0,5",
            fill: Color::default(),
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn view_box(&self) -> &str {
        self.view_box
    }

    pub fn ref_x(&self) -> f32 {
        self.ref_x
    }

    pub fn ref_y(&self) -> f32 {
        self.ref_y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    /// The `url(#id)` reference used by `marker-end`.
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }
}

/// An open polyline through an edge's waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    element_id: Option<Id>,
    points: Vec<Point>,
    stroke: StrokeDefinition,
    marker_end: Option<String>,
}

impl EdgePath {
    /// Builds the path for an edge, or `None` when it has fewer than two waypoints.
    pub fn from_edge(edge: &EdgeElement) -> Option<Self> {
        let points = waypoints_of(edge);
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            element_id: edge.id(),
            points: points.to_vec(),
            stroke: StrokeDefinition::default(),
            marker_end: Some(MarkerDefinition::arrowhead().url()),
        })
    }

    /// The DI record's id.
    pub fn element_id(&self) -> Option<Id> {
        self.element_id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn marker_end(&self) -> Option<&str> {
        self.marker_end.as_deref()
    }

    /// SVG path data, e.g. `M100,120L150,120L150,200`.
    pub fn path_data(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let command = if index == 0 { 'M' } else { 'L' };
                format!("{command}{},{}", point.x(), point.y())
            })
            .collect()
    }
}

/// A translated group holding one shape's primitives in local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGroup {
    layer: RenderLayer,
    element_id: Option<Id>,
    origin: Point,
    primitives: Vec<Primitive>,
}

impl ShapeGroup {
    /// The layer this group belongs to. Its name doubles as the group's class.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    pub fn class(&self) -> &'static str {
        self.layer.name()
    }

    /// The DI record's id.
    pub fn element_id(&self) -> Option<Id> {
        self.element_id
    }

    /// Top-left corner of the DI bounds; the group is translated here.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The `transform` attribute value.
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.origin.x(), self.origin.y())
    }
}

/// One instruction of a draw plan.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Edge(EdgePath),
    Group(ShapeGroup),
}

impl DrawCommand {
    pub fn layer(&self) -> RenderLayer {
        match self {
            Self::Edge(_) => RenderLayer::Edge,
            Self::Group(group) => group.layer(),
        }
    }
}

/// The root canvas every pass draws into.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    viewport: Size,
    background: Option<Color>,
}

impl Canvas {
    pub fn new(viewport: Size, background: Option<Color>) -> Self {
        Self {
            viewport,
            background,
        }
    }

    /// Builds the canvas described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BpmnViewError::Config`] when the canvas size or the
    /// background color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, BpmnViewError> {
        let viewport = config.canvas().viewport().map_err(BpmnViewError::Config)?;
        let background = config
            .style()
            .background_color()
            .map_err(BpmnViewError::Config)?;
        Ok(Self::new(viewport, background))
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Clears `surface` and sets up an empty canvas with the shared marker.
    pub fn prepare<S: Surface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.clear();
        surface.create_canvas(self.viewport, self.background);
        surface.define_marker(&MarkerDefinition::arrowhead())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Size::new(800.0, 600.0), None)
    }
}

/// An immutable, ordered list of draw commands for one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    canvas: Canvas,
    commands: Vec<DrawCommand>,
}

impl DrawPlan {
    /// Plans the scene for `model`.
    ///
    /// Edges with fewer than two waypoints and shapes without bounds are
    /// left out; neither aborts the plan.
    pub fn from_model(model: &DiagramModel, canvas: Canvas) -> Self {
        let mut output = LayeredOutput::new();

        for edge in model.edges() {
            match EdgePath::from_edge(edge) {
                Some(path) => output.add_to_layer(RenderLayer::Edge, DrawCommand::Edge(path)),
                None => trace!(edge_id:? = edge.id(); "Edge has fewer than two waypoints"),
            }
        }
        for shape in model.containers() {
            if let Some(group) = plan_shape(shape, RenderLayer::Container) {
                output.add_to_layer(RenderLayer::Container, DrawCommand::Group(group));
            }
        }
        for shape in model.nodes() {
            if let Some(group) = plan_shape(shape, RenderLayer::Node) {
                output.add_to_layer(RenderLayer::Node, DrawCommand::Group(group));
            }
        }

        let commands: Vec<DrawCommand> = output
            .into_ordered()
            .into_iter()
            .map(|(_, command)| command)
            .collect();
        debug!(commands = commands.len(); "Draw plan built");

        Self { canvas, commands }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clears `surface`, prepares the canvas and draws the plan.
    ///
    /// # Errors
    ///
    /// Propagates the surface's errors.
    pub fn apply<S: Surface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        self.canvas.prepare(surface)?;
        self.draw(surface)
    }

    /// Issues the plan's commands on an already prepared surface.
    ///
    /// # Errors
    ///
    /// Propagates the surface's errors, e.g. [`SurfaceError::NoCanvas`].
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        for command in &self.commands {
            match command {
                DrawCommand::Edge(edge) => surface.draw_edge(edge)?,
                DrawCommand::Group(group) => surface.draw_group(group)?,
            }
        }
        Ok(())
    }
}

fn plan_shape(shape: &ModelShape, layer: RenderLayer) -> Option<ShapeGroup> {
    let bounds = match bounds_of(shape.shape()) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!(type_name = shape.type_name(); "Skipping shape: {err}");
            return None;
        }
    };

    let definition = dispatch::shape_definition(shape);
    Some(ShapeGroup {
        layer,
        element_id: shape.shape().id(),
        origin: bounds.top_left(),
        primitives: definition.render(bounds.size(), shape.name()),
    })
}
