//! Interactive viewer.
//!
//! A [`Viewer`] owns a [`Surface`] and renders each document it is handed
//! into it, remembering the message of the last failure so a host can show
//! it next to the canvas.

use log::{error, info};

use crate::{
    config::AppConfig,
    error::BpmnViewError,
    model::{self, DiagramModel},
    scene::{Canvas, DrawPlan},
    surface::Surface,
};

/// Renders documents into a surface one at a time.
///
/// `load` borrows the viewer mutably, so a pass cannot start while another
/// is still running. Each pass clears the surface first, so the last
/// completed pass decides what is shown.
#[derive(Debug)]
pub struct Viewer<S: Surface> {
    surface: S,
    config: AppConfig,
    error: Option<String>,
}

impl<S: Surface> Viewer<S> {
    pub fn new(surface: S, config: AppConfig) -> Self {
        Self {
            surface,
            config,
            error: None,
        }
    }

    /// Message of the last failed `load`, cleared by the next one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gives the surface back, dropping the viewer.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Parses `xml` and renders its first diagram.
    ///
    /// When parsing fails the surface is left untouched, so the previous
    /// scene stays visible. When the document has no drawable diagram the
    /// surface is left with an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns the failure that stopped the pass; its message is also kept
    /// in [`Viewer::error`].
    pub fn load(&mut self, xml: &str) -> Result<(), BpmnViewError> {
        self.error = None;
        let result = self.render(xml);
        match &result {
            Ok(()) => info!("Diagram rendered"),
            Err(err) => {
                error!("Failed to render diagram: {err}");
                self.error = Some(err.to_string());
            }
        }
        result
    }

    fn render(&mut self, xml: &str) -> Result<(), BpmnViewError> {
        let document = model::parse(xml)?;
        let canvas = Canvas::from_config(&self.config)?;

        canvas.prepare(&mut self.surface)?;
        let model = DiagramModel::from_document(&document)?;
        DrawPlan::from_model(&model, canvas).draw(&mut self.surface)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SvgSurface;

    const TASK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL"
                  xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
                  xmlns:dc="http://www.omg.org/spec/DD/20100524/DC">
  <bpmn:process id="P">
    <bpmn:task id="T" name="Review"/>
  </bpmn:process>
  <bpmndi:BPMNDiagram id="D">
    <bpmndi:BPMNPlane id="PL" bpmnElement="P">
      <bpmndi:BPMNShape id="T_di" bpmnElement="T">
        <dc:Bounds x="10" y="20" width="100" height="80"/>
      </bpmndi:BPMNShape>
    </bpmndi:BPMNPlane>
  </bpmndi:BPMNDiagram>
</bpmn:definitions>"#;

    const NO_DIAGRAM: &str = r#"<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL">
  <bpmn:process id="P"/>
</bpmn:definitions>"#;

    fn viewer() -> Viewer<SvgSurface> {
        Viewer::new(SvgSurface::new(), AppConfig::default())
    }

    #[test]
    fn test_load_renders_and_clears_error() {
        let mut viewer = viewer();
        assert!(viewer.load("<broken").is_err());
        assert!(viewer.error().is_some());

        viewer.load(TASK).unwrap();
        assert!(viewer.error().is_none());
        assert!(viewer.surface().to_svg_string().unwrap().contains("Review"));
    }

    #[test]
    fn test_parse_failure_keeps_previous_scene() {
        let mut viewer = viewer();
        viewer.load(TASK).unwrap();
        let before = viewer.surface().to_svg_string();

        let err = viewer.load("<bpmn:definitions").unwrap_err();
        assert!(matches!(err, BpmnViewError::Parse { .. }));
        assert!(viewer.error().unwrap().starts_with("Failed to parse BPMN: "));
        assert_eq!(viewer.surface().to_svg_string(), before);
    }

    #[test]
    fn test_missing_diagram_leaves_empty_canvas() {
        let mut viewer = viewer();
        viewer.load(TASK).unwrap();

        let err = viewer.load(NO_DIAGRAM).unwrap_err();
        assert!(matches!(err, BpmnViewError::NoDiagram));
        assert_eq!(viewer.error(), Some("No diagrams found in BPMN file."));

        let rendered = viewer.surface().to_svg_string().unwrap();
        assert!(rendered.contains(r#"id="arrowhead""#));
        assert!(!rendered.contains("<g"));
    }

    #[test]
    fn test_invalid_background_is_reported() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"not-a-color\"").unwrap();
        let mut viewer = Viewer::new(SvgSurface::new(), config);

        let err = viewer.load(TASK).unwrap_err();
        assert!(matches!(err, BpmnViewError::Config(_)));
        assert!(!viewer.surface().has_canvas());
    }
}
