//! # BPMN Viewer Parser
//!
//! Reads BPMN 2.0 XML into the typed [`BpmnDocument`] model of
//! `bpmnview-core`: the semantic element table plus every diagram-interchange
//! (DI) diagram with its plane, shapes, edges, bounds and waypoints.
//!
//! Problems that make the input unusable (malformed XML, a root element that
//! is not BPMN `definitions`) fail with a [`ParseError`]. Everything else
//! (unresolved `bpmnElement` references, duplicate ids, unparsable bounds,
//! unknown DI records) becomes a warning [`error::Diagnostic`] returned next
//! to the document.
//!
//! ## Usage
//!
//! ```
//! # use bpmnview_parser::{from_xml, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL"
//!                   xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
//!                   xmlns:dc="http://www.omg.org/spec/DD/20100524/DC" id="defs">
//!   <bpmn:process id="Process_1">
//!     <bpmn:task id="Task_1" name="Review"/>
//!   </bpmn:process>
//!   <bpmndi:BPMNDiagram id="Diagram_1">
//!     <bpmndi:BPMNPlane id="Plane_1" bpmnElement="Process_1">
//!       <bpmndi:BPMNShape id="Task_1_di" bpmnElement="Task_1">
//!         <dc:Bounds x="10" y="20" width="100" height="80"/>
//!       </bpmndi:BPMNShape>
//!     </bpmndi:BPMNPlane>
//!   </bpmndi:BPMNDiagram>
//! </bpmn:definitions>"#;
//!
//!     let output = from_xml(xml)?;
//!     assert!(output.warnings().is_empty());
//!     assert_eq!(output.document().diagrams().len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! [`BpmnDocument`]: bpmnview_core::semantic::BpmnDocument

pub mod error;
pub mod namespace;
mod reader;
mod span;

pub use error::ParseError;
pub use reader::ParseOutput;
pub use span::Span;

use log::info;

/// Parse BPMN 2.0 XML into a document and its warnings.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not well-formed XML (including
/// documents with a DTD) or when the root element is not BPMN `definitions`.
pub fn from_xml(xml: &str) -> Result<ParseOutput, ParseError> {
    info!(bytes = xml.len(); "Reading BPMN XML");
    reader::read(xml)
}
