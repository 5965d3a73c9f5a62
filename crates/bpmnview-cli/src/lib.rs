//! CLI logic for the bpmnview renderer.
//!
//! Reads a BPMN 2.0 XML file, renders its first diagram and writes the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use bpmnview::{BpmnViewError, DiagramRenderer};

use error_adapter::render_warning;

/// Run the bpmnview CLI application
///
/// This function renders the input file's diagram and writes the resulting
/// SVG to the output file. Import warnings are reported against the source
/// and do not stop the render.
///
/// # Errors
///
/// Returns `BpmnViewError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - XML parsing errors
/// - Documents without a drawable diagram
pub fn run(args: &Args) -> Result<(), BpmnViewError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing BPMN file"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = DiagramRenderer::new(app_config);
    let (document, warnings) = renderer.parse_with_warnings(&source)?;
    for warning in &warnings {
        warn!("{}", render_warning(warning, &source));
    }
    let svg = renderer.render_svg(&document)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
