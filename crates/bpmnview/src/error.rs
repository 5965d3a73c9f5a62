//! Error types for BPMN rendering.
//!
//! This module provides the main error type [`BpmnViewError`] which wraps
//! the document-level failures that abort a render. Problems with a single
//! shape or edge never surface here; they are logged and the element is
//! skipped.

use std::io;

use thiserror::Error;

use bpmnview_parser::ParseError;

use crate::surface::SurfaceError;

/// The main error type for BPMN rendering.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the XML source next to the parser diagnostics so
/// callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum BpmnViewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse BPMN: {err}")]
    Parse { err: ParseError, src: String },

    #[error("No diagrams found in BPMN file.")]
    NoDiagram,

    #[error("No plane elements found.")]
    NoPlaneElements,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<SurfaceError> for BpmnViewError {
    fn from(error: SurfaceError) -> Self {
        Self::Export(Box::new(error))
    }
}

impl BpmnViewError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
