//! Error adapter for converting BpmnViewError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`bpmnview_parser::error::ParseError`] contains multiple diagnostics,
//! each diagnostic is rendered independently against the XML source.
//!
//! # Warnings
//!
//! Import warnings go through the same [`DiagnosticAdapter`], see
//! [`render_warning`].

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, SourceSpan,
};

use bpmnview::BpmnViewError;
use bpmnview_parser::error::Diagnostic;

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// XML source for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`BpmnViewError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a BpmnViewError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BpmnViewError::Io(_) => "bpmnview::io",
            BpmnViewError::Parse { .. } => return None,
            BpmnViewError::NoDiagram => "bpmnview::no_diagram",
            BpmnViewError::NoPlaneElements => "bpmnview::no_plane_elements",
            BpmnViewError::Config(_) => "bpmnview::config",
            BpmnViewError::Export(_) => "bpmnview::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BpmnViewError::NoDiagram | BpmnViewError::NoPlaneElements => {
                "the file has no diagram interchange layout; save it from a BPMN modeler"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a parser [`Span`](bpmnview_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: bpmnview_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`BpmnViewError`] into a list of reportable errors.
///
/// For [`BpmnViewError::Parse`], this returns one [`Reportable`] for
/// each diagnostic in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &BpmnViewError) -> Vec<Reportable<'_>> {
    match err {
        BpmnViewError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render one import warning as a graphical report against `src`.
///
/// Falls back to the one-line message if the report cannot be written.
pub fn render_warning(warning: &Diagnostic, src: &str) -> String {
    let reporter = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut report = String::new();
    match reporter.render_report(&mut report, &DiagnosticAdapter::new(warning, src)) {
        Ok(()) => report,
        Err(_) => warning.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bpmnview_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("unexpected end of stream")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..5), "here")
            .with_help("check that every element is closed");
        let parse_err = ParseError::from(diag);
        let err = BpmnViewError::new_parse_error(parse_err, "<bpmn");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "unexpected end of stream");
                assert_eq!(d.code().unwrap().to_string(), "E001");
                assert!(d.source_code().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first error")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::error("second error")
                .with_code(ErrorCode::E002)
                .with_label(Span::new(10..15), "second"),
        ];
        let parse_err = ParseError::from(diags);
        let err = BpmnViewError::new_parse_error(parse_err, "source code here...");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second error");
    }

    #[test]
    fn test_document_level_error() {
        let err = BpmnViewError::NoDiagram;

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "No diagrams found in BPMN file.");
                assert_eq!(e.code().unwrap().to_string(), "bpmnview::no_diagram");
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning("unresolved reference")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..4), "not declared");
        let adapter = DiagnosticAdapter::new(&diag, "ref=");

        assert_eq!(adapter.severity(), Some(miette::Severity::Warning));
    }

    #[test]
    fn test_render_warning_shows_code_label_and_help() {
        let src = r#"<bpmndi:BPMNShape bpmnElement="Ghost"/>"#;
        let diag = Diagnostic::warning("`bpmnElement` refers to unknown element `Ghost`")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..src.len()), "unresolved reference")
            .with_help("no model element declares this id");

        let report = render_warning(&diag, src);

        assert!(report.contains("E100"));
        assert!(report.contains("unknown element `Ghost`"));
        assert!(report.contains("unresolved reference"));
        assert!(report.contains("no model element declares this id"));
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("duplicate id")
            .with_label(Span::new(0..5), "redeclared here")
            .with_secondary_label(Span::new(10..15), "first declared here");

        let adapter = DiagnosticAdapter::new(&diag, "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("first declared here"));
    }
}
