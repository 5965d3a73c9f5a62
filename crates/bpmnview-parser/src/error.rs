//! Error and diagnostic system for the BPMN parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating warnings
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, labeled byte ranges
//! of the XML source, and help text. Fatal diagnostics are wrapped in
//! [`ParseError`]; non-fatal ones are returned next to the parsed document.
//!
//! # Example
//!
//! ```
//! # use bpmnview_parser::error::{Diagnostic, ErrorCode};
//! # use bpmnview_parser::Span;
//!
//! let diag = Diagnostic::warning("duplicate id `Task_1`")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(120..160), "duplicate declared here")
//!     .with_secondary_label(Span::new(40..80), "first declared here")
//!     .with_help("element ids must be unique within a document");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
