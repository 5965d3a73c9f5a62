//! Error codes for the BPMN parser diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - XML and document structure errors (fatal)
//! - `E1xx` - Model and DI resolution problems (warnings)

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed XML.
    ///
    /// The input is not well-formed XML, or uses a DTD.
    E001,

    /// Not a BPMN document.
    ///
    /// The root element is not `definitions` in the BPMN 2.0 model namespace.
    E002,

    // =========================================================================
    // Resolution Warnings (E1xx)
    // =========================================================================
    /// Unresolved reference.
    ///
    /// A `bpmnElement` attribute names an id that no model element declares.
    E100,

    /// Duplicate id.
    ///
    /// Two model elements declare the same id; the first one wins.
    E101,

    /// Invalid attribute value.
    ///
    /// A numeric or boolean attribute could not be parsed, or is out of range.
    E102,

    /// Unknown DI element.
    ///
    /// A plane holds a record that is neither a shape nor an edge.
    E103,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed XML",
            ErrorCode::E002 => "not a BPMN document",
            ErrorCode::E100 => "unresolved reference",
            ErrorCode::E101 => "duplicate id",
            ErrorCode::E102 => "invalid attribute value",
            ErrorCode::E103 => "unknown DI element",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
