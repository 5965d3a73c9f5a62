//! The ParseError type for wrapping fatal parsing diagnostics.

use std::fmt;

use crate::error::Diagnostic;

/// Error returned when the XML cannot be turned into a BPMN document.
///
/// Wraps one or more diagnostics. Warnings collected before the failure are
/// kept so callers can show the full picture.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The first diagnostic with error severity, if any.
    pub fn primary(&self) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.severity().is_error())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.primary().or(self.diagnostics.first()) {
            write!(f, "{}", first.message())?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::error("no root").with_code(ErrorCode::E001).into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.to_string(), "no root");
    }

    #[test]
    fn test_parse_error_display_prefers_first_error() {
        let err: ParseError = vec![
            Diagnostic::warning("duplicate id"),
            Diagnostic::error("root element is not `definitions`"),
        ]
        .into();

        assert_eq!(
            err.to_string(),
            "root element is not `definitions` (+1 more)"
        );
        assert!(err.primary().is_some_and(|d| d.severity().is_error()));
    }
}
