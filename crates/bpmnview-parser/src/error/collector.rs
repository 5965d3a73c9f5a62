//! Collector for accumulating warnings while reading a document.

use crate::error::Diagnostic;

/// Accumulates the non-fatal problems of one read so all of them are reported.
///
/// Fatal problems never reach the collector; the reader returns a
/// [`ParseError`](crate::error::ParseError) for them straight away.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    warnings: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a warning to this collector.
    pub fn emit(&mut self, warning: Diagnostic) {
        debug_assert!(warning.severity().is_warning());
        self.warnings.push(warning);
    }

    /// Finish collection, returning the warnings in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_empty_finish() {
        let warnings = DiagnosticCollector::new().finish();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_collector_warnings_are_returned_in_order() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::warning("warning 2"));

        let warnings = collector.finish();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].message(), "warning 1");
    }
}
