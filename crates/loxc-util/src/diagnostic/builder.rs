//! Fluent construction of [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Error, message, Span::DUMMY),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Warning, message, Span::DUMMY),
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_fields() {
        let diag = DiagnosticBuilder::error("bad token")
            .span(Span::new(0, 1, 3))
            .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
            .with_note("saw '@'")
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.span.line, 3);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_UNEXPECTED_CHAR));
        assert_eq!(diag.notes, vec!["saw '@'".to_string()]);
    }
}
