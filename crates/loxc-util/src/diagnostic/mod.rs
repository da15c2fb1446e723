//! Diagnostic reporting infrastructure shared by every pipeline phase.
//!
//! The lexer and parser accumulate diagnostics on a shared [`Handler`] so a
//! single run can surface more than one syntax error (spec §7's
//! propagation policy); the resolver and interpreter use the same handler
//! but stop at the first error they emit.

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic message with severity and source location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;
        if self.span.line > 0 {
            write!(f, " (line {})", self.span.line)?;
        }
        Ok(())
    }
}

/// Accumulates diagnostics raised during one run of the pipeline.
///
/// Cheaply shared by `&Handler` across the lexer and parser (both only
/// ever append), matching `faxc_util::diagnostic::Handler`'s interior
/// mutability.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit_diagnostic(Diagnostic::error(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_ignores_warnings() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::new(Level::Warning, "unused", Span::DUMMY));
        assert!(!handler.has_errors());
        handler.error("boom", Span::DUMMY);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn clear_empties_diagnostics() {
        let handler = Handler::new();
        handler.error("boom", Span::DUMMY);
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn display_includes_line_when_known() {
        let diag = Diagnostic::error("oops", Span::new(0, 1, 7));
        assert_eq!(format!("{diag}"), "error: oops (line 7)");
    }
}
