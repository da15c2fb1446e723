//! Resolver core: scope stack management and the public entry point.

use loxc_par::Stmt;
use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::error::ResolveError;
use crate::locals::Locals;
use crate::scope::Scopes;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum FunctionKind {
    None,
    Function,
    Method,
    Initializer,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClassKind {
    None,
    Class,
    Subclass,
}

/// Static pre-pass over the AST (spec §4.3): computes a lexical-scope
/// distance for every variable reference and enforces the language's
/// static rules (no self-referential initializers, no duplicate locals,
/// `return`/`this`/`super` only where they're legal).
///
/// Diagnostics accumulate on the shared [`Handler`] rather than aborting
/// the walk at the first one, so — like the lexer and parser — one run
/// can surface more than a single static error.
pub struct Resolver<'a> {
    pub(crate) scopes: Scopes,
    pub(crate) locals: Locals,
    pub(crate) handler: &'a Handler,
    pub(crate) current_function: FunctionKind,
    pub(crate) current_class: ClassKind,
}

/// Resolves `stmts`, reporting any static errors to `handler`, and
/// returns the completed locals side table.
pub fn resolve(stmts: &[Stmt], handler: &Handler) -> Locals {
    let mut resolver = Resolver {
        scopes: Scopes::new(),
        locals: Locals::new(),
        handler,
        current_function: FunctionKind::None,
        current_class: ClassKind::None,
    };
    resolver.resolve_stmts(stmts);
    resolver.locals
}

impl<'a> Resolver<'a> {
    pub(crate) fn resolve_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.resolve_stmt(stmt);
        }
    }

    /// Declares `name` in the innermost scope, reporting a duplicate-local
    /// error if it shadows a binding already declared (not just defined)
    /// there.
    pub(crate) fn declare(&mut self, name: &str, line: u32) {
        if !self.scopes.declare(name) {
            self.report(ResolveError::DuplicateLocal { name: name.to_string(), line });
        }
    }

    pub(crate) fn define(&mut self, name: &str) {
        self.scopes.define(name);
    }

    pub(crate) fn report(&self, err: ResolveError) {
        let code = match err {
            ResolveError::SelfReferentialInitializer { .. } => {
                DiagnosticCode::E_RESOLVE_SELF_REFERENTIAL_INIT
            }
            ResolveError::DuplicateLocal { .. } => DiagnosticCode::E_RESOLVE_DUPLICATE_LOCAL,
            ResolveError::ReturnOutsideFunction { .. } => {
                DiagnosticCode::E_RESOLVE_RETURN_OUTSIDE_FUNCTION
            }
            ResolveError::ReturnValueFromInitializer { .. } => {
                DiagnosticCode::E_RESOLVE_RETURN_VALUE_FROM_INIT
            }
            ResolveError::ThisOutsideClass { .. } => DiagnosticCode::E_RESOLVE_THIS_OUTSIDE_CLASS,
            ResolveError::SuperOutsideClass { .. } | ResolveError::SuperWithoutSuperclass { .. } => {
                DiagnosticCode::E_RESOLVE_SUPER_MISUSE
            }
            ResolveError::ClassInheritsSelf { .. } => DiagnosticCode::E_RESOLVE_CLASS_INHERITS_SELF,
        };
        let span = Span::new(0, 0, err.line());
        DiagnosticBuilder::error(err.to_string()).span(span).code(code).emit(self.handler);
    }
}
