//! Interpreter core: construction, globals, and the top-level
//! `interpret` entry point (spec §4.5).

use std::io::{self, Write};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use loxc_par::Stmt;
use loxc_sem::Locals;
use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::signal::Signal;
use crate::value::{NativeFunction, Value};

/// Walks a resolved AST against a chain of environments (spec §4.5).
///
/// `environment` is the "current register" the statement executor reads
/// and writes; `executeBlock` swaps it out for the block's duration and
/// unconditionally restores it afterward, on every exit path (spec §5
/// "Non-local control flow").
pub struct Interpreter {
    pub(crate) globals: Environment,
    pub(crate) environment: Environment,
    pub(crate) locals: Locals,
    pub(crate) out: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(locals: Locals) -> Self {
        Self::with_output(locals, Box::new(io::stdout()))
    }

    pub fn with_output(locals: Locals, out: Box<dyn Write>) -> Self {
        let globals = Environment::new();
        globals.define(
            "clock",
            Value::NativeFn(Rc::new(NativeFunction::new("clock", 0, |_interp, _args| {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis();
                Value::Number(millis as f64)
            }))),
        );

        Self { environment: globals.clone(), globals, locals, out }
    }

    /// Executes `stmts` in source order. Halts and reports the first
    /// runtime error to `handler` (spec §7 propagation policy); a bare
    /// `return` escaping every call frame would be a resolver-invariant
    /// violation, not a reachable outcome, since `return` outside a
    /// function is rejected statically (spec §4.3).
    pub fn interpret(&mut self, stmts: &[Stmt], handler: &Handler) -> Result<(), RuntimeError> {
        for stmt in stmts {
            match self.execute(stmt) {
                Ok(()) => {}
                Err(Signal::Error(err)) => {
                    self.report(&err, handler);
                    return Err(err);
                }
                Err(Signal::Return(_)) => {
                    unreachable!("resolver rejects 'return' outside a function body")
                }
            }
        }
        Ok(())
    }

    fn report(&self, err: &RuntimeError, handler: &Handler) {
        let code = match err {
            RuntimeError::TypeMismatch { .. } => DiagnosticCode::E_RUNTIME_TYPE_MISMATCH,
            RuntimeError::UndefinedVariable { .. } => DiagnosticCode::E_RUNTIME_UNDEFINED_VARIABLE,
            RuntimeError::NotCallable { .. } => DiagnosticCode::E_RUNTIME_NOT_CALLABLE,
            RuntimeError::ArityMismatch { .. } => DiagnosticCode::E_RUNTIME_ARITY_MISMATCH,
            RuntimeError::NotAnInstance { .. } => DiagnosticCode::E_RUNTIME_NOT_AN_INSTANCE,
            RuntimeError::UndefinedProperty { .. } => DiagnosticCode::E_RUNTIME_UNDEFINED_PROPERTY,
            RuntimeError::UndefinedSuperMethod { .. } => {
                DiagnosticCode::E_RUNTIME_UNDEFINED_SUPER_METHOD
            }
        };
        let span = Span::new(0, 0, err.line());
        DiagnosticBuilder::error(err.to_string()).span(span).code(code).emit(handler);
    }

    /// Runs `stmts` against `new_env`, restoring the previous current
    /// environment on every exit path — a returned signal or runtime
    /// error included (spec §5).
    pub(crate) fn execute_block(&mut self, stmts: &[Stmt], new_env: Environment) -> Result<(), Signal> {
        let previous = std::mem::replace(&mut self.environment, new_env);
        let mut result = Ok(());
        for stmt in stmts {
            if let Err(signal) = self.execute(stmt) {
                result = Err(signal);
                break;
            }
        }
        self.environment = previous;
        result
    }
}
