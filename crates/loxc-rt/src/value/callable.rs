//! Callable runtime values (spec §3 `Function (runtime)`, §4.5 "Call").

use std::rc::Rc;

use loxc_par::FunctionDecl;

use super::class::InstanceCell;
use super::Value;
use crate::environment::Environment;
use crate::interpreter::Interpreter;
use crate::signal::Signal;

/// Uniform call interface shared by user functions, classes (as their own
/// constructor), and native built-ins, so `Call` expressions dispatch
/// through one path regardless of which kind of value they're calling.
pub trait Callable: std::fmt::Debug {
    fn arity(&self) -> usize;
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, Signal>;
}

/// A user-defined function or method. Its closure is captured at
/// definition site (spec §3); calling it creates a fresh environment one
/// level inside that closure, binds parameters, then executes the body
/// as a block.
#[derive(Debug)]
pub struct LoxFunction {
    pub declaration: Rc<FunctionDecl>,
    pub closure: Environment,
    pub is_initializer: bool,
}

impl LoxFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Environment, is_initializer: bool) -> Self {
        Self { declaration, closure, is_initializer }
    }

    /// Produces a fresh function whose closure adds one scope defining
    /// `this` → `instance` over the original closure (spec's "Binding"
    /// glossary entry). The original closure is untouched, so repeated
    /// access to the same method never accumulates scopes.
    pub fn bind(&self, instance: Rc<InstanceCell>) -> LoxFunction {
        let env = Environment::with_enclosing(self.closure.clone());
        env.define("this", Value::Instance(instance));
        LoxFunction::new(self.declaration.clone(), env, self.is_initializer)
    }
}

impl Callable for LoxFunction {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, Signal> {
        let env = Environment::with_enclosing(self.closure.clone());
        for (param, arg) in self.declaration.params.iter().zip(args) {
            env.define(&param.lexeme, arg);
        }

        log::trace!("entering function '{}'", self.declaration.name.lexeme);
        let result = interpreter.execute_block(&self.declaration.body, env);
        log::trace!("leaving function '{}'", self.declaration.name.lexeme);

        match result {
            Ok(()) if self.is_initializer => Ok(self.closure.get_at(0, "this")),
            Ok(()) => Ok(Value::Nil),
            Err(Signal::Return(_)) if self.is_initializer => Ok(self.closure.get_at(0, "this")),
            Err(Signal::Return(value)) => Ok(value),
            Err(err @ Signal::Error(_)) => Err(err),
        }
    }
}

/// A built-in exposed in globals (spec §6), e.g. `clock`.
pub struct NativeFunction {
    pub name: String,
    arity: usize,
    func: Box<dyn Fn(&mut Interpreter, &[Value]) -> Value>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        func: impl Fn(&mut Interpreter, &[Value]) -> Value + 'static,
    ) -> Self {
        Self { name: name.into(), arity, func: Box::new(func) }
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Result<Value, Signal> {
        Ok((self.func)(interpreter, &args))
    }
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}
