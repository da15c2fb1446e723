//! Runtime classes and instances (spec §3 `Class (runtime)`, `Instance`).

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::callable::{Callable, LoxFunction};
use super::Value;
use crate::interpreter::Interpreter;
use crate::signal::Signal;

/// A class's runtime shape: immutable once built. Method lookup walks
/// the `superclass` chain; `class X < X` is rejected by the resolver, so
/// this chain is guaranteed acyclic.
#[derive(Debug)]
pub struct LoxClass {
    pub name: String,
    pub superclass: Option<Rc<LoxClass>>,
    pub methods: FxHashMap<String, Rc<LoxFunction>>,
}

impl LoxClass {
    pub fn new(
        name: String,
        superclass: Option<Rc<LoxClass>>,
        methods: FxHashMap<String, Rc<LoxFunction>>,
    ) -> Self {
        Self { name, superclass, methods }
    }

    pub fn find_method(&self, name: &str) -> Option<Rc<LoxFunction>> {
        if let Some(method) = self.methods.get(name) {
            return Some(method.clone());
        }
        self.superclass.as_ref().and_then(|s| s.find_method(name))
    }

    /// A class's call arity is its `init` method's arity, or zero if it
    /// has none (spec §4.5 "Call").
    pub fn arity(&self) -> usize {
        self.find_method("init").map(|init| init.arity()).unwrap_or(0)
    }

    /// Constructs a new instance and, if an `init` method exists, runs it
    /// bound to that instance before returning it. Takes `self_rc`
    /// (rather than relying on the trait-object `Callable` path the way
    /// functions do) because the fresh `Instance` needs to hold the same
    /// `Rc<LoxClass>` identity the caller already has.
    pub fn instantiate(
        self_rc: &Rc<LoxClass>,
        interpreter: &mut Interpreter,
        args: Vec<Value>,
    ) -> Result<Value, Signal> {
        let instance = Rc::new(RefCell::new(Instance::new(self_rc.clone())));
        if let Some(init) = self_rc.find_method("init") {
            init.bind(instance.clone()).call(interpreter, args)?;
        }
        Ok(Value::Instance(instance))
    }
}

/// Backing cell for `Value::Instance`: mutable fields behind a class
/// reference that never changes once the instance is constructed.
pub type InstanceCell = RefCell<Instance>;

#[derive(Debug)]
pub struct Instance {
    pub class: Rc<LoxClass>,
    pub fields: FxHashMap<String, Value>,
}

impl Instance {
    pub fn new(class: Rc<LoxClass>) -> Self {
        Self { class, fields: FxHashMap::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_class(name: &str, superclass: Option<Rc<LoxClass>>) -> Rc<LoxClass> {
        Rc::new(LoxClass::new(name.to_string(), superclass, FxHashMap::default()))
    }

    #[test]
    fn find_method_walks_superclass_chain() {
        use crate::environment::Environment;
        use loxc_lex::{Token, TokenKind};
        use loxc_par::FunctionDecl;

        let decl = Rc::new(FunctionDecl {
            name: Token::new(TokenKind::Identifier, "greet", None, 1),
            params: vec![],
            body: vec![],
        });
        let mut methods = FxHashMap::default();
        methods.insert(
            "greet".to_string(),
            Rc::new(LoxFunction::new(decl, Environment::new(), false)),
        );
        let base = Rc::new(LoxClass::new("Base".to_string(), None, methods));
        let derived = empty_class("Derived", Some(base));

        assert!(derived.find_method("greet").is_some());
        assert!(derived.find_method("missing").is_none());
        assert_eq!(derived.arity(), 0);
    }
}
