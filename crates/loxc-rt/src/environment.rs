//! Chained scope environments (spec §4.4, §9 "Environment chains and
//! closures").
//!
//! Each `Environment` is a cheap handle (`Rc<RefCell<..>>`) onto a node
//! in a tree rooted at the interpreter's globals. A child only ever
//! points at an already-existing parent, so the graph is acyclic by
//! construction and plain reference counting is enough to reclaim it —
//! no cycle collector needed.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::RuntimeError;
use crate::value::Value;

#[derive(Debug)]
struct EnvironmentData {
    enclosing: Option<Environment>,
    bindings: FxHashMap<String, Value>,
}

#[derive(Clone, Debug)]
pub struct Environment(Rc<RefCell<EnvironmentData>>);

impl Environment {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            enclosing: None,
            bindings: FxHashMap::default(),
        })))
    }

    pub fn with_enclosing(enclosing: Environment) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentData {
            enclosing: Some(enclosing),
            bindings: FxHashMap::default(),
        })))
    }

    /// Unconditionally binds `name` in this scope, shadowing any existing
    /// binding of the same name here.
    pub fn define(&self, name: &str, value: Value) {
        self.0.borrow_mut().bindings.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str, line: u32) -> Result<Value, RuntimeError> {
        let data = self.0.borrow();
        if let Some(value) = data.bindings.get(name) {
            return Ok(value.clone());
        }
        match &data.enclosing {
            Some(parent) => parent.get(name, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(), line }),
        }
    }

    pub fn assign(&self, name: &str, value: Value, line: u32) -> Result<(), RuntimeError> {
        let mut data = self.0.borrow_mut();
        if data.bindings.contains_key(name) {
            data.bindings.insert(name.to_string(), value);
            return Ok(());
        }
        match &data.enclosing {
            Some(parent) => parent.assign(name, value, line),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(), line }),
        }
    }

    fn ancestor(&self, distance: usize) -> Environment {
        let mut env = self.clone();
        for _ in 0..distance {
            let next = env
                .0
                .borrow()
                .enclosing
                .clone()
                .expect("resolver-recorded distance must stay within the environment chain");
            env = next;
        }
        env
    }

    /// Reads `name` after walking exactly `distance` enclosing scopes.
    /// The resolver guarantees the binding exists there (spec §4.4); a
    /// missing binding at that depth is an interpreter bug, not a
    /// language error, so this panics rather than returning `Result`.
    pub fn get_at(&self, distance: usize, name: &str) -> Value {
        self.ancestor(distance)
            .0
            .borrow()
            .bindings
            .get(name)
            .cloned()
            .expect("resolver guarantees the binding exists at this depth")
    }

    pub fn assign_at(&self, distance: usize, name: &str, value: Value) {
        self.ancestor(distance).0.borrow_mut().bindings.insert(name.to_string(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_then_get_round_trips() {
        let env = Environment::new();
        env.define("a", Value::Number(1.0));
        assert_eq!(env.get("a", 1), Ok(Value::Number(1.0)));
    }

    #[test]
    fn get_falls_through_to_enclosing() {
        let outer = Environment::new();
        outer.define("a", Value::Number(1.0));
        let inner = Environment::with_enclosing(outer);
        assert_eq!(inner.get("a", 1), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_requires_existing_binding() {
        let env = Environment::new();
        assert!(env.assign("missing", Value::Nil, 1).is_err());
    }

    #[test]
    fn assign_writes_through_to_enclosing_scope() {
        let outer = Environment::new();
        outer.define("a", Value::Number(1.0));
        let inner = Environment::with_enclosing(outer.clone());
        inner.assign("a", Value::Number(2.0), 1).unwrap();
        assert_eq!(outer.get("a", 1), Ok(Value::Number(2.0)));
    }

    #[test]
    fn define_shadows_within_same_scope() {
        let env = Environment::new();
        env.define("a", Value::Number(1.0));
        env.define("a", Value::Number(2.0));
        assert_eq!(env.get("a", 1), Ok(Value::Number(2.0)));
    }

    #[test]
    fn get_at_and_assign_at_use_distance_directly() {
        let outer = Environment::new();
        outer.define("a", Value::Number(1.0));
        let inner = Environment::with_enclosing(outer);
        assert_eq!(inner.get_at(1, "a"), Value::Number(1.0));
        inner.assign_at(1, "a", Value::Number(5.0));
        assert_eq!(inner.get_at(1, "a"), Value::Number(5.0));
    }
}
