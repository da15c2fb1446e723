//! The resolver's stack of block scopes (spec §4.3 "Scope stack").

use rustc_hash::FxHashMap;

/// Scopes nearer the top of the `Vec` are nearer the use site; the
/// global scope is never pushed here (top-level `var`s live in the
/// interpreter's globals environment instead, see spec §4.4).
#[derive(Default)]
pub struct Scopes {
    stack: Vec<FxHashMap<String, bool>>,
}

impl Scopes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_scope(&mut self) {
        self.stack.push(FxHashMap::default());
    }

    pub fn end_scope(&mut self) {
        self.stack.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Marks `name` as declared-but-not-yet-defined in the innermost
    /// scope. Returns `false` if `name` is already present there (a
    /// duplicate local declaration, spec §4.3).
    pub fn declare(&mut self, name: &str) -> bool {
        let Some(scope) = self.stack.last_mut() else {
            return true;
        };
        if scope.contains_key(name) {
            return false;
        }
        scope.insert(name.to_string(), false);
        true
    }

    /// Marks `name` as fully defined in the innermost scope.
    pub fn define(&mut self, name: &str) {
        if let Some(scope) = self.stack.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }

    /// `Some(false)` means `name` is declared but not yet defined in the
    /// innermost scope — reading it there is the self-referential
    /// initializer error (spec §4.3).
    pub fn innermost_state(&self, name: &str) -> Option<bool> {
        self.stack.last().and_then(|scope| scope.get(name).copied())
    }

    /// Distance from the top of the stack to the scope declaring `name`,
    /// searched top-down, or `None` if not found in any tracked scope.
    pub fn resolve_depth(&self, name: &str) -> Option<usize> {
        for (i, scope) in self.stack.iter().rev().enumerate() {
            if scope.contains_key(name) {
                return Some(i);
            }
        }
        None
    }
}
