//! The resolver's side table (spec §9 "Side table"): maps a variable
//! reference's [`ExprId`] to the number of enclosing scopes to skip to
//! find its declaration. An expression absent from the table has no
//! recorded depth and is resolved against globals at runtime.

use loxc_par::ExprId;
use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct Locals {
    depths: FxHashMap<ExprId, usize>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: ExprId, depth: usize) {
        self.depths.insert(id, depth);
    }

    pub fn get(&self, id: ExprId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}
