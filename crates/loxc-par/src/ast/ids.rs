//! Expression node identity (spec §9 "Expression identity as side-table
//! key"): every `Expr` gets a parser-assigned id so the resolver can key
//! its locals table by node identity rather than structural content.

use loxc_util::Idx;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

impl Idx for ExprId {
    fn from_usize(idx: usize) -> Self {
        ExprId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Hands out monotonically increasing `ExprId`s, one per expression node
/// built during a parse.
#[derive(Default)]
pub struct ExprIdGen {
    next: u32,
}

impl ExprIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ExprId {
        let id = ExprId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut gen = ExprIdGen::new();
        assert_eq!(gen.next_id(), ExprId(0));
        assert_eq!(gen.next_id(), ExprId(1));
    }
}
