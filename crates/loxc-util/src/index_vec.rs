//! The typed-index key trait used by AST node ids.
//!
//! The parser hands out a fresh id to every expression node (see the
//! resolver's locals table, which is keyed by these ids rather than by
//! structural equality — two syntactically identical `a` references at
//! different use sites must never collide). `Idx` lets a newtype like
//! `ExprId` plug into that id space without smuggling a bare `usize`
//! through APIs that shouldn't know it's really an index.

/// A type usable as a typed index: a thin newtype over `u32`.
pub trait Idx: Copy + Eq {
    fn from_usize(idx: usize) -> Self;
    fn index(self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct TestId(u32);

    impl Idx for TestId {
        fn from_usize(idx: usize) -> Self {
            TestId(idx as u32)
        }
        fn index(self) -> usize {
            self.0 as usize
        }
    }

    #[test]
    fn from_usize_and_index_round_trip() {
        let id = TestId::from_usize(3);
        assert_eq!(id.index(), 3);
    }
}
