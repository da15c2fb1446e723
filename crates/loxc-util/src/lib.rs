//! loxc-util - Shared infrastructure for the loxc pipeline crates.
//!
//! Holds the pieces every pipeline stage needs but none of them own:
//! source spans, the typed-index key trait for AST node ids, and the
//! diagnostic/error-reporting machinery used by the lexer, parser,
//! resolver, and interpreter alike.

mod diagnostic;
mod index_vec;
mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use index_vec::Idx;
pub use span::Span;
