mod expr;
mod ids;
mod stmt;

pub use expr::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};
pub use ids::{ExprId, ExprIdGen};
pub use stmt::{ClassDecl, FunctionDecl, Stmt};
