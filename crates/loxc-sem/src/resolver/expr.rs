//! Expression resolution (spec §4.3 "Resolution walk for a reference").

use loxc_par::{Expr, ExprKind};

use super::core::{ClassKind, Resolver};
use crate::error::ResolveError;

impl<'a> Resolver<'a> {
    pub(crate) fn resolve_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Variable { name } => {
                if self.scopes.innermost_state(&name.lexeme) == Some(false) {
                    self.report(ResolveError::SelfReferentialInitializer {
                        name: name.lexeme.clone(),
                        line: name.line,
                    });
                }
                self.resolve_local(expr.id, &name.lexeme);
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value);
                self.resolve_local(expr.id, &name.lexeme);
            }
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Grouping { inner } => self.resolve_expr(inner),
            ExprKind::Literal { .. } => {}
            ExprKind::Unary { right, .. } => self.resolve_expr(right),
            ExprKind::Call { callee, args, .. } => {
                self.resolve_expr(callee);
                for arg in args {
                    self.resolve_expr(arg);
                }
            }
            ExprKind::Get { object, .. } => self.resolve_expr(object),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(object);
                self.resolve_expr(value);
            }
            ExprKind::This { keyword } => {
                if self.current_class == ClassKind::None {
                    self.report(ResolveError::ThisOutsideClass { line: keyword.line });
                    return;
                }
                self.resolve_local(expr.id, "this");
            }
            ExprKind::Super { keyword, .. } => {
                match self.current_class {
                    ClassKind::None => {
                        self.report(ResolveError::SuperOutsideClass { line: keyword.line });
                        return;
                    }
                    ClassKind::Class => {
                        self.report(ResolveError::SuperWithoutSuperclass { line: keyword.line });
                        return;
                    }
                    ClassKind::Subclass => {}
                }
                self.resolve_local(expr.id, "super");
            }
        }
    }

    /// Records the scope distance for `name` as seen from `id`'s use
    /// site, or records nothing if `name` isn't found in any tracked
    /// scope (the interpreter then falls back to globals, spec §4.4).
    fn resolve_local(&mut self, id: loxc_par::ExprId, name: &str) {
        if let Some(depth) = self.scopes.resolve_depth(name) {
            self.locals.insert(id, depth);
        }
    }
}
