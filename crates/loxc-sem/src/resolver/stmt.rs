//! Statement resolution (spec §4.3).

use loxc_par::{FunctionDecl, Stmt};

use super::core::{ClassKind, FunctionKind, Resolver};
use crate::error::ResolveError;

impl<'a> Resolver<'a> {
    pub(crate) fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) | Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var { name, initializer } => {
                self.declare(&name.lexeme, name.line);
                if let Some(init) = initializer {
                    self.resolve_expr(init);
                }
                self.define(&name.lexeme);
            }
            Stmt::Block(stmts) => {
                self.scopes.begin_scope();
                self.resolve_stmts(stmts);
                self.scopes.end_scope();
            }
            Stmt::If { cond, then_branch, else_branch } => {
                self.resolve_expr(cond);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { cond, body } => {
                self.resolve_expr(cond);
                self.resolve_stmt(body);
            }
            Stmt::Function(decl) => {
                self.declare(&decl.name.lexeme, decl.name.line);
                self.define(&decl.name.lexeme);
                self.resolve_function(decl, FunctionKind::Function);
            }
            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionKind::None {
                    self.report(ResolveError::ReturnOutsideFunction { line: keyword.line });
                }
                if let Some(value) = value {
                    if self.current_function == FunctionKind::Initializer {
                        self.report(ResolveError::ReturnValueFromInitializer { line: keyword.line });
                    }
                    self.resolve_expr(value);
                }
            }
            Stmt::Class(class) => self.resolve_class(class),
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionKind) {
        let enclosing_function = self.current_function;
        self.current_function = kind;

        self.scopes.begin_scope();
        for param in &decl.params {
            self.declare(&param.lexeme, param.line);
            self.define(&param.lexeme);
        }
        self.resolve_stmts(&decl.body);
        self.scopes.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_class(&mut self, class: &loxc_par::ClassDecl) {
        let enclosing_class = self.current_class;
        self.current_class = ClassKind::Class;

        self.declare(&class.name.lexeme, class.name.line);
        self.define(&class.name.lexeme);

        if let Some(superclass) = &class.superclass {
            if let loxc_par::ExprKind::Variable { name } = &superclass.kind {
                if name.lexeme == class.name.lexeme {
                    self.report(ResolveError::ClassInheritsSelf { line: class.name.line });
                }
            }
            self.current_class = ClassKind::Subclass;
            self.resolve_expr(superclass);

            self.scopes.begin_scope();
            self.scopes.declare("super");
            self.scopes.define("super");
        }

        self.scopes.begin_scope();
        self.scopes.declare("this");
        self.scopes.define("this");

        for method in &class.methods {
            let kind = if method.name.lexeme == "init" {
                FunctionKind::Initializer
            } else {
                FunctionKind::Method
            };
            self.resolve_function(method, kind);
        }

        self.scopes.end_scope(); // "this"
        if class.superclass.is_some() {
            self.scopes.end_scope(); // "super"
        }

        self.current_class = enclosing_class;
    }
}
