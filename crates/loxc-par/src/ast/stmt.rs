//! Statement AST (spec §3 "AST — Statement variants").

use std::rc::Rc;

use loxc_lex::Token;

use super::expr::Expr;

/// A function declaration's shape, shared by reference: a runtime
/// `Function` value (spec §3) holds `Rc<FunctionDecl>` plus its captured
/// closure environment, and a class's method table holds one per method.
#[derive(Clone, Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug)]
pub struct ClassDecl {
    pub name: Token,
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionDecl>>,
}

#[derive(Clone, Debug)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
    Class(Rc<ClassDecl>),
}
