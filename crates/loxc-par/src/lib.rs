//! loxc-par - AST definitions and the recursive-descent parser
//! (spec §3, §4.2).

mod ast;
mod error;
mod parser;

pub use ast::{
    BinaryOp, ClassDecl, Expr, ExprId, ExprIdGen, ExprKind, FunctionDecl, LiteralValue, LogicalOp,
    Stmt, UnaryOp,
};
pub use error::ParseError;
pub use parser::Parser;

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::Lexer;
    use loxc_util::Handler;

    fn parse(source: &str) -> (Vec<Stmt>, bool) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).scan_tokens();
        let stmts = Parser::new(tokens, &handler).parse();
        (stmts, handler.has_errors())
    }

    #[test]
    fn parses_print_statement() {
        let (stmts, had_errors) = parse("print 1 + 2;");
        assert!(!had_errors);
        assert_eq!(stmts.len(), 1);
        assert!(matches!(stmts[0], Stmt::Print(_)));
    }

    #[test]
    fn precedence_climbs_correctly() {
        // 1 + 2 * 3 should parse as 1 + (2 * 3), not (1 + 2) * 3.
        let (stmts, _) = parse("1 + 2 * 3;");
        let Stmt::Expression(expr) = &stmts[0] else {
            panic!("expected expression statement");
        };
        match &expr.kind {
            ExprKind::Binary { op: BinaryOp::Add, right, .. } => {
                assert!(matches!(right.kind, ExprKind::Binary { op: BinaryOp::Multiply, .. }));
            }
            other => panic!("expected top-level '+', got {other:?}"),
        }
    }

    #[test]
    fn assignment_is_right_associative_and_targets_variable() {
        let (stmts, had_errors) = parse("a = b = 1;");
        assert!(!had_errors);
        let Stmt::Expression(expr) = &stmts[0] else {
            panic!("expected expression statement");
        };
        assert!(matches!(expr.kind, ExprKind::Assign { .. }));
    }

    #[test]
    fn invalid_assignment_target_is_an_error() {
        let (_, had_errors) = parse("1 = 2;");
        assert!(had_errors);
    }

    #[test]
    fn for_loop_desugars_to_while_in_block() {
        let (stmts, had_errors) = parse("for (var i = 0; i < 3; i = i + 1) print i;");
        assert!(!had_errors);
        let Stmt::Block(inner) = &stmts[0] else {
            panic!("expected desugared for-loop block");
        };
        assert!(matches!(inner[0], Stmt::Var { .. }));
        assert!(matches!(inner[1], Stmt::While { .. }));
    }

    #[test]
    fn class_with_superclass_and_methods() {
        let (stmts, had_errors) = parse("class B < A { greet() { print \"hi\"; } }");
        assert!(!had_errors);
        let Stmt::Class(class) = &stmts[0] else {
            panic!("expected class declaration");
        };
        assert!(class.superclass.is_some());
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name.lexeme, "greet");
    }

    #[test]
    fn class_may_syntactically_inherit_itself() {
        // Self-inheritance is a resolver error (spec §4.3), not a syntax
        // error, so the parser accepts it here.
        let (_, had_errors) = parse("class A < A {}");
        assert!(!had_errors);
    }

    #[test]
    fn parser_accumulates_multiple_errors() {
        let handler = Handler::new();
        let tokens = Lexer::new("var; var; var;", &handler).scan_tokens();
        Parser::new(tokens, &handler).parse();
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn arity_cap_reports_but_does_not_abort_at_255() {
        let args: Vec<String> = (0..255).map(|i| i.to_string()).collect();
        let src = format!("f({});", args.join(", "));
        let (_, had_errors) = parse(&src);
        assert!(!had_errors);
    }

    #[test]
    fn arity_cap_errors_at_256() {
        let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        let src = format!("f({});", args.join(", "));
        let (_, had_errors) = parse(&src);
        assert!(had_errors);
    }
}
