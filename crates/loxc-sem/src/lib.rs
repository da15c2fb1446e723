//! loxc-sem - the static resolver pass (spec §4.3).
//!
//! Walks the parser's AST once, annotating every variable reference with
//! a lexical-scope distance into the [`Locals`] side table and enforcing
//! the rules the interpreter assumes already hold (no reading a local in
//! its own initializer, `return` only inside a function body, and so on).

mod error;
mod locals;
mod resolver;
mod scope;

pub use error::ResolveError;
pub use locals::Locals;
pub use resolver::resolve;

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::Lexer;
    use loxc_par::{ExprKind, Parser, Stmt};
    use loxc_util::Handler;

    fn resolve_source(source: &str) -> (Locals, bool) {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).scan_tokens();
        let stmts = Parser::new(tokens, &handler).parse();
        let locals = resolve(&stmts, &handler);
        (locals, handler.has_errors())
    }

    #[test]
    fn block_scoped_variable_gets_a_depth() {
        let (locals, had_errors) = resolve_source("{ var a = 1; print a; }");
        assert!(!had_errors);
        assert_eq!(locals.len(), 1);
    }

    #[test]
    fn top_level_variable_reference_gets_no_depth() {
        let (locals, had_errors) = resolve_source("var a = 1; print a;");
        assert!(!had_errors);
        assert!(locals.is_empty());
    }

    #[test]
    fn self_referential_initializer_is_an_error() {
        let (_, had_errors) = resolve_source("{ var a = a; }");
        assert!(had_errors);
    }

    #[test]
    fn duplicate_local_declaration_is_an_error() {
        let (_, had_errors) = resolve_source("{ var a = 1; var a = 2; }");
        assert!(had_errors);
    }

    #[test]
    fn global_redeclaration_is_allowed() {
        let (_, had_errors) = resolve_source("var a = 1; var a = 2;");
        assert!(!had_errors);
    }

    #[test]
    fn return_outside_function_is_an_error() {
        let (_, had_errors) = resolve_source("return 1;");
        assert!(had_errors);
    }

    #[test]
    fn return_without_value_outside_function_is_still_an_error() {
        let (_, had_errors) = resolve_source("return;");
        assert!(had_errors);
    }

    #[test]
    fn return_value_from_initializer_is_an_error() {
        let src = "class A { init() { return 1; } }";
        let (_, had_errors) = resolve_source(src);
        assert!(had_errors);
    }

    #[test]
    fn bare_return_from_initializer_is_fine() {
        let src = "class A { init() { return; } }";
        let (_, had_errors) = resolve_source(src);
        assert!(!had_errors);
    }

    #[test]
    fn this_outside_class_is_an_error() {
        let (_, had_errors) = resolve_source("print this;");
        assert!(had_errors);
    }

    #[test]
    fn super_outside_class_is_an_error() {
        let (_, had_errors) = resolve_source("print super.foo;");
        assert!(had_errors);
    }

    #[test]
    fn super_without_superclass_is_an_error() {
        let src = "class A { m() { super.m(); } }";
        let (_, had_errors) = resolve_source(src);
        assert!(had_errors);
    }

    #[test]
    fn super_with_superclass_resolves_cleanly() {
        let src = "class A { m() { print 1; } } class B < A { m() { super.m(); } }";
        let (_, had_errors) = resolve_source(src);
        assert!(!had_errors);
    }

    #[test]
    fn class_inheriting_itself_is_an_error() {
        let (_, had_errors) = resolve_source("class A < A {}");
        assert!(had_errors);
    }

    #[test]
    fn closure_over_outer_local_gets_correct_depth() {
        let src = r#"
            function makeCounter() {
              var n = 0;
              function count() { n = n + 1; return n; }
              return count;
            }
        "#;
        let (locals, had_errors) = resolve_source(src);
        assert!(!had_errors);
        // Both the read of `n` (in `n = n + 1`, its right operand) and the
        // assignment target `n` get recorded depths.
        assert_eq!(locals.len(), 2);
    }

    #[test]
    fn method_body_this_gets_a_depth() {
        let src = "class A { m() { print this; } }";
        let handler = Handler::new();
        let tokens = Lexer::new(src, &handler).scan_tokens();
        let stmts = Parser::new(tokens, &handler).parse();
        let locals = resolve(&stmts, &handler);
        assert!(!handler.has_errors());

        let Stmt::Class(class) = &stmts[0] else { panic!("expected class") };
        let Stmt::Print(expr) = &class.methods[0].body[0] else { panic!("expected print") };
        assert!(matches!(expr.kind, ExprKind::This { .. }));
        assert_eq!(locals.get(expr.id), Some(1));
    }
}
