//! loxc-rt - the tree-walking evaluator: environments, runtime values,
//! and the statement/expression interpreter (spec §3, §4.4, §4.5).

mod environment;
mod error;
mod interpreter;
mod signal;
mod sink;
mod value;

pub use environment::Environment;
pub use error::RuntimeError;
pub use interpreter::Interpreter;
pub use signal::Signal;
pub use sink::MemorySink;
pub use value::{Callable, Instance, InstanceCell, LoxClass, LoxFunction, NativeFunction, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::Lexer;
    use loxc_par::Parser;
    use loxc_sem::resolve;
    use loxc_util::Handler;

    /// Lexes, parses, resolves, and interprets `source`, returning
    /// everything written to the print sink. Panics if any phase
    /// reports a diagnostic, since every scenario below is valid Lox.
    fn run(source: &str) -> String {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).scan_tokens();
        let stmts = Parser::new(tokens, &handler).parse();
        assert!(!handler.has_errors(), "unexpected parse errors for: {source}");

        let locals = resolve(&stmts, &handler);
        assert!(!handler.has_errors(), "unexpected resolve errors for: {source}");

        let sink = MemorySink::new();
        let mut interpreter = Interpreter::with_output(locals, Box::new(sink.clone()));
        let result = interpreter.interpret(&stmts, &handler);
        assert!(result.is_ok(), "unexpected runtime error for: {source}: {result:?}");
        sink.contents()
    }

    /// Like [`run`], but returns whether interpretation raised an error
    /// instead of asserting success.
    fn run_expect_error(source: &str) -> bool {
        let handler = Handler::new();
        let tokens = Lexer::new(source, &handler).scan_tokens();
        let stmts = Parser::new(tokens, &handler).parse();
        assert!(!handler.has_errors());
        let locals = resolve(&stmts, &handler);
        assert!(!handler.has_errors());

        let sink = MemorySink::new();
        let mut interpreter = Interpreter::with_output(locals, Box::new(sink));
        interpreter.interpret(&stmts, &handler).is_err()
    }

    #[test]
    fn prints_arithmetic() {
        assert_eq!(run("print 1 + 2 * 3;"), "7\n");
    }

    #[test]
    fn string_concatenation_via_plus() {
        assert_eq!(run(r#"print "foo" + "bar";"#), "foobar\n");
    }

    #[test]
    fn plus_stringifies_non_string_operand() {
        assert_eq!(run(r#"print "count: " + 1;"#), "count: 1\n");
    }

    #[test]
    fn global_redeclaration_is_allowed() {
        let out = run(
            r#"
            var a = 1;
            var a = 2;
            print a;
            "#,
        );
        assert_eq!(out, "2\n");
    }

    #[test]
    fn block_scoping_shadows_then_restores() {
        let out = run(
            r#"
            var a = 1;
            {
                var a = 2;
                print a;
            }
            print a;
            "#,
        );
        assert_eq!(out, "2\n1\n");
    }

    #[test]
    fn closures_capture_their_defining_environment() {
        let out = run(
            r#"
            function makeCounter() {
                var count = 0;
                function increment() {
                    count = count + 1;
                    print count;
                }
                return increment;
            }
            var counter = makeCounter();
            counter();
            counter();
            "#,
        );
        assert_eq!(out, "1\n2\n");
    }

    #[test]
    fn while_loop_and_for_desugaring_agree() {
        let out = run(
            r#"
            for (var i = 0; i < 3; i = i + 1) {
                print i;
            }
            "#,
        );
        assert_eq!(out, "0\n1\n2\n");
    }

    #[test]
    fn if_else_selects_branch_on_truthiness() {
        let out = run(
            r#"
            if (nil) {
                print "then";
            } else {
                print "else";
            }
            "#,
        );
        assert_eq!(out, "else\n");
    }

    #[test]
    fn logical_and_or_short_circuit_and_return_operand() {
        let out = run(
            r#"
            print "hi" or 2;
            print false and "unreached";
            print nil or "fallback";
            "#,
        );
        assert_eq!(out, "hi\nfalse\nfallback\n");
    }

    #[test]
    fn classes_support_fields_methods_and_this() {
        let out = run(
            r#"
            class Greeter {
                init(name) {
                    this.name = name;
                }
                greet() {
                    print "hello, " + this.name;
                }
            }
            var g = Greeter("world");
            g.greet();
            "#,
        );
        assert_eq!(out, "hello, world\n");
    }

    #[test]
    fn inheritance_dispatches_and_super_reaches_base_method() {
        let out = run(
            r#"
            class Animal {
                speak() {
                    print "...";
                }
            }
            class Dog < Animal {
                speak() {
                    super.speak();
                    print "woof";
                }
            }
            Dog().speak();
            "#,
        );
        assert_eq!(out, "...\nwoof\n");
    }

    #[test]
    fn initializer_always_returns_this_even_with_bare_return() {
        let out = run(
            r#"
            class Box {
                init(value) {
                    this.value = value;
                    return;
                }
            }
            var b = Box(42);
            print b.value;
            "#,
        );
        assert_eq!(out, "42\n");
    }

    #[test]
    fn native_clock_is_callable_with_zero_arity() {
        let out = run("print clock() >= 0;");
        assert_eq!(out, "true\n");
    }

    #[test]
    fn calling_a_non_callable_value_is_a_runtime_error() {
        assert!(run_expect_error("var a = 1; a();"));
    }

    #[test]
    fn accessing_undefined_property_is_a_runtime_error() {
        assert!(run_expect_error("class A {} A().missing;"));
    }

    #[test]
    fn adding_number_and_bool_is_a_type_mismatch() {
        assert!(run_expect_error("print 1 + true;"));
    }

    #[test]
    fn calling_with_wrong_arity_is_a_runtime_error() {
        assert!(run_expect_error("function f(a, b) { return a + b; } f(1);"));
    }

    #[test]
    fn recursive_function_computes_factorial() {
        let out = run(
            r#"
            function fact(n) {
                if (n <= 1) return 1;
                return n * fact(n - 1);
            }
            print fact(5);
            "#,
        );
        assert_eq!(out, "120\n");
    }
}
