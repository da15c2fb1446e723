//! Statement execution (spec §4.5 "Statement semantics").

use std::io::Write;
use std::rc::Rc;

use loxc_par::{ClassDecl, Stmt};
use rustc_hash::FxHashMap;

use super::core::Interpreter;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::signal::Signal;
use crate::value::{LoxClass, LoxFunction, Value};

impl Interpreter {
    pub(crate) fn execute(&mut self, stmt: &Stmt) -> Result<(), Signal> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let _ = writeln!(self.out, "{}", value.display());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.define(&name.lexeme, value);
                Ok(())
            }
            Stmt::Block(stmts) => {
                let block_env = Environment::with_enclosing(self.environment.clone());
                self.execute_block(stmts, block_env)
            }
            Stmt::If { cond, then_branch, else_branch } => {
                if self.evaluate(cond)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { cond, body } => {
                while self.evaluate(cond)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
            Stmt::Function(decl) => {
                let function = LoxFunction::new(decl.clone(), self.environment.clone(), false);
                self.environment.define(&decl.name.lexeme, Value::Function(Rc::new(function)));
                Ok(())
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Err(Signal::Return(value))
            }
            Stmt::Class(class) => self.execute_class(class),
        }
    }

    fn execute_class(&mut self, class: &ClassDecl) -> Result<(), Signal> {
        // Defined before the superclass expression evaluates so a method
        // body can reference the class by name (spec §4.5).
        self.environment.define(&class.name.lexeme, Value::Nil);

        let superclass = match &class.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                match value {
                    Value::Class(class) => Some(class),
                    _ => {
                        return Err(RuntimeError::TypeMismatch {
                            message: "superclass must be a class".to_string(),
                            line: expr.span.line,
                        }
                        .into())
                    }
                }
            }
            None => None,
        };

        let mut method_env = self.environment.clone();
        if let Some(superclass) = &superclass {
            method_env = Environment::with_enclosing(method_env);
            method_env.define("super", Value::Class(superclass.clone()));
        }

        let mut methods = FxHashMap::default();
        for method in &class.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = LoxFunction::new(method.clone(), method_env.clone(), is_initializer);
            methods.insert(method.name.lexeme.clone(), Rc::new(function));
        }

        let lox_class = LoxClass::new(class.name.lexeme.clone(), superclass, methods);
        self.environment
            .assign(&class.name.lexeme, Value::Class(Rc::new(lox_class)), class.name.line)?;
        Ok(())
    }
}
