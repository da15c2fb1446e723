//! Expression evaluation (spec §4.5 "Expression semantics").

use loxc_par::{BinaryOp, Expr, ExprKind, LiteralValue, LogicalOp, UnaryOp};

use super::core::Interpreter;
use crate::error::RuntimeError;
use crate::signal::Signal;
use crate::value::Value;

impl Interpreter {
    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, Signal> {
        match &expr.kind {
            ExprKind::Literal { value } => Ok(literal_value(value)),
            ExprKind::Grouping { inner } => self.evaluate(inner),
            ExprKind::Unary { op, right } => self.eval_unary(*op, right, expr.span.line),
            ExprKind::Binary { left, op, right } => self.eval_binary(left, *op, right, expr.span.line),
            ExprKind::Logical { left, op, right } => self.eval_logical(left, *op, right),
            ExprKind::Variable { name } => self.lookup_variable(&name.lexeme, expr.id, name.line),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(value)?;
                match self.locals.get(expr.id) {
                    Some(depth) => self.environment.assign_at(depth, &name.lexeme, value.clone()),
                    None => self.globals.assign(&name.lexeme, value.clone(), name.line)?,
                }
                Ok(value)
            }
            ExprKind::Call { callee, paren, args } => {
                let callee_value = self.evaluate(callee)?;
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.evaluate(arg)?);
                }
                self.call_value(callee_value, arg_values, paren.line)
            }
            ExprKind::Get { object, name } => {
                let object = self.evaluate(object)?;
                self.get_property(object, &name.lexeme, name.line)
            }
            ExprKind::Set { object, name, value } => {
                let object = self.evaluate(object)?;
                let Value::Instance(instance) = object else {
                    return Err(RuntimeError::NotAnInstance { line: name.line }.into());
                };
                let value = self.evaluate(value)?;
                instance.borrow_mut().fields.insert(name.lexeme.clone(), value.clone());
                Ok(value)
            }
            ExprKind::This { keyword } => self.lookup_variable("this", expr.id, keyword.line),
            ExprKind::Super { method, .. } => self.eval_super(expr.id, &method.lexeme, method.line),
        }
    }

    fn lookup_variable(&self, name: &str, id: loxc_par::ExprId, line: u32) -> Result<Value, Signal> {
        match self.locals.get(id) {
            Some(depth) => Ok(self.environment.get_at(depth, name)),
            None => Ok(self.globals.get(name, line)?),
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, right: &Expr, line: u32) -> Result<Value, Signal> {
        let right = self.evaluate(right)?;
        match op {
            UnaryOp::Negate => match right {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::TypeMismatch {
                    message: "operand must be a number".to_string(),
                    line,
                }
                .into()),
            },
            UnaryOp::Not => Ok(Value::Bool(!right.is_truthy())),
        }
    }

    fn eval_logical(&mut self, left: &Expr, op: LogicalOp, right: &Expr) -> Result<Value, Signal> {
        let left = self.evaluate(left)?;
        match op {
            LogicalOp::Or if left.is_truthy() => Ok(left),
            LogicalOp::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(right),
        }
    }

    fn eval_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr, line: u32) -> Result<Value, Signal> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        let numbers = |l: &Value, r: &Value| match (l, r) {
            (Value::Number(a), Value::Number(b)) => Some((*a, *b)),
            _ => None,
        };

        match op {
            BinaryOp::Add => match numbers(&left, &right) {
                Some((a, b)) => Ok(Value::Number(a + b)),
                None if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) => {
                    Ok(Value::string(format!("{}{}", left.display(), right.display())))
                }
                None => Err(RuntimeError::TypeMismatch {
                    message: "operands must be two numbers, or one a string".to_string(),
                    line,
                }
                .into()),
            },
            BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo => {
                match numbers(&left, &right) {
                    Some((a, b)) => Ok(Value::Number(match op {
                        BinaryOp::Subtract => a - b,
                        BinaryOp::Multiply => a * b,
                        BinaryOp::Divide => a / b,
                        BinaryOp::Modulo => a % b,
                        _ => unreachable!(),
                    })),
                    None => Err(RuntimeError::TypeMismatch {
                        message: "operands must be numbers".to_string(),
                        line,
                    }
                    .into()),
                }
            }
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
                match numbers(&left, &right) {
                    Some((a, b)) => Ok(Value::Bool(match op {
                        BinaryOp::Less => a < b,
                        BinaryOp::LessEqual => a <= b,
                        BinaryOp::Greater => a > b,
                        BinaryOp::GreaterEqual => a >= b,
                        _ => unreachable!(),
                    })),
                    None => Err(RuntimeError::TypeMismatch {
                        message: "operands must be numbers".to_string(),
                        line,
                    }
                    .into()),
                }
            }
            BinaryOp::Equal => Ok(Value::Bool(left.lox_eq(&right))),
            BinaryOp::NotEqual => Ok(Value::Bool(!left.lox_eq(&right))),
        }
    }

    fn get_property(&mut self, object: Value, name: &str, line: u32) -> Result<Value, Signal> {
        let Value::Instance(instance) = object else {
            return Err(RuntimeError::NotAnInstance { line }.into());
        };
        if let Some(value) = instance.borrow().fields.get(name).cloned() {
            return Ok(value);
        }
        let class = instance.borrow().class.clone();
        if let Some(method) = class.find_method(name) {
            return Ok(Value::Function(std::rc::Rc::new(method.bind(instance))));
        }
        Err(RuntimeError::UndefinedProperty { name: name.to_string(), line }.into())
    }

    fn eval_super(&mut self, id: loxc_par::ExprId, method_name: &str, line: u32) -> Result<Value, Signal> {
        let depth = self
            .locals
            .get(id)
            .expect("resolver guarantees 'super' expressions carry a depth");

        let superclass = match self.environment.get_at(depth, "super") {
            Value::Class(class) => class,
            _ => unreachable!("'super' always resolves to a class value"),
        };
        let instance = match self.environment.get_at(depth - 1, "this") {
            Value::Instance(instance) => instance,
            _ => unreachable!("'this' always resolves to an instance value one scope inside 'super'"),
        };

        let method = superclass
            .find_method(method_name)
            .ok_or_else(|| RuntimeError::UndefinedSuperMethod { name: method_name.to_string(), line })?;
        Ok(Value::Function(std::rc::Rc::new(method.bind(instance))))
    }
}

fn literal_value(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::Str(s) => Value::string(s.as_str()),
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Nil => Value::Nil,
    }
}
