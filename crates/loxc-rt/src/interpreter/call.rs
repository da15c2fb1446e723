//! Call dispatch (spec §4.5 "Call"): functions, native built-ins, and
//! classes each reach the runtime through [`Value`] in a different shape,
//! so this is the one place that reconciles them into a single arity
//! check and invocation.

use super::core::Interpreter;
use crate::error::RuntimeError;
use crate::signal::Signal;
use crate::value::{Callable, LoxClass, Value};

impl Interpreter {
    pub(crate) fn call_value(
        &mut self,
        callee: Value,
        args: Vec<Value>,
        line: u32,
    ) -> Result<Value, Signal> {
        let arity = match &callee {
            Value::Function(f) => f.arity(),
            Value::NativeFn(f) => f.arity(),
            Value::Class(class) => class.arity(),
            _ => {
                return Err(RuntimeError::NotCallable { line }.into());
            }
        };
        if args.len() != arity {
            return Err(RuntimeError::ArityMismatch { expected: arity, got: args.len(), line }.into());
        }

        match callee {
            Value::Function(f) => f.call(self, args),
            Value::NativeFn(f) => f.call(self, args),
            Value::Class(class) => LoxClass::instantiate(&class, self, args),
            _ => unreachable!("non-callable values are rejected above"),
        }
    }
}
