//! Non-local control flow (spec §9 "Exception-based non-local control
//! flow"): `return` and runtime errors both unwind the evaluator the same
//! way, as the `Err` side of a `Result<Value, Signal>` threaded through
//! every statement and expression, rather than as a host exception.

use crate::error::RuntimeError;
use crate::value::Value;

#[derive(Clone, Debug)]
pub enum Signal {
    /// A `return` statement unwinding toward the nearest `Function::call`.
    Return(Value),
    /// A fatal runtime error unwinding toward `Interpreter::interpret`.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(err: RuntimeError) -> Self {
        Signal::Error(err)
    }
}
