//! Runtime errors (spec §7.4). Every one halts the current `interpret`
//! call; there is no language-level try/catch to recover from them.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RuntimeError {
    #[error("line {line}: {message}")]
    TypeMismatch { message: String, line: u32 },

    #[error("line {line}: undefined variable '{name}'")]
    UndefinedVariable { name: String, line: u32 },

    #[error("line {line}: can only call functions and classes")]
    NotCallable { line: u32 },

    #[error("line {line}: expected {expected} arguments but got {got}")]
    ArityMismatch { expected: usize, got: usize, line: u32 },

    #[error("line {line}: only instances have properties")]
    NotAnInstance { line: u32 },

    #[error("line {line}: undefined property '{name}'")]
    UndefinedProperty { name: String, line: u32 },

    #[error("line {line}: undefined property '{name}' on superclass")]
    UndefinedSuperMethod { name: String, line: u32 },
}

impl RuntimeError {
    pub fn line(&self) -> u32 {
        match self {
            RuntimeError::TypeMismatch { line, .. }
            | RuntimeError::UndefinedVariable { line, .. }
            | RuntimeError::NotCallable { line }
            | RuntimeError::ArityMismatch { line, .. }
            | RuntimeError::NotAnInstance { line }
            | RuntimeError::UndefinedProperty { line, .. }
            | RuntimeError::UndefinedSuperMethod { line, .. } => *line,
        }
    }
}
