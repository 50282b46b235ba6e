use thiserror::Error;

/// Errors produced when evaluating literal operands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Integer division by zero")]
    DivisionByZero,
    #[error("Operation '{operation}' is not supported for type {type_name}")]
    UnsupportedOperand {
        operation: &'static str,
        type_name: &'static str,
    },
    #[error("Operation '{operation}' is not supported between {left} and {right}")]
    UnsupportedOperands {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("Operation '{operation}' expected boolean operands, got {type_name}")]
    NotBoolean {
        operation: &'static str,
        type_name: &'static str,
    },
}
