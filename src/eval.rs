//! Literal arithmetic shared by construction-time folding and run-time
//! evaluation.
//!
//! Both paths must agree: a program whose constant sub-expressions were folded
//! while parsing has to behave exactly like the same program evaluated without
//! folding. Integer pairs stay integers, any double operand promotes the pair to
//! double, and comparisons always produce booleans.

mod error;
mod value;

pub use error::EvalError;
pub use value::Value;

use crate::ast::BinaryOperator;

/// Applies `op` to two already evaluated operands.
pub fn eval_binary_literal(
    op: BinaryOperator,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    match (*left, *right) {
        (Value::Integer(left), Value::Integer(right)) => eval_binary_int(op, left, right),
        (Value::Integer(left), Value::Double(right)) => eval_binary_double(op, left as f64, right),
        (Value::Double(left), Value::Integer(right)) => eval_binary_double(op, left, right as f64),
        (Value::Double(left), Value::Double(right)) => eval_binary_double(op, left, right),
        (Value::Boolean(left), Value::Boolean(right)) => eval_binary_boolean(op, left, right),
        (Value::Null, _) | (_, Value::Null) => eval_binary_null(op, *left, *right),
        (left, right) => Err(EvalError::UnsupportedOperands {
            operation: op.symbol(),
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

/// Arithmetic negation of an evaluated operand.
pub fn eval_unary_negate(operand: &Value) -> Result<Value, EvalError> {
    match *operand {
        Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
        Value::Double(value) => Ok(Value::Double(-value)),
        other => Err(EvalError::UnsupportedOperand {
            operation: "-",
            type_name: other.type_name(),
        }),
    }
}

fn eval_binary_int(op: BinaryOperator, left: i64, right: i64) -> Result<Value, EvalError> {
    let value = match op {
        BinaryOperator::Add => Value::Integer(left.wrapping_add(right)),
        BinaryOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        BinaryOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        }
        BinaryOperator::Mod => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::Integer(left.wrapping_rem(right))
        }
        BinaryOperator::Eq => Value::Boolean(left == right),
        BinaryOperator::Ne => Value::Boolean(left != right),
        BinaryOperator::Gt => Value::Boolean(left > right),
        BinaryOperator::Ge => Value::Boolean(left >= right),
        BinaryOperator::Lt => Value::Boolean(left < right),
        BinaryOperator::Le => Value::Boolean(left <= right),
        BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => {
            return Err(EvalError::NotBoolean {
                operation: op.symbol(),
                type_name: "int",
            });
        }
    };
    Ok(value)
}

fn eval_binary_double(op: BinaryOperator, left: f64, right: f64) -> Result<Value, EvalError> {
    let value = match op {
        BinaryOperator::Add => Value::Double(left + right),
        BinaryOperator::Sub => Value::Double(left - right),
        BinaryOperator::Mul => Value::Double(left * right),
        BinaryOperator::Div => Value::Double(left / right),
        BinaryOperator::Mod => Value::Double(left % right),
        BinaryOperator::Eq => Value::Boolean(left == right),
        BinaryOperator::Ne => Value::Boolean(left != right),
        BinaryOperator::Gt => Value::Boolean(left > right),
        BinaryOperator::Ge => Value::Boolean(left >= right),
        BinaryOperator::Lt => Value::Boolean(left < right),
        BinaryOperator::Le => Value::Boolean(left <= right),
        BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => {
            return Err(EvalError::NotBoolean {
                operation: op.symbol(),
                type_name: "double",
            });
        }
    };
    Ok(value)
}

fn eval_binary_boolean(op: BinaryOperator, left: bool, right: bool) -> Result<Value, EvalError> {
    match op {
        BinaryOperator::LogicalAnd => Ok(Value::Boolean(left && right)),
        BinaryOperator::LogicalOr => Ok(Value::Boolean(left || right)),
        BinaryOperator::Eq => Ok(Value::Boolean(left == right)),
        BinaryOperator::Ne => Ok(Value::Boolean(left != right)),
        _ => Err(EvalError::UnsupportedOperand {
            operation: op.symbol(),
            type_name: "boolean",
        }),
    }
}

// Null only compares for (in)equality; it equals nothing but another null.
fn eval_binary_null(op: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    let both_null = left == Value::Null && right == Value::Null;
    match op {
        BinaryOperator::Eq => Ok(Value::Boolean(both_null)),
        BinaryOperator::Ne => Ok(Value::Boolean(!both_null)),
        _ => Err(EvalError::UnsupportedOperands {
            operation: op.symbol(),
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}
