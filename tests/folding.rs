use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use quill::Compiler;
use quill::ast::{BinaryOperator, Expression, ExpressionKind};
use quill::compiler::CompilerOptions;
use quill::eval::{Value, eval_binary_literal, eval_unary_negate};
use test_support::{Literal, load_suite};

const OPERATORS: [BinaryOperator; 13] = [
    BinaryOperator::Add,
    BinaryOperator::Sub,
    BinaryOperator::Mul,
    BinaryOperator::Div,
    BinaryOperator::Mod,
    BinaryOperator::Eq,
    BinaryOperator::Ne,
    BinaryOperator::Gt,
    BinaryOperator::Ge,
    BinaryOperator::Lt,
    BinaryOperator::Le,
    BinaryOperator::LogicalAnd,
    BinaryOperator::LogicalOr,
];

fn operator(symbol: &str) -> Result<BinaryOperator> {
    OPERATORS
        .into_iter()
        .find(|op| op.symbol() == symbol)
        .with_context(|| format!("Unknown operator '{symbol}'"))
}

fn build_literal(compiler: &Compiler, literal: Literal) -> Expression {
    match literal {
        Literal::Int(value) => compiler.create_int_expression(value),
        Literal::Double(value) => compiler.create_double_expression(value),
        Literal::Boolean(value) => compiler.create_boolean_expression(value),
    }
}

fn literal_kind(literal: Literal) -> ExpressionKind {
    match literal {
        Literal::Int(value) => ExpressionKind::Integer(value),
        Literal::Double(value) => ExpressionKind::Double(value),
        Literal::Boolean(value) => ExpressionKind::Boolean(value),
    }
}

/// Evaluates a variable-free tree the way the run-time evaluator does.
fn evaluate(expr: &Expression) -> Result<Value> {
    match &expr.kind {
        ExpressionKind::Integer(value) => Ok(Value::Integer(*value)),
        ExpressionKind::Double(value) => Ok(Value::Double(*value)),
        ExpressionKind::Boolean(value) => Ok(Value::Boolean(*value)),
        ExpressionKind::Null => Ok(Value::Null),
        ExpressionKind::Binary { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            Ok(eval_binary_literal(*op, &left, &right)?)
        }
        ExpressionKind::Minus(operand) => Ok(eval_unary_negate(&evaluate(operand)?)?),
        other => bail!("Cannot evaluate {other:?} without bindings"),
    }
}

fn sessions() -> (Compiler, Compiler) {
    let plain = Compiler::with_options(CompilerOptions {
        constant_folding: false,
        ..CompilerOptions::default()
    });
    (Compiler::new(), plain)
}

#[test]
fn binary_fixture_cases_fold_like_run_time_evaluation() -> Result<()> {
    let suite = load_suite(Path::new("tests/cases/folding.yaml"))?;
    let (folding, plain) = sessions();

    for case in &suite.binary {
        let op = operator(&case.op)?;
        let folded = folding.create_binary_expression(
            op,
            build_literal(&folding, case.left),
            build_literal(&folding, case.right),
        );
        let unfolded = plain.create_binary_expression(
            op,
            build_literal(&plain, case.left),
            build_literal(&plain, case.right),
        );

        match case.expected {
            Some(expected) => {
                ensure!(
                    folded.kind == literal_kind(expected),
                    "{}: expected {:?}, got {:?}",
                    case.name,
                    expected,
                    folded.kind
                );
                let runtime = evaluate(&unfolded).with_context(|| case.name.clone())?;
                ensure!(
                    ExpressionKind::from(runtime) == folded.kind,
                    "{}: run-time evaluation gave {runtime}, folding gave {:?}",
                    case.name,
                    folded.kind
                );
            }
            None => ensure!(
                folded == unfolded,
                "{}: expected an unfolded node, got {:?}",
                case.name,
                folded.kind
            ),
        }
    }
    Ok(())
}

#[test]
fn negate_fixture_cases_fold_like_run_time_evaluation() -> Result<()> {
    let suite = load_suite(Path::new("tests/cases/folding.yaml"))?;
    let (folding, plain) = sessions();

    for case in &suite.negate {
        let folded = folding.create_minus_expression(build_literal(&folding, case.operand));
        let unfolded = plain.create_minus_expression(build_literal(&plain, case.operand));

        match case.expected {
            Some(expected) => {
                ensure!(
                    folded == build_literal(&folding, expected),
                    "{}: expected {:?}, got {:?}",
                    case.name,
                    expected,
                    folded.kind
                );
                let runtime = evaluate(&unfolded).with_context(|| case.name.clone())?;
                ensure!(
                    ExpressionKind::from(runtime) == folded.kind,
                    "{}: run-time evaluation gave {runtime}, folding gave {:?}",
                    case.name,
                    folded.kind
                );
            }
            None => ensure!(
                folded == unfolded,
                "{}: expected an unfolded node, got {:?}",
                case.name,
                folded.kind
            ),
        }
    }
    Ok(())
}
