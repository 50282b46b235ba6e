//! Node factory used as the parser's reduction actions.
//!
//! Every constructor stamps the node with the session's current line. Binary
//! and minus constructors also fold literal operands into a single literal.

use crate::ast::{
    ArgumentList, BinaryOperator, Block, Elsif, ElsifList, Expression, ExpressionKind,
    IdentifierList, ParameterList, Statement, StatementKind, StatementList,
};
use crate::chain::{self, Chain};
use crate::eval::{EvalError, Value, eval_binary_literal, eval_unary_negate};

use super::Compiler;

impl Compiler {
    pub fn create_parameter(&self, name: impl Into<String>) -> ParameterList {
        Chain::new(name.into())
    }

    pub fn chain_parameter(&self, list: ParameterList, name: impl Into<String>) -> ParameterList {
        list.append(name.into())
    }

    pub fn create_argument_list(&self, expression: Expression) -> ArgumentList {
        Chain::new(expression)
    }

    pub fn chain_argument_list(&self, list: ArgumentList, expression: Expression) -> ArgumentList {
        list.append(expression)
    }

    pub fn create_statement_list(&self, statement: Statement) -> StatementList {
        Chain::new(statement)
    }

    /// The first statement of a body may arrive here with no list yet.
    pub fn chain_statement_list(
        &self,
        list: Option<StatementList>,
        statement: Statement,
    ) -> StatementList {
        chain::append_to(list, statement)
    }

    pub fn create_global_identifier(&self, name: impl Into<String>) -> IdentifierList {
        Chain::new(name.into())
    }

    pub fn chain_identifier(
        &self,
        list: IdentifierList,
        name: impl Into<String>,
    ) -> IdentifierList {
        list.append(name.into())
    }

    pub fn create_elsif(&self, condition: Expression, block: Block) -> Elsif {
        Elsif { condition, block }
    }

    pub fn create_elsif_list(&self, elsif: Elsif) -> ElsifList {
        Chain::new(elsif)
    }

    pub fn chain_elsif_list(&self, list: ElsifList, elsif: Elsif) -> ElsifList {
        list.append(elsif)
    }

    fn alloc_expression(&self, kind: ExpressionKind) -> Expression {
        Expression {
            line: self.current_line,
            kind,
        }
    }

    pub fn create_int_expression(&self, value: i64) -> Expression {
        self.alloc_expression(ExpressionKind::Integer(value))
    }

    pub fn create_double_expression(&self, value: f64) -> Expression {
        self.alloc_expression(ExpressionKind::Double(value))
    }

    pub fn create_boolean_expression(&self, value: bool) -> Expression {
        self.alloc_expression(ExpressionKind::Boolean(value))
    }

    pub fn create_null_expression(&self) -> Expression {
        self.alloc_expression(ExpressionKind::Null)
    }

    pub fn create_identifier_expression(&self, name: impl Into<String>) -> Expression {
        self.alloc_expression(ExpressionKind::Identifier(name.into()))
    }

    pub fn create_assign_expression(
        &self,
        variable: impl Into<String>,
        operand: Expression,
    ) -> Expression {
        self.alloc_expression(ExpressionKind::Assign {
            variable: variable.into(),
            operand: Box::new(operand),
        })
    }

    /// Builds `left op right`, or the literal it evaluates to when both
    /// operands are integer or double literals.
    ///
    /// Logical operators and integer division by a literal zero are left
    /// unfolded: both fail at run time and must report there, with the line of
    /// the expression.
    pub fn create_binary_expression(
        &self,
        op: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        if self.options.constant_folding
            && !op.is_logical()
            && let (Some(left_value), Some(right_value)) =
                (left.foldable_value(), right.foldable_value())
        {
            match eval_binary_literal(op, &left_value, &right_value) {
                Ok(value) => return self.folded(value),
                Err(EvalError::DivisionByZero) => {
                    tracing::debug!(
                        line = self.current_line,
                        "not folding {left_value} {} {right_value}: division by zero",
                        op.symbol()
                    );
                }
                Err(error) => panic!(
                    "folding {left_value} {} {right_value} failed on literal operands: {error}",
                    op.symbol()
                ),
            }
        }
        self.alloc_expression(ExpressionKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds `-operand`, folding integer and double literals.
    pub fn create_minus_expression(&self, operand: Expression) -> Expression {
        if self.options.constant_folding
            && let Some(value) = operand.foldable_value()
        {
            match eval_unary_negate(&value) {
                Ok(value) => return self.folded(value),
                Err(error) => panic!("negating literal {value} failed: {error}"),
            }
        }
        self.alloc_expression(ExpressionKind::Minus(Box::new(operand)))
    }

    fn folded(&self, value: Value) -> Expression {
        tracing::debug!(line = self.current_line, %value, "folded constant expression");
        self.alloc_expression(value.into())
    }

    pub fn create_function_call_expression(
        &self,
        name: impl Into<String>,
        arguments: Option<ArgumentList>,
    ) -> Expression {
        self.alloc_expression(ExpressionKind::FunctionCall {
            name: name.into(),
            arguments,
        })
    }

    fn alloc_statement(&self, kind: StatementKind) -> Statement {
        Statement {
            line: self.current_line,
            kind,
        }
    }

    pub fn create_expression_statement(&self, expression: Expression) -> Statement {
        self.alloc_statement(StatementKind::Expression(expression))
    }

    pub fn create_global_statement(&self, identifiers: IdentifierList) -> Statement {
        self.alloc_statement(StatementKind::Global(identifiers))
    }

    pub fn create_if_statement(
        &self,
        condition: Expression,
        then_block: Block,
        elsif_list: Option<ElsifList>,
        else_block: Option<Block>,
    ) -> Statement {
        self.alloc_statement(StatementKind::If {
            condition,
            then_block,
            elsif_list,
            else_block,
        })
    }

    pub fn create_while_statement(&self, condition: Expression, block: Block) -> Statement {
        self.alloc_statement(StatementKind::While { condition, block })
    }

    pub fn create_for_statement(
        &self,
        init: Option<Expression>,
        condition: Option<Expression>,
        post: Option<Expression>,
        block: Block,
    ) -> Statement {
        self.alloc_statement(StatementKind::For {
            init,
            condition,
            post,
            block,
        })
    }

    pub fn create_return_statement(&self, value: Option<Expression>) -> Statement {
        self.alloc_statement(StatementKind::Return(value))
    }

    pub fn create_break_statement(&self) -> Statement {
        self.alloc_statement(StatementKind::Break)
    }

    pub fn create_continue_statement(&self) -> Statement {
        self.alloc_statement(StatementKind::Continue)
    }

    /// `{}` reduces with no statement list.
    pub fn create_block(&self, statements: Option<StatementList>) -> Block {
        Block {
            statements: statements.map(Chain::into_vec).unwrap_or_default(),
        }
    }
}
