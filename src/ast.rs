//! Syntax tree built by the parser's reduction actions.
//!
//! Nodes are produced bottom-up through [`Compiler`](crate::compiler::Compiler),
//! which stamps each one with the source line active at its construction. The
//! tree is a strict ownership hierarchy and is not mutated once built.

use crate::chain::Chain;
use crate::eval::Value;

pub type ParameterList = Chain<String>;
pub type ArgumentList = Chain<Expression>;
pub type IdentifierList = Chain<String>;
pub type StatementList = Chain<Statement>;
pub type ElsifList = Chain<Elsif>;

#[derive(Debug, PartialEq, Clone)]
pub struct Expression {
    pub line: usize,
    pub kind: ExpressionKind,
}

impl Expression {
    /// Literal value of an integer or double literal node.
    ///
    /// Only these two kinds take part in constant folding; boolean and null
    /// literals return `None`.
    pub fn foldable_value(&self) -> Option<Value> {
        match self.kind {
            ExpressionKind::Integer(value) => Some(Value::Integer(value)),
            ExpressionKind::Double(value) => Some(Value::Double(value)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExpressionKind {
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Null,
    Identifier(String),
    Assign {
        variable: String,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Minus(Box<Expression>),
    FunctionCall {
        name: String,
        arguments: Option<ArgumentList>,
    },
}

impl From<Value> for ExpressionKind {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(value) => ExpressionKind::Integer(value),
            Value::Double(value) => ExpressionKind::Double(value),
            Value::Boolean(value) => ExpressionKind::Boolean(value),
            Value::Null => ExpressionKind::Null,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    pub line: usize,
    pub kind: StatementKind,
}

#[derive(Debug, PartialEq, Clone)]
pub enum StatementKind {
    Expression(Expression),
    Global(IdentifierList),
    If {
        condition: Expression,
        then_block: Block,
        elsif_list: Option<ElsifList>,
        else_block: Option<Block>,
    },
    While {
        condition: Expression,
        block: Block,
    },
    For {
        init: Option<Expression>,
        condition: Option<Expression>,
        post: Option<Expression>,
        block: Block,
    },
    Return(Option<Expression>),
    Break,
    Continue,
}

/// One `elsif` clause of an `if` statement.
#[derive(Debug, PartialEq, Clone)]
pub struct Elsif {
    pub condition: Expression,
    pub block: Block,
}

/// A braced body: function body, loop body or branch body.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}
