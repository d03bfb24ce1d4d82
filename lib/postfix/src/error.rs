use derive_more::Display;

use crate::ast::Operator;

/// The structural rule a malformed expression broke
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[display(fmt = "no operands")]
    Empty,

    #[display(fmt = "operator '{}' at position {} needs two operands", op, position)]
    MissingOperand { op: Operator, position: usize },

    #[display(fmt = "{} operands left without an operator", _0)]
    UnconsumedOperands(usize),
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[display(fmt = "Invalid expression: {}", _0)]
    InvalidExpression(Malformed),
}

impl std::error::Error for ParseError {}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[display(fmt = "Unknown variable '{}'", _0)]
    UnknownVariable(char),

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Integer overflow in '{}'", _0)]
    Overflow(Operator),
}

impl std::error::Error for EvalError {}
