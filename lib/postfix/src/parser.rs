use log::trace;
use nom::IResult;
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{anychar, char, one_of},
    combinator::{map, map_res, recognize, value},
    sequence::preceded,
};

use crate::ast::{Node, Operator};
use crate::error::{Malformed, ParseError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Operand(char),
    Operator(Operator),
    End,
}

fn parse_token(i: &str) -> IResult<&str, Token> {
    preceded(
        take_while(char::is_whitespace),
        alt((
            map_res(recognize(one_of("+-*/")), |op: &str| {
                op.parse().map(Token::Operator)
            }),
            value(Token::End, char('$')),
            map(anychar, Token::Operand),
        )),
    )(i)
}

/// Parses a postfix expression such as `ab+cd*+$` into a tree
///
/// Every non-whitespace character other than `+-*/$` is a single-character
/// operand. Scanning stops at the first `$`, anything after it is ignored.
pub fn parse(i: &str) -> Result<Node, ParseError> {
    let mut stack: Vec<Node> = Vec::new();
    let mut remaining = i;
    let mut consumed = 0;

    while let Ok((rest, token)) = parse_token(remaining) {
        consumed += remaining[..remaining.len() - rest.len()].chars().count();
        let position = consumed - 1;
        remaining = rest;

        match token {
            Token::Operand(name) => stack.push(Node::Value(name)),
            Token::Operator(op) => {
                // Left was pushed first, so right is on top
                match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => stack.push(Node::operation(op, left, right)),
                    _ => {
                        return Err(ParseError::InvalidExpression(
                            Malformed::MissingOperand { op, position },
                        ))
                    }
                }
            }
            Token::End => break,
        }
    }

    if stack.len() > 1 {
        trace!("{} unconsumed operands", stack.len());
        return Err(ParseError::InvalidExpression(
            Malformed::UnconsumedOperands(stack.len()),
        ));
    }

    stack
        .pop()
        .ok_or(ParseError::InvalidExpression(Malformed::Empty))
}
