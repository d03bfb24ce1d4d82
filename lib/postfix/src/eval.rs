use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::ast::{Node, Operator};
use crate::error::EvalError;

/// Read-only variable values supplied to [`evaluate`]
pub trait Bindings {
    fn lookup(&self, name: char) -> Option<i64>;
}

impl<S: BuildHasher> Bindings for HashMap<char, i64, S> {
    fn lookup(&self, name: char) -> Option<i64> {
        self.get(&name).copied()
    }
}

impl Bindings for BTreeMap<char, i64> {
    fn lookup(&self, name: char) -> Option<i64> {
        self.get(&name).copied()
    }
}

macro_rules! str_keyed {
    ( $( $k: ty ),* ) => {
        $(
            impl<S: BuildHasher> Bindings for HashMap<$k, i64, S> {
                fn lookup(&self, name: char) -> Option<i64> {
                    let mut buf = [0; 4];
                    let name: &str = name.encode_utf8(&mut buf);
                    self.get(name).copied()
                }
            }

            impl Bindings for BTreeMap<$k, i64> {
                fn lookup(&self, name: char) -> Option<i64> {
                    let mut buf = [0; 4];
                    let name: &str = name.encode_utf8(&mut buf);
                    self.get(name).copied()
                }
            }
        )*
    };
}

str_keyed!(String, &str);

enum Step<'a> {
    Visit(&'a Node),
    Apply(Operator),
}

/// Evaluates a tree against `bindings`, visiting the left subtree before the right
///
/// The first error found aborts the walk. The walk keeps its own stack, so
/// tree height is bounded by memory rather than by the thread's stack.
pub fn evaluate<B: Bindings + ?Sized>(root: &Node, bindings: &B) -> Result<i64, EvalError> {
    let mut steps = vec![Step::Visit(root)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Node::Value(name)) => {
                let value = bindings
                    .lookup(*name)
                    .ok_or(EvalError::UnknownVariable(*name))?;
                values.push(value);
            }
            Step::Visit(Node::Operation(op, l, r)) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(r));
                steps.push(Step::Visit(l));
            }
            Step::Apply(op) => match (values.pop(), values.pop()) {
                (Some(right), Some(left)) => values.push(apply(op, left, right)?),
                _ => unreachable!("operation applied without both operands"),
            },
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("evaluation produced no value"),
    }
}

fn apply(op: Operator, l: i64, r: i64) -> Result<i64, EvalError> {
    let result = match op {
        Operator::Add => l.checked_add(r),
        Operator::Sub => l.checked_sub(r),
        Operator::Mul => l.checked_mul(r),
        Operator::Div if r == 0 => return Err(EvalError::DivisionByZero),
        Operator::Div => l.checked_div(r),
    };
    result.ok_or(EvalError::Overflow(op))
}
