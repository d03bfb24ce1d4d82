use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A binary arithmetic operator, written with its postfix symbol
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

/// A node in the tree built from a postfix expression
///
/// Children are owned exclusively by their parent, so a parsed tree is
/// acyclic and can be shared read-only between threads.
///
/// `Display`, `Drop`, [`Node::leaf_count`] and [`Node::depth`] walk the tree
/// with a heap stack, so trees of any height are safe to print and drop.
/// The derived `Clone`, `PartialEq`, `Debug` and serde impls still recurse.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type", content = "value")]
pub enum Node {
    Value(char),
    Operation(Operator, Box<Node>, Box<Node>),
}

impl Node {
    pub fn operation(op: Operator, left: Node, right: Node) -> Node {
        Node::Operation(op, Box::new(left), Box::new(right))
    }

    /// Number of variable references in the tree
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Value(_) => count += 1,
                Node::Operation(_, l, r) => {
                    stack.push(l);
                    stack.push(r);
                }
            }
        }
        count
    }

    /// Number of nodes on the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Node::Operation(_, l, r) = node {
                stack.push((&**l, depth + 1));
                stack.push((&**r, depth + 1));
            }
        }
        deepest
    }
}

enum Render<'a> {
    Node(&'a Node),
    Space,
    Close(Operator),
}

/// Renders as `(<left> <right> <op>)` for an operation and as the bare
/// variable name for a value, e.g. `((a b +) (c d *) +)`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Render::Node(self)];
        while let Some(step) = stack.pop() {
            match step {
                Render::Node(Node::Value(name)) => write!(f, "{}", name)?,
                Render::Node(Node::Operation(op, l, r)) => {
                    f.write_str("(")?;
                    stack.push(Render::Close(*op));
                    stack.push(Render::Node(r));
                    stack.push(Render::Space);
                    stack.push(Render::Node(l));
                }
                Render::Space => f.write_str(" ")?,
                Render::Close(op) => write!(f, " {})", op)?,
            }
        }
        Ok(())
    }
}

// Detach children onto a heap stack so dropping a deep tree doesn't recurse
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

fn detach_children(node: &mut Node, stack: &mut Vec<Node>) {
    if let Node::Operation(_, l, r) = node {
        stack.push(mem::replace(&mut **l, Node::Value(' ')));
        stack.push(mem::replace(&mut **r, Node::Value(' ')));
    }
}
