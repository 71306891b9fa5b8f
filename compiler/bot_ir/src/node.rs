//! Compiled script form.
//!
//! An `Executable` is built once from source text and re-run every turn
//! against the acting unit's variables. It never holds resolved variable
//! values, only literals, symbol names and verified calls.

use crate::{Command, Value};

/// One element of an `Executable`.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A number literal, already normalized.
    Literal(Value),
    /// A bare symbol. Resolved against the variable context at run time
    /// unless the consuming command takes it raw.
    Symbol(crate::Name),
    /// A verified command call. Each argument is its own deferred
    /// `Executable` so special forms can choose which to run.
    Call {
        command: Command,
        args: Vec<Executable>,
    },
}

/// A compiled sequence of nodes.
///
/// Running it evaluates each node in order and yields the last result.
/// An empty executable yields no value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Executable {
    nodes: Vec<Node>,
}

impl Executable {
    pub fn new(nodes: Vec<Node>) -> Self {
        Executable { nodes }
    }

    /// A single-node executable, as built for each call argument.
    pub fn single(node: Node) -> Self {
        Executable { nodes: vec![node] }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of command calls, including nested ones.
    pub fn call_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Call { args, .. } => 1 + args.iter().map(Executable::call_count).sum::<usize>(),
                Node::Literal(_) | Node::Symbol(_) => 0,
            })
            .sum()
    }
}
