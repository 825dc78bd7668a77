use crate::graph::NodeId;

/// Errors raised by graph construction, queries and input parsing.
///
/// Unreachable targets are not errors; they surface as
/// [`Distance::Unreachable`](crate::Distance::Unreachable) with an empty path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot create a graph with {nodes} nodes")]
    InvalidSize { nodes: usize },

    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },

    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidCost { from: NodeId, to: NodeId, cost: String },

    #[error("predecessor chain from {target} ended at {reached}, expected source {start}")]
    BrokenPredecessorChain { start: NodeId, target: NodeId, reached: NodeId },

    #[error("malformed CSR input: {0}")]
    MalformedCsr(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
