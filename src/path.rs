//! Path reconstruction from a predecessor table.

use serde::Serialize;

use crate::cost::{Cost, Distance};
use crate::dijkstra::PredecessorTable;
use crate::error::{Error, Result};
use crate::graph::NodeId;

/// Node sequence from source to target; empty when the target is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// True when `to` comes right after `from` on the path, i.e. the edge
    /// `from -> to` is one of the path's hops.
    pub fn is_consecutive(&self, from: NodeId, to: NodeId) -> bool {
        self.hops().any(|(a, b)| a == from && b == to)
    }

    /// Consecutive `(from, to)` pairs.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Walks `predecessors` back from `target` and returns the path in
/// source → target order.
///
/// An unreachable `distance` yields the empty path without looking at the
/// table. A walk that ends anywhere but `source`, or loops, is reported as
/// [`Error::BrokenPredecessorChain`].
pub fn reconstruct_path<C: Cost>(
    distance: Distance<C>,
    predecessors: &PredecessorTable,
    source: NodeId,
    target: NodeId,
) -> Result<Path> {
    let n = predecessors.len();
    for node in [source, target] {
        if node >= n {
            return Err(Error::InvalidNode { node, node_count: n });
        }
    }
    if distance.is_unreachable() {
        return Ok(Path::empty());
    }

    let mut nodes = vec![target];
    let mut at = target;
    while let Some(prev) = predecessors.get(at) {
        // A simple path has at most n nodes.
        if nodes.len() == n {
            return Err(Error::BrokenPredecessorChain { start: source, target, reached: prev });
        }
        nodes.push(prev);
        at = prev;
    }
    if at != source {
        return Err(Error::BrokenPredecessorChain { start: source, target, reached: at });
    }
    nodes.reverse();
    Ok(Path { nodes })
}
