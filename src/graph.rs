//! Fixed-size directed weighted graph stored as adjacency lists.

use std::ops::Range;

use serde::Serialize;

use crate::cost::Cost;
use crate::error::{Error, Result};

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<C> {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: C,
}

/// Append-only graph: nodes `0..n` are fixed at creation, edges are kept in
/// insertion order per source node and parallel edges are allowed.
#[derive(Debug, Clone)]
pub struct Graph<C> {
    adjacency: Vec<Vec<Edge<C>>>,
    edge_count: usize,
}

impl<C: Cost> Graph<C> {
    /// Fails with `InvalidSize` for zero nodes or when the adjacency table
    /// cannot be allocated.
    pub fn new(nodes: usize) -> Result<Self> {
        if nodes == 0 {
            return Err(Error::InvalidSize { nodes });
        }
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(nodes).map_err(|_| Error::InvalidSize { nodes })?;
        adjacency.resize_with(nodes, Vec::new);
        Ok(Self { adjacency, edge_count: 0 })
    }

    /// Builds a graph from an edge list. Nothing is returned unless every
    /// edge is valid.
    pub fn from_edges<I>(nodes: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, C)>,
    {
        let mut graph = Self::new(nodes)?;
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// Imports a CSR layout: `offsets` has `n + 1` monotone entries starting
    /// at 0, and `targets`/`weights` hold `offsets[n]` entries each.
    pub fn from_csr(offsets: &[u32], targets: &[u32], weights: &[C]) -> Result<Self> {
        let nodes = offsets
            .len()
            .checked_sub(1)
            .ok_or_else(|| Error::MalformedCsr("offsets is empty".into()))?;
        let m = offsets[nodes] as usize;
        if offsets[0] != 0 {
            return Err(Error::MalformedCsr(format!("offsets[0] is {}, expected 0", offsets[0])));
        }
        if targets.len() < m || weights.len() < m {
            return Err(Error::MalformedCsr(format!(
                "offsets declare {m} edges but targets has {} and weights has {}",
                targets.len(),
                weights.len()
            )));
        }
        let mut graph = Self::new(nodes)?;
        for u in 0..nodes {
            let (start, end) = (offsets[u] as usize, offsets[u + 1] as usize);
            if start > end || end > m {
                return Err(Error::MalformedCsr(format!("offsets not monotone at node {u}")));
            }
            for e in start..end {
                graph.add_edge(u, targets[e] as usize, weights[e])?;
            }
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: C) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if !cost.is_valid() {
            return Err(Error::InvalidCost { from, to, cost: cost.to_string() });
        }
        self.adjacency[from].push(Edge { from, to, cost });
        self.edge_count += 1;
        Ok(())
    }

    pub fn neighbors(&self, node: NodeId) -> Result<&[Edge<C>]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn nodes(&self) -> Range<NodeId> {
        0..self.adjacency.len()
    }

    /// Every edge, grouped by source node in node order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<C>> + '_ {
        self.adjacency.iter().flatten()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    pub(crate) fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNode { node, node_count: self.adjacency.len() })
        }
    }

    // Unchecked view for the engine, which validates its endpoints up front.
    #[inline]
    pub(crate) fn out_edges(&self, node: NodeId) -> &[Edge<C>] {
        &self.adjacency[node]
    }
}
