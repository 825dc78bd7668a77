//! Plain-data view of a graph with a query's path marked on it.
//!
//! A renderer decides colors and line widths from `on_path`; nothing here
//! knows about presentation.

use serde::Serialize;

use crate::cost::{Cost, Distance};
use crate::graph::{Graph, NodeId};
use crate::path::Path;
use crate::query::QueryResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeOverlay {
    pub id: NodeId,
    pub on_path: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeOverlay<C> {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: C,
    pub on_path: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "C: Cost + Serialize"))]
pub struct PathOverlay<C> {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: Distance<C>,
    pub reachable: bool,
    pub path: Path,
    pub nodes: Vec<NodeOverlay>,
    pub edges: Vec<EdgeOverlay<C>>,
}

impl<C: Cost> PathOverlay<C> {
    pub fn new(graph: &Graph<C>, result: &QueryResult<C>) -> Self {
        let path = &result.path;
        let nodes =
            graph.nodes().map(|id| NodeOverlay { id, on_path: path.contains(id) }).collect();
        // Parallel edges between two path nodes are all marked.
        let edges = graph
            .edges()
            .map(|e| EdgeOverlay {
                from: e.from,
                to: e.to,
                cost: e.cost,
                on_path: path.is_consecutive(e.from, e.to),
            })
            .collect();
        Self {
            source: result.source,
            target: result.target,
            distance: result.distance,
            reachable: result.is_reachable(),
            path: path.clone(),
            nodes,
            edges,
        }
    }

    pub fn path_edges(&self) -> impl Iterator<Item = &EdgeOverlay<C>> + '_ {
        self.edges.iter().filter(|e| e.on_path)
    }
}

impl<C: Cost + Serialize> PathOverlay<C> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
