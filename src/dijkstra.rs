//! Dijkstra shortest-path engine.
//!
//! Every run allocates its own distance and predecessor tables and hands them
//! back to the caller; the graph is only borrowed. The heap uses lazy
//! deletion, so a node can sit in the queue several times: entries whose
//! tentative cost is worse than the recorded one, or whose node is already
//! finalized, are skipped on pop.

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::config::EngineConfig;
use crate::cost::{Cost, Distance};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::heap::{HeapItem, HeapStats, MinHeap};
use crate::path::{reconstruct_path, Path};

/// For each node, the node that last improved its distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredecessorTable {
    links: Vec<Option<NodeId>>,
}

impl PredecessorTable {
    pub(crate) fn new(nodes: usize) -> Self {
        Self { links: vec![None; nodes] }
    }

    pub fn from_links(links: Vec<Option<NodeId>>) -> Self {
        Self { links }
    }

    /// `None` for the source, for nodes never relaxed and for ids outside the table.
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.links.get(node).copied().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<NodeId>] {
        &self.links
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub relaxations: u64,
    pub settled: u64,
    pub stale_skips: u64,
    pub heap: HeapStats,
}

/// Result of a point-to-point run.
///
/// `distance` is final. Entries of `distances` are final only for nodes that
/// were settled before the run stopped; with early exit the rest are
/// tentative.
#[derive(Debug, Clone)]
pub struct ShortestPath<C> {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: Distance<C>,
    pub distances: Vec<Distance<C>>,
    pub predecessors: PredecessorTable,
    pub stats: SearchStats,
}

impl<C: Cost> ShortestPath<C> {
    pub fn path(&self) -> Result<Path> {
        reconstruct_path(self.distance, &self.predecessors, self.source, self.target)
    }
}

/// Result of a run to exhaustion: every distance is final.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<C> {
    pub source: NodeId,
    pub distances: Vec<Distance<C>>,
    pub predecessors: PredecessorTable,
    pub stats: SearchStats,
}

impl<C: Cost> ShortestPathTree<C> {
    pub fn distance(&self, node: NodeId) -> Option<Distance<C>> {
        self.distances.get(node).copied()
    }

    pub fn path_to(&self, target: NodeId) -> Result<Path> {
        let distance = self.distance(target).unwrap_or(Distance::Unreachable);
        reconstruct_path(distance, &self.predecessors, self.source, target)
    }
}

struct Search<C> {
    distances: Vec<Distance<C>>,
    predecessors: PredecessorTable,
    stats: SearchStats,
    reached_target: bool,
}

/// Shortest distance from `source` to `target` with the default config.
pub fn shortest_path<C: Cost>(
    graph: &Graph<C>,
    source: NodeId,
    target: NodeId,
) -> Result<ShortestPath<C>> {
    shortest_path_with(graph, source, target, &EngineConfig::default())
}

#[instrument(
    level = "debug",
    skip_all,
    fields(nodes = graph.node_count(), source = source, target = target)
)]
pub fn shortest_path_with<C: Cost>(
    graph: &Graph<C>,
    source: NodeId,
    target: NodeId,
    config: &EngineConfig,
) -> Result<ShortestPath<C>> {
    graph.check_node(source)?;
    graph.check_node(target)?;
    let search = run(graph, source, Some(target), config);
    let distance =
        if search.reached_target { search.distances[target] } else { Distance::Unreachable };
    debug!(
        distance = %distance,
        settled = search.stats.settled,
        relaxations = search.stats.relaxations,
        "query finished"
    );
    Ok(ShortestPath {
        source,
        target,
        distance,
        distances: search.distances,
        predecessors: search.predecessors,
        stats: search.stats,
    })
}

/// Final distances and predecessors from `source` to every node.
#[instrument(level = "debug", skip_all, fields(nodes = graph.node_count(), source = source))]
pub fn shortest_path_tree<C: Cost>(
    graph: &Graph<C>,
    source: NodeId,
) -> Result<ShortestPathTree<C>> {
    graph.check_node(source)?;
    let config = EngineConfig { early_exit: false, ..EngineConfig::default() };
    let search = run(graph, source, None, &config);
    debug!(settled = search.stats.settled, relaxations = search.stats.relaxations, "tree finished");
    Ok(ShortestPathTree {
        source,
        distances: search.distances,
        predecessors: search.predecessors,
        stats: search.stats,
    })
}

// Endpoints are validated by the callers.
fn run<C: Cost>(
    graph: &Graph<C>,
    source: NodeId,
    target: Option<NodeId>,
    config: &EngineConfig,
) -> Search<C> {
    let n = graph.node_count();
    let mut distances = vec![Distance::Unreachable; n];
    let mut predecessors = PredecessorTable::new(n);
    let mut visited = vec![false; n];
    let mut stats = SearchStats::default();
    let mut reached_target = false;

    distances[source] = Distance::Finite(C::zero());
    let mut heap = MinHeap::with_capacity(n.min(config.heap_capacity));
    heap.push(HeapItem { node: source, dist: C::zero() });

    while let Some(item) = heap.pop() {
        let u = item.node;
        if visited[u] || distances[u].is_shorter_than(Distance::Finite(item.dist)) {
            stats.stale_skips += 1;
            continue;
        }
        visited[u] = true;
        stats.settled += 1;
        if target == Some(u) {
            reached_target = true;
            if config.early_exit {
                break;
            }
        }

        let base = distances[u];
        for edge in graph.out_edges(u) {
            let v = edge.to;
            if visited[v] {
                continue;
            }
            let candidate = base.extend(edge.cost);
            if let Distance::Finite(nd) = candidate {
                if candidate.is_shorter_than(distances[v]) {
                    distances[v] = candidate;
                    predecessors.links[v] = Some(u);
                    heap.push(HeapItem { node: v, dist: nd });
                    stats.relaxations += 1;
                    trace!(from = u, to = v, dist = %nd, queued = heap.len(), "relaxed");
                }
            }
        }
    }

    stats.heap = heap.stats();
    Search { distances, predecessors, stats, reached_target }
}
