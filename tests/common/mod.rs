#![allow(dead_code)]

use sssp_path::{Distance, Graph, NodeId, Path};

pub fn path_graph(n: usize, w: u64) -> Graph<u64> {
    Graph::from_edges(n, (0..n.saturating_sub(1)).map(|u| (u, u + 1, w))).unwrap()
}

// center 0, leaves 1..=k
pub fn star_graph(k: usize, w: u64) -> Graph<u64> {
    Graph::from_edges(k + 1, (1..=k).map(|leaf| (0, leaf, w))).unwrap()
}

pub fn complete_graph(n: usize, w: u64) -> Graph<u64> {
    let edges = (0..n).flat_map(|u| (0..n).filter(move |&v| v != u).map(move |v| (u, v, w)));
    Graph::from_edges(n, edges).unwrap()
}

// two cliques joined by a single bridge a-1 -> a
pub fn bridge_cliques(a: usize, b: usize, w: u64) -> Graph<u64> {
    let n = a + b;
    let mut edges = Vec::new();
    for u in 0..a {
        for v in (0..a).filter(|&v| v != u) {
            edges.push((u, v, w));
        }
    }
    edges.push((a - 1, a, w));
    for u in a..n {
        for v in (a..n).filter(|&v| v != u) {
            edges.push((u, v, w));
        }
    }
    Graph::from_edges(n, edges).unwrap()
}

// Deterministic xorshift64* directed graph; parallel edges allowed.
pub fn pseudo_random_graph(n: usize, m: usize, seed: u64, max_cost: u64) -> Graph<u64> {
    let mut state = seed | 1;
    let mut next = || {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state = state.wrapping_mul(2685821657736338717);
        state >> 32
    };
    let mut g = Graph::new(n).unwrap();
    for _ in 0..m {
        let u = (next() % n as u64) as usize;
        let v = (next() % n as u64) as usize;
        let w = next() % (max_cost + 1);
        g.add_edge(u, v, w).unwrap();
    }
    g
}

/// Minimum over all simple paths by exhaustive DFS. Only for small graphs.
pub fn brute_force(g: &Graph<u64>, source: NodeId, target: NodeId) -> Option<u64> {
    fn dfs(g: &Graph<u64>, at: NodeId, target: NodeId, cost: u64, seen: &mut Vec<bool>, best: &mut Option<u64>) {
        if at == target {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for e in g.neighbors(at).unwrap() {
            if !seen[e.to] {
                seen[e.to] = true;
                dfs(g, e.to, target, cost + e.cost, seen, best);
                seen[e.to] = false;
            }
        }
    }
    let mut seen = vec![false; g.node_count()];
    seen[source] = true;
    let mut best = None;
    dfs(g, source, target, 0, &mut seen, &mut best);
    best
}

pub fn bellman_ford(g: &Graph<u64>, source: NodeId) -> Vec<Option<u64>> {
    let mut dist = vec![None; g.node_count()];
    dist[source] = Some(0);
    for _ in 0..g.node_count() {
        let mut changed = false;
        for e in g.edges() {
            if let Some(d) = dist[e.from] {
                let nd = d + e.cost;
                if dist[e.to].map_or(true, |cur| nd < cur) {
                    dist[e.to] = Some(nd);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Checks endpoints, that every hop is an edge and that the cheapest edges
/// along the hops add up to `distance`.
pub fn assert_valid_path(g: &Graph<u64>, path: &Path, source: NodeId, target: NodeId, distance: Distance<u64>) {
    let Distance::Finite(d) = distance else {
        assert!(path.is_empty(), "unreachable target with path {:?}", path);
        return;
    };
    assert_eq!(path.first(), Some(source));
    assert_eq!(path.last(), Some(target));
    let mut total = 0;
    for (a, b) in path.hops() {
        let cheapest = g.neighbors(a).unwrap().iter().filter(|e| e.to == b).map(|e| e.cost).min();
        total += cheapest.unwrap_or_else(|| panic!("path hop {a} -> {b} is not an edge"));
    }
    assert_eq!(total, d, "path {:?} does not add up", path.nodes());
}
