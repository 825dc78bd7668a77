//! Seeded random graphs for benchmarks and tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomGraph {
    pub nodes: usize,
    /// Expected out-degree; `nodes * avg_degree` edge draws are made.
    pub avg_degree: f32,
    /// Costs are drawn uniformly from `1..=max_cost`.
    pub max_cost: u64,
    pub seed: u64,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self { nodes: 1000, avg_degree: 4.0, max_cost: 100, seed: 42 }
    }
}

impl RandomGraph {
    /// Self loops are dropped, so the edge count can fall short of the
    /// number of draws. The same parameters always give the same graph.
    pub fn build(&self) -> Result<Graph<u64>> {
        let mut graph = Graph::new(self.nodes)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let draws = (self.nodes as f32 * self.avg_degree.max(0.0)) as usize;
        let max_cost = self.max_cost.max(1);
        for _ in 0..draws {
            let u = rng.gen_range(0..self.nodes);
            let v = rng.gen_range(0..self.nodes);
            if u == v {
                continue;
            }
            graph.add_edge(u, v, rng.gen_range(1..=max_cost))?;
        }
        Ok(graph)
    }
}
