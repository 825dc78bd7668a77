use serde::Serialize;

use crate::config::EngineConfig;
use crate::cost::{Cost, Distance};
use crate::dijkstra::{shortest_path_with, SearchStats};
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::Path;

/// Distance and path for one `(source, target)` query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "C: Cost + Serialize"))]
pub struct QueryResult<C> {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: Distance<C>,
    pub path: Path,
    pub stats: SearchStats,
}

impl<C: Cost> QueryResult<C> {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

impl<C: Cost> Graph<C> {
    pub fn query(&self, source: NodeId, target: NodeId) -> Result<QueryResult<C>> {
        self.query_with(source, target, &EngineConfig::default())
    }

    pub fn query_with(
        &self,
        source: NodeId,
        target: NodeId,
        config: &EngineConfig,
    ) -> Result<QueryResult<C>> {
        let sp = shortest_path_with(self, source, target, config)?;
        let path = sp.path()?;
        Ok(QueryResult { source, target, distance: sp.distance, path, stats: sp.stats })
    }
}
