//! Parser for the whitespace-separated problem format:
//!
//! ```text
//! n edge_count
//! from to cost      (edge_count times)
//! source target
//! ```
//!
//! Line breaks are not significant; they are only tracked for error messages.

use std::fmt::Display;
use std::str::FromStr;

use crate::cost::Cost;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone)]
pub struct Problem<C> {
    pub graph: Graph<C>,
    pub source: NodeId,
    pub target: NodeId,
}

pub fn parse_problem<C>(text: &str) -> Result<Problem<C>>
where
    C: Cost + FromStr,
    C::Err: Display,
{
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));

    let nodes: usize = next_value(&mut tokens, "node count")?;
    let edge_count: usize = next_value(&mut tokens, "edge count")?;
    let mut graph = Graph::new(nodes)?;
    for _ in 0..edge_count {
        let from: NodeId = next_value(&mut tokens, "edge source")?;
        let to: NodeId = next_value(&mut tokens, "edge target")?;
        let cost: C = next_value(&mut tokens, "edge cost")?;
        graph.add_edge(from, to, cost)?;
    }
    let source: NodeId = next_value(&mut tokens, "query source")?;
    let target: NodeId = next_value(&mut tokens, "query target")?;
    graph.check_node(source)?;
    graph.check_node(target)?;
    Ok(Problem { graph, source, target })
}

fn next_value<'a, T, I>(tokens: &mut I, expected: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (line, tok) = tokens.next().ok_or(Error::UnexpectedEof { expected })?;
    tok.parse()
        .map_err(|e| Error::Parse { line, message: format!("invalid {expected} {tok:?}: {e}") })
}
