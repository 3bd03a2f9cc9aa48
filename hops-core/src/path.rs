//! Path Materializer.
//!
//! Produces one concrete shortest path by delegating to petgraph's A* with a
//! unit edge cost and a zero heuristic, which degenerates to an unweighted
//! shortest-path search. The tie-break among equal-length paths is whatever
//! petgraph's search order yields; it is fixed for a given graph.

use crate::error::{HopsError, Result};
use crate::graph::GraphStore;
use crate::labels::LabelIndex;
use petgraph::algo::astar;
use serde::Serialize;

/// An ordered sequence of node identifiers from source to target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopPath {
    nodes: Vec<String>,
}

impl HopPath {
    /// Node identifiers, source first.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Translate every node to its label.
    pub fn labels(&self, index: &LabelIndex) -> Result<Vec<String>> {
        self.nodes
            .iter()
            .map(|id| {
                index
                    .label_of(id)
                    .map(String::from)
                    .ok_or_else(|| HopsError::MissingLabel { node: id.clone() })
            })
            .collect()
    }

    /// Translate nodes to labels, falling back to the identifier for nodes
    /// that have none.
    pub fn labels_or_ids(&self, index: &LabelIndex) -> Vec<String> {
        self.nodes
            .iter()
            .map(|id| index.label_of(id).unwrap_or(id.as_str()).to_string())
            .collect()
    }
}

/// Find one shortest directed path from `source` to `target`.
pub fn shortest_path(graph: &GraphStore, source: &str, target: &str) -> Result<HopPath> {
    if source == target {
        return Ok(HopPath {
            nodes: vec![source.to_string()],
        });
    }

    let no_path = || HopsError::NoPath {
        from: source.to_string(),
        to: target.to_string(),
    };

    let start = graph.index_of(source).ok_or_else(no_path)?;
    let end = graph.index_of(target).ok_or_else(no_path)?;

    let (cost, indices) = astar(
        graph.inner(),
        start,
        |finish| finish == end,
        |_| 1usize,
        |_| 0usize,
    )
    .ok_or_else(no_path)?;

    let nodes: Vec<String> = indices
        .into_iter()
        .map(|idx| graph.id_at(idx).to_string())
        .collect();
    tracing::debug!(source, target, hops = cost, "materialized shortest path");

    Ok(HopPath { nodes })
}
