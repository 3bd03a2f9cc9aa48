//! Query session over a loaded dataset.
//!
//! A [`Dataset`] owns the Graph Store and Label Index and answers label-level
//! queries. Failures come back as [`HopsError`] values so the caller decides
//! whether to re-prompt or stop; nothing here prints or exits.

use crate::distance::{hop_distance, HopDistance};
use crate::error::{HopsError, Result};
use crate::graph::GraphStore;
use crate::labels::{LabelCase, LabelIndex};
use crate::loader;
use crate::path::shortest_path;
use serde::Serialize;
use std::path::Path;

/// How to treat edge-list nodes that have no label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrityPolicy {
    /// Refuse to build the dataset.
    Strict,
    /// Log a warning and continue.
    #[default]
    Warn,
}

/// Graph and labels loaded together, immutable for the session.
#[derive(Debug, Clone)]
pub struct Dataset {
    graph: GraphStore,
    labels: LabelIndex,
    integrity: IntegrityPolicy,
    unlabeled: usize,
}

/// A node as shown to the user, with its label as written in the label data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub id: String,
    pub label: String,
}

/// Answer to a hop-count query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepsAnswer {
    pub from: Endpoint,
    pub to: Endpoint,
    pub distance: HopDistance,
}

/// Answer to a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathAnswer {
    pub from: Endpoint,
    pub to: Endpoint,
    /// Labels along the path, source first; `None` when no path exists.
    /// Unlabelled nodes on the path show their identifier.
    pub path: Option<Vec<String>>,
    /// Edges on the path (0 when no path exists).
    pub hops: usize,
}

/// Size and health figures for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub label_count: usize,
    pub dead_end_count: usize,
    pub unlabeled_count: usize,
}

impl Dataset {
    /// Combine a graph and index, checking that every node has a label.
    pub fn new(
        graph: GraphStore,
        labels: LabelIndex,
        integrity: IntegrityPolicy,
    ) -> Result<Self> {
        let missing = labels.unlabeled(&graph);
        if !missing.is_empty() {
            match integrity {
                IntegrityPolicy::Strict => {
                    return Err(HopsError::UnlabeledNodes { nodes: missing });
                }
                IntegrityPolicy::Warn => {
                    tracing::warn!(
                        count = missing.len(),
                        first = %missing[0],
                        "edge list references nodes with no label"
                    );
                }
            }
        }

        Ok(Self {
            graph,
            labels,
            integrity,
            unlabeled: missing.len(),
        })
    }

    /// Load both input files and build the dataset.
    pub fn load(
        edges_path: &Path,
        labels_path: &Path,
        integrity: IntegrityPolicy,
        case: LabelCase,
    ) -> Result<Self> {
        let edges = loader::read_edge_file(edges_path)?;
        let entries = loader::read_label_file(labels_path)?;
        let graph = GraphStore::from_edges(edges);
        let labels = LabelIndex::from_entries_with_case(entries, case)?;
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            labels = labels.len(),
            "dataset loaded"
        );
        Self::new(graph, labels, integrity)
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }

    fn endpoint(&self, label: &str) -> Result<Endpoint> {
        let id = self.labels.resolve(label)?;
        Ok(Endpoint {
            id: id.to_string(),
            label: self.labels.label_of(id).unwrap_or(label).to_string(),
        })
    }

    /// Hop count between two labelled nodes.
    pub fn steps(&self, from_label: &str, to_label: &str) -> Result<StepsAnswer> {
        let from = self.endpoint(from_label)?;
        let to = self.endpoint(to_label)?;
        let distance = hop_distance(&self.graph, &from.id, &to.id);
        Ok(StepsAnswer { from, to, distance })
    }

    /// One shortest path between two labelled nodes, as labels.
    ///
    /// A missing path is an ordinary answer (`path: None`), not an error.
    pub fn path(&self, from_label: &str, to_label: &str) -> Result<PathAnswer> {
        let from = self.endpoint(from_label)?;
        let to = self.endpoint(to_label)?;

        match shortest_path(&self.graph, &from.id, &to.id) {
            Ok(path) => {
                let labels = match self.integrity {
                    IntegrityPolicy::Strict => path.labels(&self.labels)?,
                    IntegrityPolicy::Warn => path.labels_or_ids(&self.labels),
                };
                Ok(PathAnswer {
                    from,
                    to,
                    hops: path.hops(),
                    path: Some(labels),
                })
            }
            Err(HopsError::NoPath { .. }) => Ok(PathAnswer {
                from,
                to,
                path: None,
                hops: 0,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            label_count: self.labels.len(),
            dead_end_count: self.graph.dead_ends().len(),
            unlabeled_count: self.unlabeled,
        }
    }
}
