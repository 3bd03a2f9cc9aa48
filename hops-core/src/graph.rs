//! Graph Store backed by petgraph.
//!
//! Holds the directed adjacency relation built once from an edge list. Node
//! identifiers are opaque strings; a node that only ever appears as an edge
//! target has an empty successor set.
//!
//! # Architecture
//!
//! ```text
//! edge list (text) -> loader -> GraphStore (DiGraph) -> distance / path
//! ```
//!
//! Successors are reported in first-insertion order of their edges, which is
//! the discovery order the hop-distance engine relies on for tie-breaks.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Immutable directed graph over string node identifiers.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphStore {
    /// Build a graph from `(source, target)` pairs.
    ///
    /// Duplicate edges collapse into one; self-loops are kept.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for (src, dst) in edges {
            let s = store.intern(src.into());
            let d = store.intern(dst.into());
            store.graph.update_edge(s, d, ());
        }
        tracing::debug!(
            nodes = store.graph.node_count(),
            edges = store.graph.edge_count(),
            "built graph store"
        );
        store
    }

    fn intern(&mut self, id: String) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_map.insert(id, idx);
        idx
    }

    /// Direct successors of `id`, in edge insertion order.
    ///
    /// Empty when the node is absent or has no outgoing edges.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        match self.node_map.get(id) {
            Some(&idx) => self
                .successor_indices(idx)
                .into_iter()
                .map(|n| self.graph[n].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// petgraph lists neighbours newest-first; flip to insertion order.
    pub(crate) fn successor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        out.reverse();
        out
    }

    /// Whether `id` has at least one outgoing edge.
    pub fn has_successors(&self, id: &str) -> bool {
        self.node_map
            .get(id)
            .map(|&idx| self.graph.neighbors(idx).next().is_some())
            .unwrap_or(false)
    }

    /// Check if a node appears in the edge data.
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct directed edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All node identifiers, in first-appearance order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Nodes that have no outgoing edges.
    pub fn dead_ends(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn id_at(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphStore {
        // a -> b, a -> c, b -> d, c -> d, e is a pure target of d
        GraphStore::from_edges(vec![
            ("a", "b"),
            ("a", "c"),
            ("b", "d"),
            ("c", "d"),
            ("d", "e"),
        ])
    }

    #[test]
    fn test_successors_in_insertion_order() {
        let graph = GraphStore::from_edges(vec![("a", "z"), ("a", "m"), ("a", "b")]);
        assert_eq!(graph.successors("a"), vec!["z", "m", "b"]);
    }

    #[test]
    fn test_target_only_node_has_no_successors() {
        let graph = create_test_graph();
        assert!(graph.contains("e"));
        assert!(graph.successors("e").is_empty());
        assert!(!graph.has_successors("e"));
    }

    #[test]
    fn test_absent_node_has_no_successors() {
        let graph = create_test_graph();
        assert!(!graph.contains("nonexistent"));
        assert!(graph.successors("nonexistent").is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_idempotent() {
        let graph = GraphStore::from_edges(vec![("a", "b"), ("a", "b"), ("a", "b")]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors("a"), vec!["b"]);
    }

    #[test]
    fn test_self_loop() {
        let graph = GraphStore::from_edges(vec![("a", "a"), ("a", "b")]);
        assert_eq!(graph.successors("a"), vec!["a", "b"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_counts_and_ids() {
        let graph = create_test_graph();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        let ids: Vec<&str> = graph.node_ids().collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_dead_ends() {
        let graph = create_test_graph();
        assert_eq!(graph.dead_ends(), vec!["e"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphStore::from_edges(Vec::<(String, String)>::new());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.dead_ends().is_empty());
    }
}
