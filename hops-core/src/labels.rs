//! Label Index: bijective mapping between human-readable labels and nodes.

use crate::error::{HopsError, Result};
use crate::graph::GraphStore;
use std::collections::HashMap;

/// How user input is matched against stored labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelCase {
    /// Compare trimmed, lower-cased forms on both sides.
    #[default]
    Insensitive,
    /// Compare labels byte for byte.
    Exact,
}

/// Maps labels to node identifiers and back.
///
/// Built once and never mutated. The forward map is keyed by the lookup form
/// of each label (see [`LabelCase`]); the reverse map keeps labels exactly as
/// written in the label data so they display unchanged.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    case: LabelCase,
    label_to_id: HashMap<String, String>,
    id_to_label: HashMap<String, String>,
}

impl LabelIndex {
    /// Build a case-insensitive index from `(node, label)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self::from_entries_with_case(entries, LabelCase::Insensitive)
    }

    /// Build the index from `(node, label)` pairs with the given matching rule.
    ///
    /// Repeating a pair is harmless. Binding one label to two nodes, or one
    /// node to two labels, is rejected. Under [`LabelCase::Insensitive`] two
    /// labels that differ only in case count as the same label.
    pub fn from_entries_with_case<I, S>(entries: I, case: LabelCase) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut index = Self {
            case,
            ..Self::default()
        };

        for (id, label) in entries {
            let id = id.into();
            let label = label.into();
            let key = index.key(&label);

            if let Some(existing) = index.label_to_id.get(&key) {
                if existing != &id {
                    return Err(HopsError::DuplicateLabel {
                        label,
                        first: existing.clone(),
                        second: id,
                    });
                }
                continue;
            }
            if let Some(existing) = index.id_to_label.get(&id) {
                return Err(HopsError::DuplicateNode {
                    node: id,
                    first: existing.clone(),
                    second: label,
                });
            }

            index.label_to_id.insert(key, id.clone());
            index.id_to_label.insert(id, label);
        }

        Ok(index)
    }

    /// Trim and lower-case a label.
    pub fn normalize(label: &str) -> String {
        label.trim().to_lowercase()
    }

    fn key(&self, label: &str) -> String {
        match self.case {
            LabelCase::Insensitive => Self::normalize(label),
            LabelCase::Exact => label.to_string(),
        }
    }

    /// Matching rule this index was built with.
    pub fn case(&self) -> LabelCase {
        self.case
    }

    /// Resolve a label to its node identifier.
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.label_to_id
            .get(&self.key(label))
            .map(String::as_str)
            .ok_or_else(|| HopsError::LabelNotFound {
                label: label.to_string(),
            })
    }

    /// Label bound to `id`, as written in the label data.
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.id_to_label.get(id).map(String::as_str)
    }

    /// Number of labelled nodes.
    pub fn len(&self) -> usize {
        self.label_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_to_id.is_empty()
    }

    /// Nodes referenced by `graph` that carry no label, in graph order.
    pub fn unlabeled(&self, graph: &GraphStore) -> Vec<String> {
        graph
            .node_ids()
            .filter(|id| !self.id_to_label.contains_key(*id))
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_index() -> LabelIndex {
        LabelIndex::from_entries(vec![("1", "alice"), ("2", "bob"), ("3", "carol")]).unwrap()
    }

    #[test]
    fn test_resolve_and_reverse() {
        let index = create_test_index();
        assert_eq!(index.resolve("alice").unwrap(), "1");
        assert_eq!(index.label_of("2"), Some("bob"));
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_resolve_unknown_label() {
        let index = create_test_index();
        let err = index.resolve("zed").unwrap_err();
        assert!(matches!(err, HopsError::LabelNotFound { ref label } if label == "zed"));
    }

    #[test]
    fn test_resolve_ignores_case_by_default() {
        let index = LabelIndex::from_entries(vec![("1", "Alice"), ("2", "bob")]).unwrap();
        assert_eq!(index.case(), LabelCase::Insensitive);
        for input in ["Alice", "alice", "ALICE", "  aLiCe \n"] {
            assert_eq!(index.resolve(input).unwrap(), "1", "input {:?}", input);
        }
        assert_eq!(index.resolve("BOB").unwrap(), "2");
        // Display keeps the label as written.
        assert_eq!(index.label_of("1"), Some("Alice"));
    }

    #[test]
    fn test_resolve_exact_case() {
        let index =
            LabelIndex::from_entries_with_case(vec![("1", "Alice")], LabelCase::Exact).unwrap();
        assert_eq!(index.resolve("Alice").unwrap(), "1");
        assert!(index.resolve("alice").is_err());
        assert!(index.resolve("ALICE").is_err());
    }

    #[test]
    fn test_labels_colliding_after_lowercasing_rejected() {
        let err = LabelIndex::from_entries(vec![("1", "Alice"), ("2", "alice")]).unwrap_err();
        assert!(matches!(
            err,
            HopsError::DuplicateLabel { ref first, ref second, .. } if first == "1" && second == "2"
        ));

        // Distinct under exact matching.
        let index = LabelIndex::from_entries_with_case(
            vec![("1", "Alice"), ("2", "alice")],
            LabelCase::Exact,
        )
        .unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_label_of_unknown_id() {
        let index = create_test_index();
        assert_eq!(index.label_of("99"), None);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = LabelIndex::from_entries(vec![("1", "alice"), ("2", "alice")]).unwrap_err();
        assert!(matches!(err, HopsError::DuplicateLabel { .. }));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let err = LabelIndex::from_entries(vec![("1", "alice"), ("1", "alicia")]).unwrap_err();
        assert!(matches!(err, HopsError::DuplicateNode { .. }));
    }

    #[test]
    fn test_repeated_identical_entry_is_harmless() {
        let index = LabelIndex::from_entries(vec![("1", "alice"), ("1", "alice")]).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unlabeled_nodes() {
        let index = create_test_index();
        let graph = GraphStore::from_edges(vec![("1", "2"), ("2", "7"), ("8", "3")]);
        assert_eq!(index.unlabeled(&graph), vec!["7", "8"]);
    }
}
