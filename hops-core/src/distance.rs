//! Hop-Distance Engine.
//!
//! Answers "how many hops separate A from B" with a level-synchronized
//! breadth-first search over a [`GraphStore`]. A single FIFO frontier does
//! double duty as "pending expansion" and "pending target check": every entry
//! is tagged with the hop count at which it was first discovered, and the
//! target is recognised as soon as it enters the frontier, before any other
//! node of that level is expanded.
//!
//! Two hashed sets keep the search linear in edges:
//! - `pending`: nodes currently waiting in the frontier, with their distance
//! - `visited`: nodes already expanded (the source counts as expanded)
//!
//! A successor already in either set is never queued again, so every node is
//! assigned exactly one distance.
//!
//! # Outcomes
//!
//! - `Hops(0)` when source and target are the same node
//! - `DeadEnd` when the source has no outgoing edges
//! - `Unreachable` when the frontier drains without meeting the target

use crate::graph::GraphStore;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Result of a hop-distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "hops", rename_all = "snake_case")]
pub enum HopDistance {
    /// Target found this many edges away from the source.
    Hops(usize),
    /// No directed path leads from source to target.
    Unreachable,
    /// The source has no outgoing edges at all.
    DeadEnd,
}

impl HopDistance {
    /// The hop count, if the target was reached.
    pub fn hops(self) -> Option<usize> {
        match self {
            HopDistance::Hops(n) => Some(n),
            HopDistance::Unreachable | HopDistance::DeadEnd => None,
        }
    }
}

impl fmt::Display for HopDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopDistance::Hops(n) => write!(f, "{} hop(s)", n),
            HopDistance::Unreachable => write!(f, "unreachable"),
            HopDistance::DeadEnd => write!(f, "dead end"),
        }
    }
}

/// Bookkeeping counters for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Frontier heads whose successors were examined.
    pub expanded: usize,
    /// Nodes assigned a distance (including the target, if found).
    pub discovered: usize,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}

/// Minimum number of hops from `source` to `target`.
pub fn hop_distance(graph: &GraphStore, source: &str, target: &str) -> HopDistance {
    hop_distance_traced(graph, source, target).0
}

/// Like [`hop_distance`], also returning traversal counters.
pub fn hop_distance_traced(
    graph: &GraphStore,
    source: &str,
    target: &str,
) -> (HopDistance, TraversalStats) {
    if source == target {
        return (HopDistance::Hops(0), TraversalStats::default());
    }

    let first_level = graph.successors(source);
    if first_level.is_empty() {
        tracing::debug!(source, "source has no outgoing edges");
        return (HopDistance::DeadEnd, TraversalStats::default());
    }

    let mut state = TraversalState::new(source);
    state.enqueue_all(first_level, 1);

    let result = state.run(graph, target);
    tracing::debug!(
        source,
        target,
        result = %result,
        expanded = state.stats.expanded,
        discovered = state.stats.discovered,
        peak_frontier = state.stats.peak_frontier,
        "hop distance query finished"
    );
    (result, state.stats)
}

/// A node discovered at `distance` hops, waiting to be expanded.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry<'g> {
    node: &'g str,
    distance: usize,
}

/// Per-query state; created fresh for every call and dropped on return.
struct TraversalState<'g> {
    frontier: VecDeque<FrontierEntry<'g>>,
    pending: HashMap<&'g str, usize>,
    visited: HashSet<&'g str>,
    stats: TraversalStats,
}

impl<'g> TraversalState<'g> {
    fn new(source: &'g str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(source);
        Self {
            frontier: VecDeque::new(),
            pending: HashMap::new(),
            visited,
            stats: TraversalStats::default(),
        }
    }

    /// Queue every successor not already pending or expanded.
    fn enqueue_all(&mut self, successors: Vec<&'g str>, distance: usize) {
        for node in successors {
            if self.visited.contains(node) || self.pending.contains_key(node) {
                continue;
            }
            self.pending.insert(node, distance);
            self.frontier.push_back(FrontierEntry { node, distance });
            self.stats.discovered += 1;
        }
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn run(&mut self, graph: &'g GraphStore, target: &str) -> HopDistance {
        loop {
            // Target check precedes expansion: a node found at this level wins
            // before any sibling is expanded.
            if let Some(&distance) = self.pending.get(target) {
                return HopDistance::Hops(distance);
            }

            let head = match self.frontier.pop_front() {
                Some(entry) => entry,
                None => return HopDistance::Unreachable,
            };
            self.pending.remove(head.node);
            self.visited.insert(head.node);
            self.stats.expanded += 1;

            // FIFO order guarantees heads are consumed level by level, so the
            // head's own tag is the level being expanded.
            self.enqueue_all(graph.successors(head.node), head.distance + 1);
        }
    }
}
