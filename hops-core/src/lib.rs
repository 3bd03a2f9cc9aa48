//! Hops Core - hop-distance and shortest-path queries over directed graphs.
//!
//! A graph is built once from a flat edge list and paired with a label index
//! that maps human-readable names to node identifiers. Queries then ask how
//! many hops separate two nodes, or for one concrete shortest path.
//!
//! # Components
//!
//! - **Graph Store** ([`graph`]): directed adjacency over opaque string ids
//! - **Label Index** ([`labels`]): bijective label <-> id mapping
//! - **Hop-Distance Engine** ([`distance`]): level-synchronized BFS with
//!   distinct `DeadEnd` / `Unreachable` outcomes
//! - **Path Materializer** ([`path`]): one shortest path via petgraph
//! - **Session** ([`session`]): label-level queries returning typed errors
//!
//! # Example
//!
//! ```
//! use hops_core::{hop_distance, GraphStore, HopDistance};
//!
//! let graph = GraphStore::from_edges(vec![("a", "b"), ("b", "c"), ("a", "c")]);
//! assert_eq!(hop_distance(&graph, "a", "c"), HopDistance::Hops(1));
//! assert_eq!(hop_distance(&graph, "c", "a"), HopDistance::DeadEnd);
//! ```

pub mod distance;
pub mod error;
pub mod graph;
pub mod labels;
pub mod loader;
pub mod path;
pub mod session;

pub use distance::{hop_distance, hop_distance_traced, HopDistance, TraversalStats};
pub use error::{HopsError, Result};
pub use graph::GraphStore;
pub use labels::{LabelCase, LabelIndex};
pub use path::{shortest_path, HopPath};
pub use session::{Dataset, DatasetSummary, Endpoint, IntegrityPolicy, PathAnswer, StepsAnswer};
