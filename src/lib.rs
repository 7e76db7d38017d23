//! # `wgraph` - Generic Directed Weighted Graph
//!
//! An in-memory directed graph whose nodes are identified by their value and
//! whose edges carry a weight. Supports insertion, in-place renaming, merging
//! one node into another, deletion, membership and connectivity queries, and
//! ordered listings.
//!
//! ## Ownership Model
//!
//! Each node owns one slot of an [`IdentityTable`]. Edges name their
//! destination by [`Identity`] (slot index + generation) and never own it:
//!
//! - **Renaming** rewrites the slot in place, so every edge into the node keeps
//!   resolving, now to the new value.
//! - **Deleting** vacates the slot and bumps its generation. Edges into the
//!   deleted node stop resolving and are swept before the call returns.
//! - **Merging** re-homes outgoing edges, redirects incoming ones, and
//!   collapses any duplicates the union produced.
//!
//! ## Invariants
//!
//! 1. No two nodes hold equal values.
//! 2. Every edge destination resolves to a node in the graph.
//! 3. No node holds two edges with the same `(weight, destination)`.
//!
//! ## Errors
//!
//! Operations that need a node to exist fail with
//! [`GraphError::NodeNotFound`]. Requests that would change nothing (adding an
//! existing node or edge, renaming onto a taken value) return `false`.
//! Deleting something absent is a no-op.
//!
//! ## Example
//!
//! ```rust
//! use wgraph::DiGraph;
//!
//! let mut graph: DiGraph<&str, u32> = ["a", "b", "c"].into_iter().collect();
//! graph.add_edge(&"a", &"b", 5)?;
//! graph.add_edge(&"c", &"b", 9)?;
//! graph.add_edge(&"b", &"c", 1)?;
//!
//! graph.merge_replace(&"b", &"a")?;
//!
//! assert!(!graph.is_node(&"b"));
//! assert_eq!(graph.sorted_edges(&"c")?, vec![("a", 9)]);
//! assert!(graph.is_connected(&"a", &"c")?);
//! # Ok::<(), wgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{Cursor, DiGraph, Identity, IdentityTable, Nodes};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Identities stay small enough to copy freely into every edge.
    assert!(mem::size_of::<Identity>() <= 2 * mem::size_of::<usize>());

    // An empty graph is two vectors plus table bookkeeping; no hidden boxes.
    assert!(mem::size_of::<DiGraph<u64, u64>>() <= 10 * mem::size_of::<usize>());
};
