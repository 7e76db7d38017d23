//! `DiGraph` — a directed, weighted graph keyed by node value.
//!
//! Node values live in an [`IdentityTable`]; each [`Node`] owns one slot and
//! its outgoing edges, and every edge refers to its destination by
//! [`Identity`]. Renaming a node rewrites the slot in place, so edges follow
//! the rename for free. Deleting a node vacates the slot; edges that pointed
//! at it stop resolving and are swept before the deleting call returns.
//!
//! Invariants upheld after every public call:
//! 1. Node values are unique.
//! 2. Every edge destination resolves to a node in the graph.
//! 3. No node holds two edges with the same `(weight, destination)`.
//!
//! # Performance
//! - `add_node`, `is_node`: O(V) (values are located by linear scan)
//! - `add_edge`, `delete_edge`, `is_connected`: O(V + out-degree)
//! - `delete_node`, `merge_replace`: O(V + E)

mod listing;
#[cfg(test)]
mod tests;

use core::fmt;

use tracing::{debug, trace};

use super::cursor::{Cursor, Nodes};
use super::identity::{Identity, IdentityTable};
use super::node::Node;
use crate::error::{GraphError, Result};

/// A generic directed graph with weighted edges.
///
/// `N` is the node value and `E` the edge weight. Both need a total order so
/// that listings are deterministic.
#[derive(Clone)]
pub struct DiGraph<N, E> {
    identities: IdentityTable<N>,
    nodes: Vec<Node<E>>, // insertion order
}

impl<N, E> DiGraph<N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            identities: IdentityTable::new(),
            nodes: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            identities: IdentityTable::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        let removed = self.nodes.len();
        self.nodes.clear();
        self.identities.clear();
        debug!(removed, "graph cleared");
    }

    /// Moves the contents out, leaving this graph empty.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Iterates node values in insertion order.
    pub fn nodes(&self) -> Nodes<'_, N, E> {
        Nodes::new(&self.identities, &self.nodes)
    }

    /// Returns a restartable cursor positioned at the first node.
    pub fn cursor(&self) -> Cursor<'_, N, E> {
        Cursor::new(self)
    }

    /// Value of the node at `position` in insertion order.
    #[inline]
    pub(crate) fn value_at(&self, position: usize) -> Option<&N> {
        let node = self.nodes.get(position)?;
        self.identities.get(node.identity())
    }

    /// Drops dangling edges from every node.
    fn sweep(&mut self) -> usize {
        let identities = &self.identities;
        self.nodes.iter_mut().map(|node| node.sweep(identities)).sum()
    }
}

impl<N: Ord, E: Ord> DiGraph<N, E> {
    fn position(&self, value: &N) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| self.identities.get(node.identity()) == Some(value))
    }

    fn identity_of(&self, value: &N) -> Option<Identity> {
        self.position(value).map(|pos| self.nodes[pos].identity())
    }

    fn require(&self, value: &N) -> Result<usize> {
        self.position(value).ok_or(GraphError::NodeNotFound)
    }

    /// Adds a node holding `value`.
    ///
    /// Returns `false` and leaves the graph untouched if the value is already
    /// present.
    pub fn add_node(&mut self, value: N) -> bool {
        if self.is_node(&value) {
            return false;
        }
        let identity = self.identities.insert(value);
        self.nodes.push(Node::new(identity));
        trace!(nodes = self.nodes.len(), "node added");
        true
    }

    /// Adds the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` if `src` already has an edge to `dst` with an equal
    /// weight.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `src` or `dst` is absent.
    pub fn add_edge(&mut self, src: &N, dst: &N, weight: E) -> Result<bool> {
        let src_pos = self.require(src)?;
        let destination = self.require(dst).map(|pos| self.nodes[pos].identity())?;

        let node = &mut self.nodes[src_pos];
        if node.has_edge(destination, &weight) {
            return Ok(false);
        }
        node.push_edge(destination, weight);
        trace!(out_degree = node.out_degree(), "edge added");
        Ok(true)
    }

    /// Renames the node holding `old` to hold `new`.
    ///
    /// The node keeps its identity, so its outgoing edges and every edge
    /// pointing at it carry over unchanged. Returns `Ok(false)` without
    /// mutating anything if `new` is already taken.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `old` is absent.
    pub fn replace(&mut self, old: &N, new: N) -> Result<bool> {
        let identity = self.require(old).map(|pos| self.nodes[pos].identity())?;
        if self.is_node(&new) {
            return Ok(false);
        }
        if let Some(value) = self.identities.get_mut(identity) {
            *value = new;
        }
        debug!("node renamed in place");
        Ok(true)
    }

    /// Folds the node holding `old` into the node holding `new`.
    ///
    /// Every edge leaving `old` is re-added on `new` and every edge arriving at
    /// `old` is redirected to `new`. Edges that become duplicates are
    /// collapsed, and `old` is removed. Merging a node into itself does
    /// nothing.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `old` or `new` is absent.
    pub fn merge_replace(&mut self, old: &N, new: &N) -> Result<()> {
        let old_pos = self.require(old)?;
        let new_pos = self.require(new)?;
        if old_pos == new_pos {
            return Ok(());
        }
        let old_id = self.nodes[old_pos].identity();
        let new_id = self.nodes[new_pos].identity();

        let mut migrated = 0usize;
        for edge in self.nodes[old_pos].take_edges() {
            let (destination, weight) = edge.into_parts();
            let target = &mut self.nodes[new_pos];
            if !target.has_edge(destination, &weight) {
                target.push_edge(destination, weight);
                migrated += 1;
            }
        }

        let mut redirected = 0usize;
        let mut collapsed = 0usize;
        for node in &mut self.nodes {
            let moved = node.redirect(old_id, new_id);
            if moved > 0 {
                redirected += moved;
                collapsed += node.dedup();
            }
        }

        self.nodes.remove(old_pos);
        self.identities.remove(old_id);
        let swept = self.sweep();

        debug!(migrated, redirected, collapsed, swept, "nodes merged");
        Ok(())
    }

    /// Deletes the node holding `value` and every edge into or out of it.
    ///
    /// Does nothing if the value is absent.
    pub fn delete_node(&mut self, value: &N) {
        let Some(pos) = self.position(value) else {
            return;
        };
        let node = self.nodes.remove(pos);
        self.identities.remove(node.identity());
        let swept = self.sweep();
        debug!(dropped = node.out_degree(), swept, "node deleted");
    }

    /// Deletes the edge `src -> dst` with `weight`.
    ///
    /// Does nothing if either node or the edge is absent.
    pub fn delete_edge(&mut self, src: &N, dst: &N, weight: &E) {
        let (Some(src_pos), Some(destination)) = (self.position(src), self.identity_of(dst)) else {
            return;
        };
        if self.nodes[src_pos].remove_edge(destination, weight) {
            trace!("edge deleted");
        }
    }

    /// Returns `true` if a node holds `value`.
    pub fn is_node(&self, value: &N) -> bool {
        self.position(value).is_some()
    }

    /// Returns `true` if `src` has at least one edge, of any weight, to `dst`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `src` or `dst` is absent.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        let src_pos = self.require(src)?;
        let destination = self.require(dst).map(|pos| self.nodes[pos].identity())?;
        Ok(self.nodes[src_pos].has_destination(destination))
    }

    /// Number of edges leaving `value`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `value` is absent.
    pub fn out_degree(&self, value: &N) -> Result<usize> {
        self.require(value).map(|pos| self.nodes[pos].out_degree())
    }
}

impl<N, E> Default for DiGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord, E: Ord> PartialEq for DiGraph<N, E> {
    /// Two graphs are equal when they hold the same values and every node has
    /// the same set of `(weight, destination)` edges. Insertion order is
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && (0..self.nodes.len()).all(|pos| {
                let Some(value) = self.value_at(pos) else {
                    return false;
                };
                other
                    .position(value)
                    .is_some_and(|other_pos| self.ordered_edges(pos) == other.ordered_edges(other_pos))
            })
    }
}

impl<N: Ord, E: Ord> Eq for DiGraph<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for DiGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for node in &self.nodes {
            if let Some(value) = self.identities.get(node.identity()) {
                let edges: Vec<_> = node.outgoing(&self.identities).collect();
                map.entry(value, &edges);
            }
        }
        map.finish()
    }
}

impl<N: Ord, E: Ord> Extend<N> for DiGraph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}

impl<N: Ord, E: Ord> FromIterator<N> for DiGraph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<'g, N, E> IntoIterator for &'g DiGraph<N, E> {
    type Item = &'g N;
    type IntoIter = Nodes<'g, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}
