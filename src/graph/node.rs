//! Graph nodes and their outgoing edge lists.
//!
//! A `Node` owns one identity slot and the edges leaving it. Everything here is
//! local to a single node; the graph decides which nodes to call and runs the
//! graph-wide passes.

use super::edge::Edge;
use super::identity::{Identity, IdentityTable};

/// Internal node structure.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    identity: Identity,
    edges: Vec<Edge<E>>, // insertion order
}

impl<E> Node<E> {
    pub(crate) fn new(identity: Identity) -> Self {
        Self {
            identity,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn identity(&self) -> Identity {
        self.identity
    }

    #[inline]
    pub(crate) fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if an edge with exactly this `(weight, destination)` exists.
    pub(crate) fn has_edge(&self, destination: Identity, weight: &E) -> bool
    where
        E: PartialEq,
    {
        self.edges.iter().any(|edge| edge.matches(destination, weight))
    }

    /// Returns `true` if any edge, of any weight, leads to `destination`.
    pub(crate) fn has_destination(&self, destination: Identity) -> bool {
        self.edges.iter().any(|edge| edge.destination() == destination)
    }

    /// Appends an edge. Uniqueness is the caller's responsibility.
    #[inline]
    pub(crate) fn push_edge(&mut self, destination: Identity, weight: E) {
        self.edges.push(Edge::new(destination, weight));
    }

    /// Removes the edge matching `(weight, destination)`, if any.
    pub(crate) fn remove_edge(&mut self, destination: Identity, weight: &E) -> bool
    where
        E: PartialEq,
    {
        match self.edges.iter().position(|edge| edge.matches(destination, weight)) {
            Some(pos) => {
                self.edges.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Moves every edge out of this node.
    pub(crate) fn take_edges(&mut self) -> Vec<Edge<E>> {
        std::mem::take(&mut self.edges)
    }

    /// Points every edge aimed at `from` to `to` instead. Returns how many moved.
    pub(crate) fn redirect(&mut self, from: Identity, to: Identity) -> usize {
        let mut moved = 0;
        for edge in self.edges.iter_mut().filter(|edge| edge.destination() == from) {
            edge.retarget(to);
            moved += 1;
        }
        moved
    }

    /// Drops later copies of any `(weight, destination)` pair, keeping the first.
    pub(crate) fn dedup(&mut self) -> usize
    where
        E: PartialEq,
    {
        let before = self.edges.len();
        let mut kept: Vec<Edge<E>> = Vec::with_capacity(before);
        for edge in self.edges.drain(..) {
            if !kept.iter().any(|k| k.matches(edge.destination(), edge.weight())) {
                kept.push(edge);
            }
        }
        self.edges = kept;
        before - self.edges.len()
    }

    /// Drops every edge whose destination no longer resolves.
    pub(crate) fn sweep<N>(&mut self, identities: &IdentityTable<N>) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.is_dangling(identities));
        before - self.edges.len()
    }

    /// Outgoing edges as resolved `(destination, weight)` pairs, in insertion order.
    pub(crate) fn outgoing<'a, N>(
        &'a self,
        identities: &'a IdentityTable<N>,
    ) -> impl Iterator<Item = (&'a N, &'a E)> + 'a {
        self.edges
            .iter()
            .filter_map(move |edge| edge.resolve(identities).map(|dst| (dst, edge.weight())))
    }
}
