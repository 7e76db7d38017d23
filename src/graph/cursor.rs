//! Node enumeration in insertion order.
//!
//! [`Cursor`] offers the `begin` / `end` / `next` / `value` protocol, and
//! [`Nodes`] is the plain iterator form. Both borrow the graph, so it cannot be
//! mutated while a traversal is live, and any number of traversals can run side
//! by side.

use core::iter::FusedIterator;
use core::slice;

use super::digraph::DiGraph;
use super::identity::IdentityTable;
use super::node::Node;

/// A restartable position over a graph's nodes.
pub struct Cursor<'g, N, E> {
    graph: &'g DiGraph<N, E>,
    position: usize,
}

impl<'g, N, E> Cursor<'g, N, E> {
    pub(crate) fn new(graph: &'g DiGraph<N, E>) -> Self {
        Self { graph, position: 0 }
    }

    /// Moves back to the first node.
    pub fn begin(&mut self) {
        self.position = 0;
    }

    /// Returns `true` once the cursor has moved past the last node.
    pub fn end(&self) -> bool {
        self.position >= self.graph.node_count()
    }

    /// Advances by one node. Does nothing at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if !self.end() {
            self.position += 1;
        }
    }

    /// Value of the current node, `None` at the end.
    pub fn value(&self) -> Option<&'g N> {
        self.graph.value_at(self.position)
    }
}

impl<N, E> Clone for Cursor<'_, N, E> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            position: self.position,
        }
    }
}

/// Iterator over node values in insertion order.
pub struct Nodes<'g, N, E> {
    identities: &'g IdentityTable<N>,
    inner: slice::Iter<'g, Node<E>>,
}

impl<'g, N, E> Nodes<'g, N, E> {
    pub(crate) fn new(identities: &'g IdentityTable<N>, nodes: &'g [Node<E>]) -> Self {
        Self {
            identities,
            inner: nodes.iter(),
        }
    }
}

impl<'g, N, E> Iterator for Nodes<'g, N, E> {
    type Item = &'g N;

    fn next(&mut self) -> Option<Self::Item> {
        let identities = self.identities;
        self.inner.find_map(|node| identities.get(node.identity()))
    }

    // Every stored node resolves, so the slice length is exact.
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N, E> DoubleEndedIterator for Nodes<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let identities = self.identities;
        self.inner
            .by_ref()
            .rev()
            .find_map(|node| identities.get(node.identity()))
    }
}

impl<N, E> ExactSizeIterator for Nodes<'_, N, E> {}

impl<N, E> FusedIterator for Nodes<'_, N, E> {}
