//! Directed weighted edges.

use super::identity::{Identity, IdentityTable};

/// An outgoing edge, stored on its source node.
///
/// The destination is held as an [`Identity`], never as the node itself. Once
/// the destination node is deleted the identity stops resolving and the edge
/// is dangling until the next sweep drops it.
#[derive(Debug, Clone)]
pub(crate) struct Edge<E> {
    weight: E,
    destination: Identity,
}

impl<E> Edge<E> {
    #[inline]
    pub(crate) fn new(destination: Identity, weight: E) -> Self {
        Self {
            weight,
            destination,
        }
    }

    #[inline]
    pub(crate) fn weight(&self) -> &E {
        &self.weight
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Identity, E) {
        (self.destination, self.weight)
    }

    #[inline]
    pub(crate) fn destination(&self) -> Identity {
        self.destination
    }

    /// Looks up the destination value, `None` if the destination is gone.
    #[inline]
    pub(crate) fn resolve<'t, N>(&self, identities: &'t IdentityTable<N>) -> Option<&'t N> {
        identities.get(self.destination)
    }

    #[inline]
    pub(crate) fn is_dangling<N>(&self, identities: &IdentityTable<N>) -> bool {
        !identities.contains(self.destination)
    }

    #[inline]
    pub(crate) fn retarget(&mut self, destination: Identity) {
        self.destination = destination;
    }

    /// Edge identity is `(weight, destination)`.
    ///
    /// Live values are unique and own exactly one identity, so comparing
    /// identities is the same as comparing destination values.
    #[inline]
    pub(crate) fn matches(&self, destination: Identity, weight: &E) -> bool
    where
        E: PartialEq,
    {
        self.destination == destination && self.weight == *weight
    }
}
