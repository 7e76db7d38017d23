//! Ordered listings of nodes and edges.
//!
//! Nodes are listed by `(out_degree, value)` and edges by
//! `(weight, destination)`, both ascending. The text forms write one entry per
//! line: a node as its value, an edge as `"<destination> <weight>"`, and a
//! node without edges as the single line `(null)`.

use core::fmt::Display;
use std::io::{self, Write};

use super::DiGraph;
use crate::error::Result;

const NO_EDGES: &str = "(null)";

impl<N: Ord, E: Ord> DiGraph<N, E> {
    fn nodes_by_degree(&self) -> Vec<&N> {
        let mut ranked: Vec<(usize, &N)> = self
            .nodes
            .iter()
            .filter_map(|node| {
                self.identities
                    .get(node.identity())
                    .map(|value| (node.out_degree(), value))
            })
            .collect();
        ranked.sort_unstable();
        ranked.into_iter().map(|(_, value)| value).collect()
    }

    /// Edges of the node at `pos` as `(destination, weight)`, ordered by weight
    /// then destination.
    pub(super) fn ordered_edges(&self, pos: usize) -> Vec<(&N, &E)> {
        let mut edges: Vec<(&N, &E)> = self.nodes[pos].outgoing(&self.identities).collect();
        edges.sort_unstable_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
        edges
    }

    /// Writes every node value, one per line, ordered by out-degree then value.
    ///
    /// # Errors
    /// Returns [`GraphError::Io`](crate::GraphError::Io) if `out` fails.
    pub fn write_nodes<W: Write>(&self, out: &mut W) -> Result<()>
    where
        N: Display,
    {
        for value in self.nodes_by_degree() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    /// Writes the edges leaving `src`, one `"<destination> <weight>"` per line.
    ///
    /// A node without edges produces the single line `(null)`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
    /// `src` is absent and [`GraphError::Io`](crate::GraphError::Io) if `out`
    /// fails.
    pub fn write_edges<W: Write>(&self, src: &N, out: &mut W) -> Result<()>
    where
        N: Display,
        E: Display,
    {
        let edges = self.ordered_edges(self.require(src)?);
        if edges.is_empty() {
            writeln!(out, "{NO_EDGES}")?;
        }
        for (destination, weight) in edges {
            writeln!(out, "{destination} {weight}")?;
        }
        Ok(())
    }

    /// Prints the node listing to stdout.
    pub fn print_nodes(&self)
    where
        N: Display,
    {
        for value in self.nodes_by_degree() {
            println!("{value}");
        }
    }

    /// Prints the edge listing of `src` to stdout.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
    /// `src` is absent; nothing is printed in that case.
    pub fn print_edges(&self, src: &N) -> Result<()>
    where
        N: Display,
        E: Display,
    {
        let mut buf = Vec::new();
        self.write_edges(src, &mut buf)?;
        io::stdout().lock().write_all(&buf)?;
        Ok(())
    }
}

impl<N: Ord + Clone, E: Ord + Clone> DiGraph<N, E> {
    /// Node values in listing order.
    pub fn sorted_nodes(&self) -> Vec<N> {
        self.nodes_by_degree().into_iter().cloned().collect()
    }

    /// Edges leaving `src` as `(destination, weight)`, in listing order.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if
    /// `src` is absent.
    pub fn sorted_edges(&self, src: &N) -> Result<Vec<(N, E)>> {
        let pos = self.require(src)?;
        Ok(self
            .ordered_edges(pos)
            .into_iter()
            .map(|(destination, weight)| (destination.clone(), weight.clone()))
            .collect())
    }
}
