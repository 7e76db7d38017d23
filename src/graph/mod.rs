//! Directed weighted graph and its building blocks.
//!
//! - `identity`: generational slot table holding node values
//! - `edge` / `node`: per-node edge storage
//! - `digraph`: the graph container and its structural algorithms
//! - `cursor`: node enumeration

pub mod cursor;
pub mod digraph;
pub mod identity;
mod edge;
mod node;

pub use cursor::{Cursor, Nodes};
pub use digraph::DiGraph;
pub use identity::{Identity, IdentityTable};
