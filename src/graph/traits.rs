//! Trait seams between the graph container and the algorithms.
//!
//! Algorithms are written against these traits rather than the concrete
//! [`DirectedGraph`](crate::graph::DirectedGraph), so any adjacency structure
//! that can enumerate its nodes and edges can be analyzed. All adjacency
//! queries return iterators for lazy evaluation.

use crate::graph::NodeId;

/// Core graph properties: node count and node iteration.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, in ascending index
    /// order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `node` — the targets of
    /// edges originating at it.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of `node` — the sources of
    /// edges targeting it.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
