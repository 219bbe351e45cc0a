//! Adjacency-list directed graph with typed node and edge data.

use crate::{
    graph::{
        node::NodeId,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

/// Internal storage for one edge.
#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    source: NodeId,
    target: NodeId,
    data: E,
}

/// A directed graph with typed node data (`N`) and edge data (`E`).
///
/// Nodes and edges are stored in insertion order; adjacency lists provide
/// O(1) amortized insertion and efficient forward/backward traversal. The
/// container itself permits parallel edges — callers that want a simple
/// graph guard insertions with [`has_edge`](DirectedGraph::has_edge).
///
/// Build the graph single-threaded, then use it immutably; nothing here is
/// shared or mutated across analysis runs.
///
/// # Examples
///
/// ```rust
/// use symgraph::graph::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_edge(a, b, ())?;
///
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.has_edge(a, b));
/// assert!(!graph.has_edge(b, a));
/// # Ok::<(), symgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node data, indexed by `NodeId`
    nodes: Vec<N>,
    /// Edge records in insertion order
    edges: Vec<EdgeRecord<E>>,
    /// Successor node ids per node
    outgoing: Vec<Vec<NodeId>>,
    /// Predecessor node ids per node
    incoming: Vec<Vec<NodeId>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates an empty graph with pre-allocated node and edge capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a node, returning its sequentially assigned id.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<()> {
        for (role, node) in [("source", source), ("target", target)] {
            if node.index() >= self.nodes.len() {
                return Err(Error::GraphError(format!(
                    "{role} node {node} does not exist in graph with {} nodes",
                    self.nodes.len()
                )));
            }
        }

        self.edges.push(EdgeRecord {
            source,
            target,
            data,
        });
        self.outgoing[source.index()].push(target);
        self.incoming[target.index()].push(source);
        Ok(())
    }

    /// Returns a reference to the data of `node`, if it exists.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns a mutable reference to the data of `node`, if it exists.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if an edge `source -> target` already exists.
    #[must_use]
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.outgoing
            .get(source.index())
            .is_some_and(|succs| succs.contains(&target))
    }

    /// Returns an iterator over all nodes with their identifiers, in
    /// insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns an iterator over all edges as `(source, target)` pairs, in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target))
    }

    /// Returns an iterator over the successors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing[node.index()].iter().copied()
    }

    /// Returns an iterator over the predecessors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming[node.index()].iter().copied()
    }

    /// Returns a reference to the data of the edge at insertion position
    /// `index`, if it exists.
    #[must_use]
    pub fn edge_data(&self, index: usize) -> Option<&E> {
        self.edges.get(index).map(|e| &e.data)
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()].iter().copied()
    }
}

impl<N, E> Predecessors for DirectedGraph<N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()].iter().copied()
    }
}
