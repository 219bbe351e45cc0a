//! The deduplicated symbol reference graph.
//!
//! [`RefGraph::build`] consumes the raw edge stream from
//! [`listing::ref_edges`](crate::listing::ref_edges) and the size table from
//! [`listing::symbol_sizes`](crate::listing::symbol_sizes), decodes every
//! name through [`demangle`](crate::demangle::demangle), and produces a
//! simple directed graph: one node per decoded name, at most one edge per
//! ordered node pair. [`RefGraph::to_dot`] writes the graph out as DOT text.

use std::collections::HashMap;
use std::fmt::Write;

use crate::{
    demangle::demangle,
    graph::{DirectedGraph, NodeId},
    Result,
};

/// Node payload: the decoded, quote-escaped display name and the symbol's
/// byte size when the size table provides one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolNode {
    /// Decoded, quote-escaped display name; also the node's graph key
    pub name: String,
    /// Byte size from the size table, `None` when the table has no entry
    pub size: Option<u64>,
}

/// A directed reference graph of named symbols.
///
/// Nodes are keyed by decoded display name. Duplicate raw edges collapse:
/// repeated references between the same pair of symbols never become
/// parallel edges. Every symbol appearing as either endpoint of any edge is
/// a node, whether or not it has a size entry; size entries for symbols that
/// never appear in the edge stream are simply unused.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use symgraph::refgraph::RefGraph;
///
/// let edges = [("main", "helper"), ("main", "helper"), ("helper", "exit")];
/// let sizes = HashMap::from([(String::from("helper"), 16u64)]);
///
/// let graph = RefGraph::build(edges, &sizes)?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2); // the duplicate collapsed
/// # Ok::<(), symgraph::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RefGraph {
    graph: DirectedGraph<SymbolNode, ()>,
    names: HashMap<String, NodeId>,
}

impl RefGraph {
    /// Builds a reference graph from a raw edge stream and a raw size table.
    ///
    /// Both endpoint names of every edge are decoded and quote-escaped before
    /// they are used as node keys; so is every size-table key before lookup.
    /// Sizes attach only to symbols that actually appear in the edge stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEncoding`](crate::Error::MalformedEncoding)
    /// if any symbol name fails to decode.
    pub fn build<I, S>(edges: I, sizes: &HashMap<String, u64>) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut result = RefGraph::default();

        for (caller, callee) in edges {
            let source = result.intern(caller.as_ref())?;
            let target = result.intern(callee.as_ref())?;
            if !result.graph.has_edge(source, target) {
                result.graph.add_edge(source, target, ())?;
            }
        }

        for (raw, &size) in sizes {
            let name = display_name(raw)?;
            if let Some(&id) = result.names.get(&name) {
                if let Some(node) = result.graph.node_mut(id) {
                    node.size = Some(size);
                }
            }
        }

        Ok(result)
    }

    /// Decodes `raw` and returns the id of its node, adding the node if this
    /// is the first time the decoded name appears.
    fn intern(&mut self, raw: &str) -> Result<NodeId> {
        let name = display_name(raw)?;
        if let Some(&id) = self.names.get(&name) {
            return Ok(id);
        }
        let id = self.graph.add_node(SymbolNode {
            name: name.clone(),
            size: None,
        });
        self.names.insert(name, id);
        Ok(id)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the node id for a decoded display name, if present.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Returns the display name of `node`, if it exists.
    #[must_use]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.graph.node(node).map(|n| n.name.as_str())
    }

    /// Returns the byte size of `node`, if it exists and the size table had
    /// an entry for it.
    #[must_use]
    pub fn size(&self, node: NodeId) -> Option<u64> {
        self.graph.node(node).and_then(|n| n.size)
    }

    /// Returns an iterator over all nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SymbolNode)> + '_ {
        self.graph.nodes()
    }

    /// Returns the underlying directed graph, for traversal and analysis.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph<SymbolNode, ()> {
        &self.graph
    }

    /// Renders the graph as DOT text.
    ///
    /// One line per edge, then one annotation line per sized node carrying a
    /// `size` attribute and a human-readable label:
    ///
    /// ```text
    /// digraph {
    ///   "main" -> "helper";
    ///   "helper" [size=16 label="helper\n16 bytes"];
    /// }
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        for (source, target) in self.graph.edges() {
            let src = self.graph.node(source).map_or("", |n| n.name.as_str());
            let dest = self.graph.node(target).map_or("", |n| n.name.as_str());
            let _ = writeln!(out, "  \"{src}\" -> \"{dest}\";");
        }
        for (_, node) in self.graph.nodes() {
            if let Some(size) = node.size {
                let _ = writeln!(
                    out,
                    "  \"{name}\" [size={size} label=\"{name}\\n{size} bytes\"];",
                    name = node.name
                );
            }
        }
        out.push_str("}\n");
        out
    }
}

/// Decodes a raw symbol and escapes embedded quote characters so the result
/// is safe to emit inside a double-quoted DOT identifier.
fn display_name(raw: &str) -> Result<String> {
    Ok(demangle(raw)?.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_sizes() -> HashMap<String, u64> {
        HashMap::new()
    }

    #[test]
    fn test_empty_input() {
        let graph = RefGraph::build(std::iter::empty::<(&str, &str)>(), &no_sizes()).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.to_dot(), "digraph {\n}\n");
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let edges = [("A", "B"), ("A", "B"), ("B", "C")];
        let graph = RefGraph::build(edges, &no_sizes()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_every_endpoint_becomes_a_node() {
        let edges = [("a", "b"), ("c", "a")];
        let graph = RefGraph::build(edges, &no_sizes()).unwrap();
        for name in ["a", "b", "c"] {
            assert!(graph.node_id(name).is_some(), "missing node {name}");
        }
    }

    #[test]
    fn test_names_are_decoded_before_keying() {
        // caller mangled in one edge, already decoded in concept elsewhere
        let edges = [
            ("_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE", "plain"),
            ("other", "plain"),
        ];
        let graph = RefGraph::build(edges, &no_sizes()).unwrap();
        assert!(graph.node_id("core::fmt::Debug::debug_tup").is_some());
        assert!(graph
            .node_id("_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE")
            .is_none());
    }

    #[test]
    fn test_size_keys_are_decoded_before_lookup() {
        let edges = [("main", "_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE")];
        let sizes = HashMap::from([(
            String::from("_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE"),
            32u64,
        )]);
        let graph = RefGraph::build(edges, &sizes).unwrap();
        let id = graph.node_id("core::fmt::Debug::debug_tup").unwrap();
        assert_eq!(graph.size(id), Some(32));
    }

    #[test]
    fn test_unreferenced_size_entries_are_unused() {
        let edges = [("main", "helper")];
        let sizes = HashMap::from([
            (String::from("helper"), 16u64),
            (String::from("never_referenced"), 99u64),
        ]);
        let graph = RefGraph::build(edges, &sizes).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.node_id("never_referenced").is_none());
    }

    #[test]
    fn test_node_without_size_entry() {
        let edges = [("main", "helper")];
        let sizes = HashMap::from([(String::from("helper"), 16u64)]);
        let graph = RefGraph::build(edges, &sizes).unwrap();
        assert_eq!(graph.size(graph.node_id("main").unwrap()), None);
        assert_eq!(graph.size(graph.node_id("helper").unwrap()), Some(16));
    }

    #[test]
    fn test_malformed_name_propagates() {
        let edges = [("main", "_ZN99short")];
        assert!(RefGraph::build(edges, &no_sizes()).is_err());
    }

    #[test]
    fn test_dot_output_exact() {
        let edges = [("main", "helper")];
        let sizes = HashMap::from([(String::from("helper"), 16u64)]);
        let graph = RefGraph::build(edges, &sizes).unwrap();
        assert_eq!(
            graph.to_dot(),
            "digraph {\n  \"main\" -> \"helper\";\n  \"helper\" [size=16 label=\"helper\\n16 bytes\"];\n}\n"
        );
    }

    #[test]
    fn test_quote_escaping_in_names() {
        let edges = [("has\"quote", "plain")];
        let graph = RefGraph::build(edges, &no_sizes()).unwrap();
        assert!(graph.node_id("has\\\"quote").is_some());
        assert!(graph.to_dot().contains("\"has\\\"quote\" -> \"plain\";"));
    }

    #[test]
    fn test_self_reference() {
        let edges = [("recurse", "recurse")];
        let graph = RefGraph::build(edges, &no_sizes()).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }
}
