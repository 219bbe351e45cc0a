//! Name-level dominance analysis over a built reference graph.
//!
//! [`dominator_tree`] resolves a root symbol to its node, runs the
//! id-level computation from [`graph::dominators`](crate::graph::dominators),
//! and translates the result back into decoded display names.

use std::collections::HashMap;

use crate::{
    graph::dominators::compute_dominators,
    refgraph::RefGraph,
    Error, Result,
};

/// Immediate-dominator mapping over the symbols reachable from a root.
///
/// The domain is every reachable symbol except the root itself; the root has
/// no dominator. The mapping forms a tree rooted at the analysis root: every
/// dominator chain terminates there with no cycles.
#[derive(Debug, Clone)]
pub struct DominatorTree {
    root: String,
    idom: HashMap<String, String>,
}

impl DominatorTree {
    /// Returns the root symbol the analysis was performed from.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the immediate dominator of `symbol`.
    ///
    /// `None` for the root and for symbols unreachable from it.
    #[must_use]
    pub fn immediate_dominator(&self, symbol: &str) -> Option<&str> {
        self.idom.get(symbol).map(String::as_str)
    }

    /// Returns `true` if `symbol` is reachable from the root.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        symbol == self.root || self.idom.contains_key(symbol)
    }

    /// Returns the number of symbols in the mapping's domain (the root is
    /// not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.idom.len()
    }

    /// Returns `true` if no symbol other than the root is reachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idom.is_empty()
    }

    /// Returns an iterator over `(symbol, immediate dominator)` pairs in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.idom.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Computes the immediate-dominator tree of `graph` from `root`.
///
/// Symbols unreachable from the root are excluded from the result; that is
/// not an error. A graph description already produced from the same run
/// remains valid when this fails.
///
/// # Errors
///
/// Returns [`Error::UnknownRoot`] if `root` is not a node in the graph.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use symgraph::{dominance::dominator_tree, refgraph::RefGraph};
///
/// let edges = [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")];
/// let graph = RefGraph::build(edges, &HashMap::new())?;
///
/// let tree = dominator_tree(&graph, "A")?;
/// // D's two predecessors both route through A
/// assert_eq!(tree.immediate_dominator("D"), Some("A"));
/// assert_eq!(tree.immediate_dominator("B"), Some("A"));
/// assert_eq!(tree.immediate_dominator("A"), None);
/// # Ok::<(), symgraph::Error>(())
/// ```
pub fn dominator_tree(graph: &RefGraph, root: &str) -> Result<DominatorTree> {
    let root_id = graph
        .node_id(root)
        .ok_or_else(|| Error::UnknownRoot(root.to_string()))?;

    let doms = compute_dominators(graph.graph(), root_id);

    let mut idom = HashMap::with_capacity(doms.iter().count());
    for (node, dominator) in doms.iter() {
        let name = graph
            .name(node)
            .ok_or_else(|| Error::GraphError(format!("node {node} has no name")))?;
        let dom_name = graph
            .name(dominator)
            .ok_or_else(|| Error::GraphError(format!("node {dominator} has no name")))?;
        idom.insert(name.to_string(), dom_name.to_string());
    }

    Ok(DominatorTree {
        root: root.to_string(),
        idom,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(edges: &[(&str, &str)]) -> RefGraph {
        RefGraph::build(edges.iter().copied(), &HashMap::new()).unwrap()
    }

    #[test]
    fn test_unknown_root() {
        let graph = build(&[("A", "B")]);
        match dominator_tree(&graph, "nope") {
            Err(Error::UnknownRoot(root)) => assert_eq!(root, "nope"),
            other => panic!("expected UnknownRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_diamond() {
        let graph = build(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
        let tree = dominator_tree(&graph, "A").unwrap();

        assert_eq!(tree.root(), "A");
        assert_eq!(tree.immediate_dominator("B"), Some("A"));
        assert_eq!(tree.immediate_dominator("C"), Some("A"));
        assert_eq!(tree.immediate_dominator("D"), Some("A"));
        assert_eq!(tree.immediate_dominator("A"), None);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_unreachable_symbols_excluded() {
        let graph = build(&[("A", "B"), ("X", "Y")]);
        let tree = dominator_tree(&graph, "A").unwrap();

        assert!(tree.contains("A"));
        assert!(tree.contains("B"));
        assert!(!tree.contains("X"));
        assert_eq!(tree.immediate_dominator("Y"), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_chain_terminates_at_root() {
        let graph = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let tree = dominator_tree(&graph, "A").unwrap();

        let mut current = "D";
        let mut hops = 0;
        while let Some(dom) = tree.immediate_dominator(current) {
            current = dom;
            hops += 1;
            assert!(hops <= 3, "dominator chain does not terminate");
        }
        assert_eq!(current, "A");
    }

    #[test]
    fn test_root_with_no_successors() {
        let graph = build(&[("A", "B")]);
        let tree = dominator_tree(&graph, "B").unwrap();
        assert!(tree.is_empty());
        assert!(tree.contains("B"));
        assert!(!tree.contains("A"));
    }

    #[test]
    fn test_mangled_root_must_be_pre_decoded() {
        // Node keys are decoded names; a raw mangled root does not resolve.
        let graph = build(&[(
            "_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE",
            "helper",
        )]);
        assert!(dominator_tree(&graph, "_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE").is_err());
        let tree = dominator_tree(&graph, "core::fmt::Debug::debug_tup").unwrap();
        assert_eq!(tree.immediate_dominator("helper"), Some("core::fmt::Debug::debug_tup"));
    }
}
