//! Immediate-dominator computation using the Lengauer-Tarjan algorithm.
//!
//! A node `d` **dominates** a node `n` if every path from the root to `n`
//! passes through `d`. The **immediate dominator** of `n` is the unique node
//! that strictly dominates `n` but does not strictly dominate any other
//! strict dominator of `n`. Making each node's immediate dominator its parent
//! yields the dominator tree, rooted at the analysis root.
//!
//! This implementation runs in O((V + E) log V) with path compression. The
//! domain of the result is exactly the set of nodes reachable from the root:
//! unreachable nodes have no dominator entry, and neither does the root
//! itself.

use crate::graph::{NodeId, Predecessors, Successors};

/// Result of an immediate-dominator computation.
///
/// Maps every node reachable from the root — except the root itself — to its
/// immediate dominator. The mapping forms a tree: every dominator chain
/// terminates at the root with no cycles.
///
/// # Examples
///
/// ```rust
/// use symgraph::graph::{dominators::compute_dominators, DirectedGraph};
///
/// // Diamond: a -> b, a -> c, b -> d, c -> d
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let c = graph.add_node("c");
/// let d = graph.add_node("d");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, d, ())?;
/// graph.add_edge(c, d, ())?;
///
/// let doms = compute_dominators(&graph, a);
/// // d's two predecessors route through a, so a is its immediate dominator
/// assert_eq!(doms.immediate_dominator(d), Some(a));
/// assert_eq!(doms.immediate_dominator(a), None);
/// # Ok::<(), symgraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dominators {
    /// The analysis root
    root: NodeId,
    /// Immediate dominator per node index; `None` for the root and for nodes
    /// unreachable from it
    idom: Vec<Option<NodeId>>,
}

impl Dominators {
    /// Returns the root the computation was performed from.
    #[must_use]
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the immediate dominator of `node`.
    ///
    /// `None` for the root and for nodes unreachable from it.
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.idom.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` was reachable from the root.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        node == self.root || self.immediate_dominator(node).is_some()
    }

    /// Returns `true` if `a` dominates `b` (every node dominates itself).
    ///
    /// Walks `b`'s dominator chain toward the root, so this is O(depth).
    /// Always `false` when `b` is unreachable.
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        if !self.is_reachable(b) {
            return false;
        }
        let mut current = b;
        loop {
            if current == a {
                return true;
            }
            match self.immediate_dominator(current) {
                Some(idom) => current = idom,
                None => return false,
            }
        }
    }

    /// Returns an iterator over `(node, immediate dominator)` pairs for every
    /// reachable node other than the root, in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.idom
            .iter()
            .enumerate()
            .filter_map(|(i, idom)| idom.map(|d| (NodeId::new(i), d)))
    }
}

/// Computes immediate dominators for all nodes reachable from `root`.
///
/// The four phases of Lengauer-Tarjan: depth-first numbering from the root,
/// semidominator computation in reverse DFS order, implicit immediate
/// dominators via bucket processing, and a final forward pass making them
/// explicit.
pub fn compute_dominators<G>(graph: &G, root: NodeId) -> Dominators
where
    G: Successors + Predecessors,
{
    let n = graph.node_count();
    if n == 0 || root.index() >= n {
        return Dominators {
            root,
            idom: vec![None; n],
        };
    }

    let mut state = LengauerTarjan::new(n);
    state.number_from(graph, root);
    state.compute(graph);

    let mut idom = vec![None; n];
    for i in 1..state.vertex.len() {
        let w = state.vertex[i];
        idom[w.index()] = Some(state.idom[w.index()]);
    }

    Dominators { root, idom }
}

/// Working arrays for one Lengauer-Tarjan run, all indexed by raw node id.
struct LengauerTarjan {
    /// DFS number per node, 0 meaning unreachable; numbering starts at 1
    dfnum: Vec<usize>,
    /// Nodes in DFS order (`vertex[dfnum - 1]` is the node)
    vertex: Vec<NodeId>,
    /// DFS-tree parent per node
    parent: Vec<NodeId>,
    /// Semidominator candidate per node
    semi: Vec<NodeId>,
    /// Immediate dominator per node (meaningful for reachable non-roots)
    idom: Vec<NodeId>,
    /// Forest ancestor per node for link-eval, `None` when not yet linked
    ancestor: Vec<Option<NodeId>>,
    /// Node with minimal semidominator on the compressed path to the forest
    /// root
    best: Vec<NodeId>,
    /// Nodes whose semidominator is the indexing node
    bucket: Vec<Vec<NodeId>>,
}

impl LengauerTarjan {
    fn new(n: usize) -> Self {
        LengauerTarjan {
            dfnum: vec![0; n],
            vertex: Vec::with_capacity(n),
            parent: (0..n).map(NodeId::new).collect(),
            semi: (0..n).map(NodeId::new).collect(),
            idom: (0..n).map(NodeId::new).collect(),
            ancestor: vec![None; n],
            best: (0..n).map(NodeId::new).collect(),
            bucket: vec![Vec::new(); n],
        }
    }

    /// Iterative DFS from `root`, assigning numbers and tree parents.
    fn number_from<G: Successors>(&mut self, graph: &G, root: NodeId) {
        let mut stack = vec![(root, root)];
        while let Some((node, parent)) = stack.pop() {
            if self.dfnum[node.index()] != 0 {
                continue;
            }
            self.dfnum[node.index()] = self.vertex.len() + 1;
            self.vertex.push(node);
            self.parent[node.index()] = parent;

            let successors: Vec<NodeId> = graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if self.dfnum[succ.index()] == 0 {
                    stack.push((succ, node));
                }
            }
        }
    }

    fn compute<G: Predecessors>(&mut self, graph: &G) {
        // Reverse DFS order, excluding the root
        for i in (1..self.vertex.len()).rev() {
            let w = self.vertex[i];
            let parent_w = self.parent[w.index()];

            // semi(w) = min over edges v -> w of: dfnum(v) when v comes
            // before w in DFS order, else semi(eval(v))
            let preds: Vec<NodeId> = graph.predecessors(w).collect();
            for v in preds {
                if self.dfnum[v.index()] == 0 {
                    // unreachable predecessor, irrelevant to dominance
                    continue;
                }
                let u = self.eval(v);
                if self.semi_num(u) < self.semi_num(w) {
                    self.semi[w.index()] = self.semi[u.index()];
                }
            }

            let semi_w = self.semi[w.index()];
            self.bucket[semi_w.index()].push(w);
            self.ancestor[w.index()] = Some(parent_w);

            // Implicitly resolve the bucket of w's parent
            let pending = std::mem::take(&mut self.bucket[parent_w.index()]);
            for v in pending {
                let u = self.eval(v);
                self.idom[v.index()] = if self.semi[u.index()] == self.semi[v.index()] {
                    parent_w
                } else {
                    u
                };
            }
        }

        // Forward pass: turn implicit immediate dominators into explicit ones
        for i in 1..self.vertex.len() {
            let w = self.vertex[i];
            if self.idom[w.index()] != self.semi[w.index()] {
                self.idom[w.index()] = self.idom[self.idom[w.index()].index()];
            }
        }
    }

    /// DFS number of a node's current semidominator.
    #[inline]
    fn semi_num(&self, node: NodeId) -> usize {
        self.dfnum[self.semi[node.index()].index()]
    }

    /// Returns the node with minimal semidominator on the path from `v` to
    /// its forest root, compressing the path as a side effect.
    fn eval(&mut self, v: NodeId) -> NodeId {
        if self.ancestor[v.index()].is_none() {
            return v;
        }

        // Collect the path from v up to the child of the forest root, then
        // fold best/ancestor downward. Equivalent to recursive compression
        // without the recursion depth.
        let mut path = Vec::new();
        let mut current = v;
        while let Some(anc) = self.ancestor[current.index()] {
            if self.ancestor[anc.index()].is_none() {
                break;
            }
            path.push(current);
            current = anc;
        }
        for &node in path.iter().rev() {
            let anc = self.ancestor[node.index()].expect("on compressed path");
            let best_anc = self.best[anc.index()];
            if self.semi_num(best_anc) < self.semi_num(self.best[node.index()]) {
                self.best[node.index()] = best_anc;
            }
            self.ancestor[node.index()] = self.ancestor[anc.index()];
        }

        self.best[v.index()]
    }
}
