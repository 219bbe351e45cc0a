//! Render-sink seam for handing dominator trees to external renderers.
//!
//! Layout and image export are presentation concerns that live outside this
//! crate. The core emits nodes and parent-pointer edges into a
//! [`RenderSink`]; [`DotSink`] is the bundled implementation, writing DOT
//! text to any [`io::Write`]. Renderers wanting force-directed layout or SVG
//! export implement the trait themselves.

use std::io;

use crate::{dominance::DominatorTree, refgraph::RefGraph, Result};

/// Receives a dominator tree one element at a time.
///
/// [`emit_dominator_tree`] calls [`node`](RenderSink::node) once per tree
/// node (root included) and [`parent_edge`](RenderSink::parent_edge) once per
/// non-root node, in that order.
pub trait RenderSink {
    /// Accepts one tree node with its size-derived visual weight.
    ///
    /// The weight is `100 * size / max_size`, where `max_size` is the
    /// largest size annotation anywhere in the reference graph; nodes with
    /// no size annotation get weight 0.
    ///
    /// # Errors
    ///
    /// Implementations return any error from their output target.
    fn node(&mut self, name: &str, weight: f64) -> Result<()>;

    /// Accepts one parent-pointer edge from `child` to its immediate
    /// dominator `parent`.
    ///
    /// # Errors
    ///
    /// Implementations return any error from their output target.
    fn parent_edge(&mut self, child: &str, parent: &str) -> Result<()>;
}

/// A [`RenderSink`] that writes the tree as DOT text.
///
/// The opening delimiter is written on construction and the closing one by
/// [`finish`](DotSink::finish); dropping the sink without calling `finish`
/// leaves the output unterminated.
pub struct DotSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> DotSink<W> {
    /// Creates a sink, writing the opening `digraph {` delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if the write
    /// fails.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "digraph {{")?;
        Ok(DotSink { writer })
    }

    /// Writes the closing delimiter and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if the write
    /// fails.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.writer, "}}")?;
        Ok(self.writer)
    }
}

impl<W: io::Write> RenderSink for DotSink<W> {
    fn node(&mut self, name: &str, weight: f64) -> Result<()> {
        writeln!(self.writer, "  \"{name}\" [weight={weight:.2}];")?;
        Ok(())
    }

    fn parent_edge(&mut self, child: &str, parent: &str) -> Result<()> {
        writeln!(self.writer, "  \"{parent}\" -> \"{child}\";")?;
        Ok(())
    }
}

/// Emits `tree` into `sink`, deriving visual weights from the size
/// annotations in `graph`.
///
/// Weights are normalized against the largest size annotation in the whole
/// reference graph, not just the tree, so weights stay comparable across
/// trees computed from different roots of the same graph.
///
/// # Errors
///
/// Propagates the first error the sink returns.
pub fn emit_dominator_tree<S: RenderSink>(
    graph: &RefGraph,
    tree: &DominatorTree,
    sink: &mut S,
) -> Result<()> {
    let max_size = graph
        .nodes()
        .filter_map(|(_, node)| node.size)
        .max()
        .unwrap_or(0);

    let weight_of = |name: &str| -> f64 {
        if max_size == 0 {
            return 0.0;
        }
        graph
            .node_id(name)
            .and_then(|id| graph.size(id))
            .map_or(0.0, |size| 100.0 * size as f64 / max_size as f64)
    };

    sink.node(tree.root(), weight_of(tree.root()))?;
    for (child, _) in tree.iter() {
        sink.node(child, weight_of(child))?;
    }
    for (child, parent) in tree.iter() {
        sink.parent_edge(child, parent)?;
    }
    Ok(())
}
