#![deny(missing_docs)]

//! # symgraph
//!
//! Turns the textual output of binary-analysis tools into a directed
//! reference graph of named code and data symbols, annotated with byte sizes,
//! and computes dominance relationships over that graph.
//!
//! The pipeline has four stages:
//!
//! 1. **Parse** — [`listing::ref_edges`] extracts `(caller, callee)` pairs
//!    from an objdump-style disassembly listing, and [`listing::symbol_sizes`]
//!    extracts a symbol → size table from `nm -S` output.
//! 2. **Decode** — [`demangle::demangle`] turns legacy `_ZN…E` compressed
//!    path encodings into readable qualified names.
//! 3. **Build** — [`refgraph::RefGraph::build`] deduplicates the edge stream
//!    into a simple directed graph keyed by decoded names, carrying size
//!    annotations where the size table provides them.
//! 4. **Analyze** — [`dominance::dominator_tree`] computes the
//!    immediate-dominator mapping over the subgraph reachable from a chosen
//!    root symbol.
//!
//! ## Quick Start
//!
//! ```rust
//! use symgraph::prelude::*;
//!
//! let asm = "\
//! 0000000000001000 <main>:
//!     1004:   e8 00 00 00 00   callq  <helper>
//! 0000000000001020 <helper>:
//! ";
//! let sizes = symbol_sizes("0000000000001020 0000000000000010 T helper");
//!
//! let graph = RefGraph::build(ref_edges(asm), &sizes)?;
//! assert_eq!(graph.edge_count(), 1);
//! print!("{}", graph.to_dot());
//!
//! let tree = dominator_tree(&graph, "main")?;
//! assert_eq!(tree.immediate_dominator("helper"), Some("main"));
//! # Ok::<(), symgraph::Error>(())
//! ```
//!
//! ## External tools
//!
//! The [`tools`] module invokes `{triple}objdump -d` and `{triple}nm -S` as
//! subprocess text producers. Their failure is a fatal
//! [`Error::InputTool`] before any partial graph is produced. Everything past
//! that boundary is plain text in, plain text out, and fully deterministic.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Malformed
//! size-table lines and unrecognized disassembly lines are recovered silently
//! (they contribute nothing); malformed symbol encodings are not — the
//! decoder propagates [`Error::MalformedEncoding`] rather than falling back
//! to a truncated or raw name.

#[macro_use]
mod error;

/// Immediate-dominator computation over a built reference graph.
pub mod dominance;

/// Decoding of compressed `_ZN…E` path encodings into qualified names.
pub mod demangle;

/// Generic directed-graph container and the dominator algorithm.
pub mod graph;

/// Parsers for the two tool outputs: disassembly listings and size tables.
pub mod listing;

/// Convenient re-exports of the most commonly used types and functions.
pub mod prelude;

/// The deduplicated symbol reference graph and its DOT description.
pub mod refgraph;

/// Render-sink seam for handing dominator trees to external renderers.
pub mod render;

/// Subprocess boundary for the disassembler and symbol-table tool.
pub mod tools;

/// `symgraph` Result type, used by all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
