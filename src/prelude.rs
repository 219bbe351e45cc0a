//! Common imports for working with symbol reference graphs.
//!
//! ```rust
//! use symgraph::prelude::*;
//! ```

pub use crate::demangle::demangle;
pub use crate::dominance::{dominator_tree, DominatorTree};
pub use crate::listing::{ref_edges, symbol_sizes};
pub use crate::refgraph::RefGraph;
pub use crate::render::{emit_dominator_tree, DotSink, RenderSink};
pub use crate::{Error, Result};
