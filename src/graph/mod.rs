//! Generic directed-graph infrastructure.
//!
//! This module provides the graph container and algorithms the symbol-level
//! layers are built on. The split mirrors the seams the algorithms need:
//!
//! - [`NodeId`] - strongly-typed node index
//! - [`DirectedGraph`] - adjacency-list graph with typed node and edge data
//! - [`GraphBase`], [`Successors`], [`Predecessors`] - traits the algorithms
//!   are written against, so they do not depend on the concrete container
//! - [`dominators`] - immediate-dominator computation (Lengauer-Tarjan)
//!
//! The dominator algorithm is implemented here rather than delegated to a
//! graph library so its correctness and complexity are owned and verifiable.

pub mod dominators;

mod directed;
mod node;
mod traits;

pub use directed::DirectedGraph;
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, Successors};
