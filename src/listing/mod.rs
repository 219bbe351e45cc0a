//! Parsers for the two textual tool outputs.
//!
//! Both parsers are fully permissive about lines they do not understand:
//! unrecognized disassembly lines contribute no edges, and size-table lines
//! that do not split into exactly four fields are skipped. Neither parser
//! ever returns an error.
//!
//! - [`ref_edges`] - lazy `(caller, callee)` pairs from a disassembly listing
//! - [`symbol_sizes`] - symbol → byte-size map from `nm -S` style output

mod disasm;
mod sizes;

pub use disasm::{ref_edges, RefEdges};
pub use sizes::symbol_sizes;
