//! Disassembly listing parser.
//!
//! An objdump-style listing interleaves function headers with instruction
//! lines. A header `<hex-address> <name>:` opens a new current-function
//! context; any other line may mention zero or more symbols in angle
//! brackets, each of which becomes one reference edge from the current
//! function:
//!
//! ```text
//! 0000000000001129 <main>:
//!     1131:  e8 f3 fe ff ff   callq  1029 <helper>
//! ```
//!
//! yields the single edge `(main, helper)`. References are never validated
//! against known symbols; a `<name>` occurrence is an edge whether or not
//! the symbol is defined anywhere in the listing.
//!
//! References appearing before the first function header have no caller and
//! are dropped (no placeholder edges are synthesized).

use std::str::Lines;
use std::sync::OnceLock;

use regex::Regex;

fn func_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9a-f]+ <(\w+)>:").expect("valid regex"))
}

fn symbol_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(\w+)>").expect("valid regex"))
}

/// Returns a lazy iterator of `(caller, callee)` reference edges parsed from
/// a disassembly listing.
///
/// Edges are yielded in document order; multiple references on one line yield
/// multiple pairs left to right. The raw stream may contain duplicate pairs —
/// deduplication is the graph builder's job, not the parser's.
///
/// # Examples
///
/// ```rust
/// use symgraph::listing::ref_edges;
///
/// let asm = "\
/// 0000000000001129 <main>:
///     1131:  e8 00 00 00 00   callq  <alpha>
///     1136:  e8 00 00 00 00   callq  <beta>
/// ";
/// let edges: Vec<_> = ref_edges(asm).collect();
/// assert_eq!(edges, vec![("main", "alpha"), ("main", "beta")]);
/// ```
pub fn ref_edges(asm: &str) -> RefEdges<'_> {
    RefEdges {
        lines: asm.lines(),
        current: None,
        pending: Vec::new(),
        pending_next: 0,
    }
}

/// Lazy, finite, non-restartable iterator over reference edges.
///
/// Created by [`ref_edges`]. The current-function register is threaded
/// through the iteration as explicit state rather than a captured mutable;
/// each yielded pair borrows from the input text.
pub struct RefEdges<'a> {
    lines: Lines<'a>,
    current: Option<&'a str>,
    /// References collected from the line currently being drained.
    pending: Vec<&'a str>,
    pending_next: usize,
}

impl<'a> Iterator for RefEdges<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pending_next < self.pending.len() {
                let referenced = self.pending[self.pending_next];
                self.pending_next += 1;
                // `pending` is only populated while a current function exists
                let current = self.current.expect("pending refs imply a current function");
                return Some((current, referenced));
            }

            let line = self.lines.next()?;
            if let Some(captures) = func_start_re().captures(line) {
                self.current = Some(captures.get(1).expect("group 1 exists").as_str());
            } else if self.current.is_some() {
                self.pending.clear();
                self.pending_next = 0;
                self.pending.extend(
                    symbol_ref_re()
                        .captures_iter(line)
                        .map(|c| c.get(1).expect("group 1 exists").as_str()),
                );
            }
            // Lines before the first function header are skipped entirely.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ref_edges;

    #[test]
    fn test_single_function_single_ref() {
        let asm = "0000000000001129 <main>:\n    1131:  callq  <helper>\n";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(edges, vec![("main", "helper")]);
    }

    #[test]
    fn test_multiple_refs_on_one_line_in_order() {
        let asm = "00001000 <f>:\n    lea <a> then <b> then <c>\n";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(edges, vec![("f", "a"), ("f", "b"), ("f", "c")]);
    }

    #[test]
    fn test_current_function_switches() {
        let asm = "\
00001000 <first>:
    callq <x>
00002000 <second>:
    callq <y>
    callq <z>
";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(
            edges,
            vec![("first", "x"), ("second", "y"), ("second", "z")]
        );
    }

    #[test]
    fn test_no_function_start_yields_no_edges() {
        // Reference-shaped substrings without any function header are dropped.
        let asm = "prologue mentioning <ghost> and <phantom>\nstill no header\n";
        assert_eq!(ref_edges(asm).count(), 0);
    }

    #[test]
    fn test_refs_before_first_header_are_dropped() {
        let asm = "stray <early>\n00001000 <f>:\n    callq <late>\n";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(edges, vec![("f", "late")]);
    }

    #[test]
    fn test_header_line_yields_no_self_edge() {
        let asm = "00001000 <f>:\n00002000 <g>:\n";
        assert_eq!(ref_edges(asm).count(), 0);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let asm = "00001000 <f>:\n    callq <a>\n    callq <a>\n";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(edges, vec![("f", "a"), ("f", "a")]);
    }

    #[test]
    fn test_uppercase_address_is_not_a_header() {
        // Header addresses are lowercase hex; this line is an ordinary line.
        let asm = "00001000 <f>:\nDEADBEEF <g>:\n";
        let edges: Vec<_> = ref_edges(asm).collect();
        assert_eq!(edges, vec![("f", "g")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(ref_edges("").count(), 0);
    }
}
