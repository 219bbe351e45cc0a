//! Symbol size-table parser.
//!
//! Parses `nm -S` style output, where each interesting line carries four
//! whitespace-separated fields: address, size (hex), type letter, name.
//! Anything else (undefined symbols without sizes, section headers, blank
//! lines) is skipped silently.

use std::collections::HashMap;

/// Parses size-table text into a symbol → byte-size map.
///
/// Only lines splitting into exactly four whitespace-separated fields count;
/// the second field is parsed as an unsigned hexadecimal size. Later lines
/// for the same symbol overwrite earlier ones. Non-conforming lines are
/// never an error.
///
/// # Examples
///
/// ```rust
/// use symgraph::listing::symbol_sizes;
///
/// let sizes = symbol_sizes("0000000000001020 0000000000000010 T my_symbol");
/// assert_eq!(sizes.get("my_symbol"), Some(&16));
/// ```
#[must_use]
pub fn symbol_sizes(text: &str) -> HashMap<String, u64> {
    let mut sizes = HashMap::new();
    for line in text.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [_, size, _, name] = fields[..] else {
            continue;
        };
        let Ok(size) = u64::from_str_radix(size, 16) else {
            continue;
        };
        sizes.insert(name.to_string(), size);
    }
    sizes
}
