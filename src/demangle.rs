//! Decoder for the legacy compressed path encoding of symbol names.
//!
//! Mangled identifiers pack a fully qualified path into a single legal symbol
//! name: a `_ZN` marker, a run of length-prefixed path components, a
//! compiler-generated disambiguation hash, and a trailing `E` terminator.
//! For example:
//!
//! ```text
//! _ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE
//!     ^^^^ ^^^^ ^^^^^ ^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^
//! ```
//!
//! decodes to `core::fmt::Debug::debug_tup`. The hash component and the
//! terminator runt are always the last two parsed components and are dropped.
//!
//! Identifiers without the marker pass through unchanged, so decoding is
//! idempotent on already-readable names.

use crate::Result;

/// Decodes one identifier into its display form.
///
/// Identifiers not starting with the `_ZN` marker are returned unchanged.
/// Otherwise the marker is stripped and path components are parsed greedily:
/// each component is an ASCII-decimal length prefix immediately followed by
/// exactly that many bytes. Component parsing stops once the remaining text
/// begins with the `_` terminator or any non-digit; the remainder is then
/// taken verbatim as one final raw component. The last two components (hash
/// and terminator runt) are dropped, the rest are joined with `::`, and the
/// escaped punctuation `$u20$`, `$LT$`, `$GT$` is substituted.
///
/// # Errors
///
/// Returns [`Error::MalformedEncoding`](crate::Error::MalformedEncoding) when
/// a length prefix points past the end of the identifier, when the input ends
/// where a component was expected, when a length prefix does not parse, or
/// when fewer than three components are present — dropping the two suffix
/// components would then swallow a genuine path component, so the decoder
/// fails loudly instead.
///
/// # Examples
///
/// ```rust
/// use symgraph::demangle::demangle;
///
/// let name = demangle("_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE")?;
/// assert_eq!(name, "core::fmt::Debug::debug_tup");
///
/// // Pass-through for unmangled names
/// assert_eq!(demangle("main")?, "main");
/// # Ok::<(), symgraph::Error>(())
/// ```
pub fn demangle(sym: &str) -> Result<String> {
    let Some(mut rest) = sym.strip_prefix("_ZN") else {
        return Ok(sym.to_string());
    };

    let mut parts: Vec<&str> = Vec::new();
    loop {
        let Some(first) = rest.bytes().next() else {
            return Err(encoding_error!(
                "'{sym}': input ended where a path component was expected"
            ));
        };

        // Terminator ('_', 'E') or any other non-digit: the remainder is one
        // final raw component.
        if !first.is_ascii_digit() {
            parts.push(rest);
            break;
        }

        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (prefix, tail) = rest.split_at(digits);
        let len: usize = prefix
            .parse()
            .map_err(|_| encoding_error!("'{sym}': invalid length prefix '{prefix}'"))?;
        if len > tail.len() {
            return Err(encoding_error!(
                "'{sym}': length prefix {len} exceeds the {} remaining byte(s)",
                tail.len()
            ));
        }

        parts.push(&tail[..len]);
        rest = &tail[len..];
    }

    // The hash and terminator runt are always present in well-formed input;
    // with fewer than three components, dropping them would also drop a real
    // path component.
    if parts.len() < 3 {
        return Err(encoding_error!(
            "'{sym}': found {} component(s), expected at least one path \
             component plus the disambiguation suffix",
            parts.len()
        ));
    }

    let joined = parts[..parts.len() - 2].join("::");
    Ok(joined
        .replace("$u20$", " ")
        .replace("$LT$", "<")
        .replace("$GT$", ">"))
}

#[cfg(test)]
mod tests {
    use super::demangle;
    use crate::Error;

    #[test]
    fn test_passthrough_unmangled() {
        assert_eq!(demangle("main").unwrap(), "main");
        assert_eq!(demangle("memcpy@plt").unwrap(), "memcpy@plt");
        assert_eq!(demangle("").unwrap(), "");
    }

    #[test]
    fn test_passthrough_is_idempotent() {
        let once = demangle("my_symbol").unwrap();
        let twice = demangle(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice, "my_symbol");
    }

    #[test]
    fn test_decodes_qualified_path() {
        let name = demangle("_ZN4core3fmt5Debug9debug_tup17h1234567890abcdefE").unwrap();
        assert_eq!(name, "core::fmt::Debug::debug_tup");
    }

    #[test]
    fn test_decodes_two_segment_path() {
        let name = demangle("_ZN3app4main17haaaaaaaaaaaaaaaaE").unwrap();
        assert_eq!(name, "app::main");
    }

    #[test]
    fn test_substitutes_escaped_punctuation() {
        // "<Foo as Bar>::baz" mangles the brackets and spaces
        let name = demangle("_ZN26$LT$Foo$u20$as$u20$Bar$GT$3baz17h0000000000000000E").unwrap();
        assert_eq!(name, "<Foo as Bar>::baz");
    }

    #[test]
    fn test_underscore_terminates_components() {
        // A remainder starting with '_' is taken verbatim as one component.
        let name = demangle("_ZN3foo3bar_tail").unwrap();
        assert_eq!(name, "foo");
    }

    #[test]
    fn test_length_prefix_out_of_bounds() {
        let err = demangle("_ZN4core99overrun").unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { .. }));
        assert!(err.to_string().contains("length prefix 99"));
    }

    #[test]
    fn test_truncated_input_fails() {
        // Ends exactly after a complete component; no suffix follows.
        let err = demangle("_ZN4core").unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { .. }));
    }

    #[test]
    fn test_empty_after_marker_fails() {
        let err = demangle("_ZN").unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { .. }));
    }

    #[test]
    fn test_too_few_components_fails_loudly() {
        // Only two components parse; dropping both would leave nothing.
        let err = demangle("_ZN4coreE").unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { .. }));
    }

    #[test]
    fn test_oversized_length_prefix_fails() {
        let err = demangle("_ZN99999999999999999999999foo").unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding { .. }));
    }
}
