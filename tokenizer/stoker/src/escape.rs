//! Escape resolution for quoted strings.
//!
//! The escape set is fixed: `\n` `\t` `\r` `\f` `\b` plus the identity
//! escapes (`\\`, `\'`, `\"`). Anything else after a backslash passes
//! through literally, so `\z` is just `z` -- unknown escapes are not an
//! error. Line continuations (backslash directly before a terminator) are
//! handled by the quote scan itself because they touch the line counter.

/// Resolve the character following a backslash.
///
/// Total over all 256 codes; codes without a fixed meaning map to
/// themselves, which also covers the identity escapes.
pub(crate) fn resolve_escape(code: u8) -> char {
    match code {
        b'n' => '\n',
        b't' => '\t',
        b'r' => '\r',
        b'f' => '\u{000C}',
        b'b' => '\u{0008}',
        other => char::from(other),
    }
}
