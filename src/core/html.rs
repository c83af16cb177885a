// src/core/html.rs
// Literal-marker scanning over program markup. The program pages are generated,
// so row and field boundaries come from exact (case-sensitive) markers, never
// from a DOM. Field text is cleaned separately in `sanitize::clean_text`.

/// Find the next `open ... close` block at or after `from`.
/// The close marker is searched from the start of the open marker, so a
/// block is the shortest span holding both. Returns `(start, end)` with `end`
/// just past the close marker.
pub fn next_block(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = s.get(from..)?.find(open)? + from;
    let end_rel = s[start..].find(close)?;
    Some((start, start + end_rel + close.len()))
}

/// Text after the first occurrence of `label`, if any.
pub fn after<'a>(s: &'a str, label: &str) -> Option<&'a str> {
    s.find(label).map(|i| &s[i + label.len()..])
}
