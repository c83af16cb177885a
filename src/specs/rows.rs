// src/specs/rows.rs
use crate::config::markers::Markers;
use crate::core::html::next_block;

/// One `<tr ...>...</tr>` span of the source document, trimmed.
pub type RowFragment<'a> = &'a str;

/// Split a document into its rows, left to right, without overlap.
/// An open marker with no close marker after it ends the scan; whatever
/// follows it is dropped.
pub fn extract_rows<'a>(doc: &'a str, markers: &Markers) -> Vec<RowFragment<'a>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) = next_block(doc, &markers.row_open, &markers.row_close, pos) {
        rows.push(doc[start..end].trim());
        pos = end;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_fragment_per_pair_in_order() {
        let doc = "<table>\n<tr><td>a</td></tr>\n<tr class=\"x\"><td>b</td></tr><tr><td>c</td></tr></table>";
        let rows = extract_rows(doc, &Markers::default());
        assert_eq!(
            rows,
            vec![
                "<tr><td>a</td></tr>",
                "<tr class=\"x\"><td>b</td></tr>",
                "<tr><td>c</td></tr>",
            ]
        );
    }

    #[test]
    fn nested_open_marker_is_swallowed() {
        // The close marker is searched from the first open marker, so the
        // inner <tr is part of the first fragment
        let doc = "<tr>a<tr>b</tr>c</tr>";
        let rows = extract_rows(doc, &Markers::default());
        assert_eq!(rows, vec!["<tr>a<tr>b</tr>"]);
    }

    #[test]
    fn trailing_unmatched_row_is_dropped() {
        let doc = "<tr><td>kept</td></tr>\n<tr><td>never closed</td>\n<tr><td>after</td>";
        let rows = extract_rows(doc, &Markers::default());
        assert_eq!(rows, vec!["<tr><td>kept</td></tr>"]);
    }

    #[test]
    fn empty_and_rowless_documents() {
        assert!(extract_rows("", &Markers::default()).is_empty());
        assert!(extract_rows("<p>no table</p>", &Markers::default()).is_empty());
    }
}
