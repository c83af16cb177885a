// src/specs/segment.rs
use crate::config::markers::Markers;
use crate::model::SessionCategory;

use super::rows::RowFragment;

/// The rows of one session, header row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition<'r, 'a> {
    pub category: SessionCategory,
    /// Index of the header row in the full row list.
    pub start: usize,
    pub rows: &'r [RowFragment<'a>],
}

/// Header rows with a known category label, as `(row index, category)`.
/// Header rows whose label is unknown are not boundaries.
pub fn session_starts(rows: &[RowFragment<'_>], markers: &Markers) -> Vec<(usize, SessionCategory)> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.contains(markers.session_header.as_str()))
        .filter_map(|(i, row)| match SessionCategory::find_in(row) {
            Some(category) => Some((i, category)),
            None => {
                log::debug!("Row {i}: session header without a known category, skipped");
                None
            }
        })
        .collect()
}

/// Slice the rows between consecutive session starts. Rows before the first
/// header belong to no session.
pub fn partition<'r, 'a>(rows: &'r [RowFragment<'a>], markers: &Markers) -> Vec<Partition<'r, 'a>> {
    let starts = session_starts(rows, markers);
    let ends = starts.iter().skip(1).map(|(i, _)| *i).chain(std::iter::once(rows.len()));

    starts
        .iter()
        .zip(ends)
        .map(|(&(start, category), end)| Partition { category, start, rows: &rows[start..end] })
        .collect()
}
