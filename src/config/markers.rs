// src/config/markers.rs
//! Literal markers and label patterns that locate fields in a program page.
//!
//! Papercept generates one page per program day with the same row layout
//! every year; only the conference prefix on the index links changes
//! (`ICRA24_AuthorIndexWeb.html`, `ICRA24_ProgramAtAGlanceWeb.html`, ...).
//! Everything the parser matches on lives here so a new year or a new page
//! variant is a config change, not a parser change.

use super::consts::CONFERENCE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Row delimiters.
    pub row_open: String,
    pub row_close: String,

    /// Present on every session header row.
    pub session_header: String,

    /// Link target of the session title (program-at-a-glance index).
    pub session_index: String,
    /// Link target of author and chair names.
    pub author_index: String,

    pub chair: String,
    pub co_chair: String,

    /// Cheap gate before trying the title patterns.
    pub title_gate: String,
    /// Regexes with one capture group for the presentation title,
    /// tried in order; the first match wins.
    pub title_patterns: Vec<String>,

    pub abstract_marker: String,
    /// The abstract text starts right after this label.
    pub abstract_label: String,

    /// A paper header row carries both of these.
    pub program_button: String,
    pub paper_marker: String,
    /// Splits "10:30-12:00, Paper MoAT1.1" into time and identifier.
    pub paper_split: String,
}

impl Markers {
    pub fn for_conference(prefix: &str) -> Self {
        Self {
            row_open: s!("<tr"),
            row_close: s!("</tr>"),
            session_header: s!(r#"class="sHdr""#),
            session_index: format!("{prefix}_ProgramAtAGlanceWeb"),
            author_index: format!("{prefix}_AuthorIndexWeb"),
            chair: s!("Chair:"),
            co_chair: s!("Co-Chair:"),
            title_gate: s!("pTtl"),
            title_patterns: vec![
                // Pages with abstracts: the title toggles the abstract panel
                s!(r#"<a href="" onclick="viewAbstract\(.*?\); return false" title="Click to show or hide the keywords and abstract \(text summary\)">(.*?)</a>"#),
                // Pages without abstracts; the space is sometimes a raw U+00A0 or &nbsp;
                s!(r#"<span class="pTtl">(?:\s|&nbsp;)*(.*?)</span>"#),
            ],
            abstract_marker: s!("Abstract:"),
            abstract_label: s!("<strong>Abstract:</strong>"),
            program_button: s!("Add to My Program"),
            paper_marker: s!("Paper"),
            paper_split: s!(", Paper"),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::for_conference(CONFERENCE)
    }
}
