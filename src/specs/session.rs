// src/specs/session.rs
//! Session and presentation builder.
//!
//! Layout of one session partition (one row per line):
//! ```text
//! <tr class="sHdr"> ... Oral Session ...                  header (segmenter)
//! <tr> <a href="ICRA24_ProgramAtAGlanceWeb..." title="...">Title</a>
//! <tr> Chair: <a href="...">Name</a></td><td class="r">Affiliation</td>
//! <tr> Co-Chair: ...
//! <tr> <span class="pTtl">Presentation title</span>      ┐
//! <tr> 10:30-12:00, Paper MoAT1.1 ... Add to My Program   │ one span per
//! <tr> <a href="ICRA24_AuthorIndexWeb...">Name</a> ...   │ title row
//! <tr> <strong>Abstract:</strong> ...                     ┘
//! ```

use crate::core::html::after;
use crate::core::sanitize::{clean_text, normalize_ws};
use crate::error::{Field, ParseError};
use crate::model::{Author, Presentation, PresentationParts, Session, SessionCategory};

use super::patterns::Patterns;
use super::rows::RowFragment;
use super::segment::Partition;

/// Rows of one presentation, title row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationSpan<'r, 'a> {
    pub title: String,
    pub rows: &'r [RowFragment<'a>],
}

pub fn build_session(part: &Partition<'_, '_>, pat: &Patterns) -> Result<Session, ParseError> {
    let context = format!("{} at row {}", part.category, part.start);
    let title = session_title(part.rows, pat, &context)?;
    let (chair, co_chair) = session_chairs(part.rows, pat, &title)?;

    let spans = presentation_spans(part.rows, pat);
    if spans.is_empty() {
        return Err(ParseError::missing(Field::PresentationTitle, format!("session {title:?}")));
    }

    let summary = format!("{}: {}", part.category, title);
    let presentations = spans
        .iter()
        .map(|span| build_presentation(span, part.category, &summary, pat))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("{summary}: {} presentations", presentations.len());
    Session::new(title, part.category, chair, co_chair, presentations)
}

/// The program-index link text. Exactly one per session.
fn session_title(rows: &[RowFragment<'_>], pat: &Patterns, context: &str) -> Result<String, ParseError> {
    let mut title = None;
    for row in rows.iter().filter(|r| r.contains(pat.markers.session_index.as_str())) {
        let Some(c) = pat.session_title.captures(row) else { continue };
        if title.is_some() {
            return Err(ParseError::duplicate(Field::SessionTitle, context));
        }
        title = Some(clean_text(&c[1]));
    }
    title.ok_or_else(|| ParseError::missing(Field::SessionTitle, context))
}

fn session_chairs(
    rows: &[RowFragment<'_>],
    pat: &Patterns,
    title: &str,
) -> Result<(Option<Author>, Option<Author>), ParseError> {
    let mut chair = None;
    let mut co_chair = None;

    for row in rows.iter().filter(|r| r.contains(pat.markers.chair.as_str())) {
        let Some(c) = pat.chair.captures(row) else { continue };
        let person = Author::new(clean_text(&c[1]), clean_text(&c[2]));

        let (slot, field) = if row.contains(pat.markers.co_chair.as_str()) {
            (&mut co_chair, Field::CoChair)
        } else {
            (&mut chair, Field::Chair)
        };
        if slot.is_some() {
            return Err(ParseError::duplicate(field, format!("session {title:?}")));
        }
        *slot = Some(person);
    }
    Ok((chair, co_chair))
}

/// Rows that open a presentation, with the raw title text.
pub fn presentation_starts<'a>(rows: &[RowFragment<'a>], pat: &Patterns) -> Vec<(usize, &'a str)> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.contains(pat.markers.title_gate.as_str()))
        .filter_map(|(i, row)| pat.presentation_title(*row).map(|t| (i, t)))
        .collect()
}

pub fn presentation_spans<'r, 'a>(rows: &'r [RowFragment<'a>], pat: &Patterns) -> Vec<PresentationSpan<'r, 'a>> {
    let starts = presentation_starts(rows, pat);
    let ends = starts.iter().skip(1).map(|(i, _)| *i).chain(std::iter::once(rows.len()));

    starts
        .iter()
        .zip(ends)
        .map(|(&(start, title), end)| PresentationSpan { title: clean_text(title), rows: &rows[start..end] })
        .collect()
}

pub fn build_presentation(
    span: &PresentationSpan<'_, '_>,
    category: SessionCategory,
    session_summary: &str,
    pat: &Patterns,
) -> Result<Presentation, ParseError> {
    let m = &pat.markers;
    let context = format!("presentation {:?}", span.title);

    let mut authors = Vec::new();
    let mut abstract_text: Option<String> = None;
    let mut header: Option<(String, String)> = None;

    for row in span.rows {
        if row.contains(m.author_index.as_str()) {
            for c in pat.author.captures_iter(row) {
                if abstract_text.is_some() {
                    return Err(ParseError::MalformedDocument(format!("author row after the abstract in {context}")));
                }
                authors.push(Author::new(clean_text(&c[1]), clean_text(&c[2])));
            }
        }

        if row.contains(m.abstract_marker.as_str()) {
            let text = after(row, &m.abstract_label).ok_or_else(|| {
                ParseError::MalformedDocument(format!("{:?} without {:?} in {context}", m.abstract_marker, m.abstract_label))
            })?;
            if abstract_text.is_some() {
                return Err(ParseError::duplicate(Field::Abstract, &context));
            }
            abstract_text = Some(clean_text(text));
        }

        if row.contains(m.program_button.as_str()) && row.contains(m.paper_marker.as_str()) {
            if header.is_some() {
                return Err(ParseError::duplicate(Field::PaperHeader, &context));
            }
            header = Some(paper_header(row, pat, &context)?);
        }
    }

    let (scheduled_time, identifier) = header.unwrap_or_else(|| {
        log::debug!("No paper header in {context}");
        (String::new(), String::new())
    });

    Presentation::new(
        PresentationParts {
            title: span.title.clone(),
            scheduled_time,
            identifier,
            authors,
            abstract_text,
            session_summary: s!(session_summary),
        },
        category,
    )
}

/// "10:30-12:00, Paper MoAT1.1  Add to My Program" → ("10:30-12:00", "MoAT1.1")
fn paper_header(row: &str, pat: &Patterns, context: &str) -> Result<(String, String), ParseError> {
    let m = &pat.markers;
    let text = clean_text(row).replace(m.program_button.as_str(), "");
    let (time, id) = text.split_once(m.paper_split.as_str()).ok_or_else(|| {
        ParseError::MalformedDocument(format!("paper header without {:?} in {context}: {text:?}", m.paper_split))
    })?;
    Ok((normalize_ws(time), normalize_ws(id)))
}
