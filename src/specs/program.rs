// src/specs/program.rs
use crate::error::ParseError;
use crate::model::{Session, SessionCategory};

use super::patterns::Patterns;
use super::rows::extract_rows;
use super::segment::partition;
use super::session::build_session;

/// Parse one program page into its sessions, in page order.
/// Plenary sessions are left out of the result.
/// The first malformed session aborts the whole page.
pub fn parse_doc(html_doc: &str, pat: &Patterns) -> Result<Vec<Session>, ParseError> {
    let rows = extract_rows(html_doc, &pat.markers);
    let parts = partition(&rows, &pat.markers);
    log::debug!("{} rows, {} session headers", rows.len(), parts.len());

    let mut sessions = Vec::with_capacity(parts.len());
    for part in &parts {
        if part.category == SessionCategory::Plenary {
            log::debug!("Skipping plenary session at row {}", part.start);
            continue;
        }
        sessions.push(build_session(part, pat)?);
    }
    Ok(sessions)
}
