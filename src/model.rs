// src/model.rs
//! Program records. Built once by the parser, validated in their
//! constructors, read-only afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionCategory {
    #[serde(rename = "Oral Session")]
    Oral,
    #[serde(rename = "Poster Session")]
    Poster,
    #[serde(rename = "Award Session")]
    Award,
    #[serde(rename = "Keynote Session")]
    Keynote,
    #[serde(rename = "Plenary Session")]
    Plenary,
    #[serde(rename = "Expo Session")]
    Expo,
}

impl SessionCategory {
    /// Declared order; header rows are tested against labels in this order.
    pub const ALL: [SessionCategory; 6] = [
        SessionCategory::Oral,
        SessionCategory::Poster,
        SessionCategory::Award,
        SessionCategory::Keynote,
        SessionCategory::Plenary,
        SessionCategory::Expo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionCategory::Oral => "Oral Session",
            SessionCategory::Poster => "Poster Session",
            SessionCategory::Award => "Award Session",
            SessionCategory::Keynote => "Keynote Session",
            SessionCategory::Plenary => "Plenary Session",
            SessionCategory::Expo => "Expo Session",
        }
    }

    /// First category whose label occurs in `row`.
    pub fn find_in(row: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| row.contains(c.label()))
    }

    pub fn is_single_speaker(self) -> bool {
        matches!(self, SessionCategory::Keynote | SessionCategory::Plenary)
    }

    pub fn has_abstracts(self) -> bool {
        !matches!(
            self,
            SessionCategory::Keynote | SessionCategory::Plenary | SessionCategory::Expo
        )
    }

    pub fn is_chaired(self) -> bool {
        !matches!(self, SessionCategory::Poster | SessionCategory::Plenary)
    }
}

impl fmt::Display for SessionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub affiliation: String,
}

impl Author {
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Self {
        Self { name: name.into(), affiliation: affiliation.into() }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.affiliation.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.affiliation)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    title: String,
    // Both empty when the talk has no paper header row
    scheduled_time: String,
    identifier: String,
    authors: Vec<Author>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    session_summary: String,
}

/// Extracted presentation fields, before validation.
#[derive(Clone, Debug, Default)]
pub struct PresentationParts {
    pub title: String,
    pub scheduled_time: String,
    pub identifier: String,
    pub authors: Vec<Author>,
    pub abstract_text: Option<String>,
    pub session_summary: String,
}

impl Presentation {
    pub fn new(parts: PresentationParts, category: SessionCategory) -> Result<Self, ParseError> {
        validate::presentation(&parts, category)?;
        let PresentationParts {
            title,
            scheduled_time,
            identifier,
            authors,
            abstract_text,
            session_summary,
        } = parts;
        Ok(Self { title, scheduled_time, identifier, authors, abstract_text, session_summary })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn scheduled_time(&self) -> &str { &self.scheduled_time }
    pub fn identifier(&self) -> &str { &self.identifier }
    pub fn authors(&self) -> &[Author] { &self.authors }
    pub fn abstract_text(&self) -> Option<&str> { self.abstract_text.as_deref() }
    pub fn session_summary(&self) -> &str { &self.session_summary }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.identifier.is_empty() {
            write!(f, "[{}] ", self.identifier)?;
        }
        if !self.scheduled_time.is_empty() {
            write!(f, "{} ", self.scheduled_time)?;
        }
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  Session: {}", self.session_summary)?;
        let authors: Vec<String> = self.authors.iter().map(|a| a.to_string()).collect();
        writeln!(f, "  Authors: {}", authors.join("; "))?;
        if let Some(text) = &self.abstract_text {
            writeln!(f, "  Abstract: {text}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    title: String,
    category: SessionCategory,
    scheduled_time: Option<String>,
    chair: Option<Author>,
    co_chair: Option<Author>,
    presentations: Vec<Presentation>,
}

impl Session {
    /// Validates the session and takes its slot from the first presentation,
    /// if that one has a paper header.
    pub fn new(
        title: String,
        category: SessionCategory,
        chair: Option<Author>,
        co_chair: Option<Author>,
        presentations: Vec<Presentation>,
    ) -> Result<Self, ParseError> {
        validate::session(&title, category, chair.as_ref(), co_chair.as_ref(), &presentations)?;
        let scheduled_time = presentations
            .first()
            .map(|p| p.scheduled_time.clone())
            .filter(|t| !t.is_empty());
        Ok(Self { title, category, scheduled_time, chair, co_chair, presentations })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn category(&self) -> SessionCategory { self.category }
    pub fn scheduled_time(&self) -> Option<&str> { self.scheduled_time.as_deref() }
    pub fn chair(&self) -> Option<&Author> { self.chair.as_ref() }
    pub fn co_chair(&self) -> Option<&Author> { self.co_chair.as_ref() }
    pub fn presentations(&self) -> &[Presentation] { &self.presentations }
}

/// All sessions of one program page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProgram {
    pub day: String,
    pub sessions: Vec<Session>,
}

/// Every parsed day, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    pub days: Vec<DayProgram>,
}

impl Program {
    pub fn presentation_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| &d.sessions)
            .map(|s| s.presentations.len())
            .sum()
    }
}
