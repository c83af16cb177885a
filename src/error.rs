// src/error.rs
use std::fmt;
use std::path::PathBuf;

use crate::model::SessionCategory;

/// Fields that the builder extracts and may find missing or repeated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    SessionTitle,
    Chair,
    CoChair,
    PresentationTitle,
    Presentation,
    Author,
    Abstract,
    PaperHeader,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::SessionTitle => "session title",
            Field::Chair => "chair",
            Field::CoChair => "co-chair",
            Field::PresentationTitle => "presentation title",
            Field::Presentation => "presentation",
            Field::Author => "author",
            Field::Abstract => "abstract",
            Field::PaperHeader => "paper header",
        };
        f.write_str(name)
    }
}

/// A program document that does not have the expected shape.
/// Every variant aborts the parse of the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("duplicate {field} in {context}")]
    DuplicateField { field: Field, context: String },

    #[error("missing {field} in {context}")]
    MissingField { field: Field, context: String },

    #[error("{category} {subject}: {rule}")]
    CategoryInvariantViolation {
        category: SessionCategory,
        subject: String,
        rule: &'static str,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl ParseError {
    pub fn duplicate(field: Field, context: impl Into<String>) -> Self {
        ParseError::DuplicateField { field, context: context.into() }
    }

    pub fn missing(field: Field, context: impl Into<String>) -> Self {
        ParseError::MissingField { field, context: context.into() }
    }
}

/// Everything that can go wrong around the parser: loading pages,
/// writing and reading dumps, compiling user patterns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("cannot derive a cache file name from URL {0:?}")]
    Url(String),

    #[error("day {day}: {source}")]
    Parse {
        day: String,
        #[source]
        source: ParseError,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
