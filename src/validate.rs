// src/validate.rs
//! Category rules, checked when a record is constructed.
//!
//! | category          | authors | abstract | chair/co-chair |
//! |-------------------|---------|----------|----------------|
//! | Oral, Award       | 1+      | required | at least one   |
//! | Poster            | 1+      | required | none           |
//! | Keynote           | exactly 1 | none   | at least one   |
//! | Plenary           | exactly 1 | none   | none           |
//! | Expo              | 1+      | none     | at least one   |

use crate::error::{Field, ParseError};
use crate::model::{Author, Presentation, PresentationParts, SessionCategory};

pub fn presentation(p: &PresentationParts, category: SessionCategory) -> Result<(), ParseError> {
    let violation = |rule| ParseError::CategoryInvariantViolation {
        category,
        subject: format!("presentation {:?}", p.title),
        rule,
    };

    if p.authors.is_empty() {
        return Err(ParseError::missing(Field::Author, format!("presentation {:?}", p.title)));
    }
    if category.is_single_speaker() && p.authors.len() != 1 {
        return Err(violation("must have exactly one author"));
    }
    match (category.has_abstracts(), p.abstract_text.is_some()) {
        (true, false) => Err(violation("must have an abstract")),
        (false, true) => Err(violation("must not have an abstract")),
        _ => Ok(()),
    }
}

pub fn session(
    title: &str,
    category: SessionCategory,
    chair: Option<&Author>,
    co_chair: Option<&Author>,
    presentations: &[Presentation],
) -> Result<(), ParseError> {
    if title.trim().is_empty() {
        return Err(ParseError::missing(Field::SessionTitle, format!("{category}")));
    }
    let violation = |rule| ParseError::CategoryInvariantViolation {
        category,
        subject: format!("session {title:?}"),
        rule,
    };

    let chaired = chair.is_some() || co_chair.is_some();
    if category.is_chaired() && !chaired {
        return Err(violation("must have a chair or co-chair"));
    }
    if !category.is_chaired() && chaired {
        return Err(violation("must not have a chair or co-chair"));
    }
    if presentations.is_empty() {
        return Err(ParseError::missing(Field::Presentation, format!("session {title:?}")));
    }
    Ok(())
}
