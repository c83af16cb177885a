// src/search.rs
use std::io::{self, Write};

use regex::{Regex, RegexBuilder};

use crate::model::{Presentation, Program};

/// Optional title and author filters. Both are case-insensitive and match
/// anywhere in the text.
#[derive(Clone, Debug, Default)]
pub struct Query {
    title: Option<Regex>,
    author: Option<Regex>,
}

impl Query {
    pub fn new(title: Option<&str>, author: Option<&str>) -> Result<Self, regex::Error> {
        Ok(Self {
            title: title.map(compile).transpose()?,
            author: author.map(compile).transpose()?,
        })
    }

    pub fn matches(&self, p: &Presentation) -> bool {
        let title_ok = self.title.as_ref().is_none_or(|re| re.is_match(p.title()));
        let author_ok = self
            .author
            .as_ref()
            .is_none_or(|re| p.authors().iter().any(|a| re.is_match(&a.name)));
        title_ok && author_ok
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<'a> {
    pub day: &'a str,
    pub presentation: &'a Presentation,
}

/// Matching presentations with their day, in program order.
pub fn filter<'a>(program: &'a Program, query: &Query) -> Vec<Hit<'a>> {
    program
        .days
        .iter()
        .flat_map(|d| {
            d.sessions
                .iter()
                .flat_map(|s| s.presentations())
                .map(move |p| Hit { day: d.day.as_str(), presentation: p })
        })
        .filter(|h| query.matches(h.presentation))
        .collect()
}

/// Search report: a count line, then each hit under its day.
pub fn write_hits<W: Write>(out: &mut W, hits: &[Hit<'_>]) -> io::Result<()> {
    writeln!(out, "Found {} presentations", hits.len())?;
    for hit in hits {
        writeln!(out, "Day: {}", hit.day)?;
        writeln!(out, "{}", hit.presentation)?;
    }
    Ok(())
}
