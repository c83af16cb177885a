// src/specs/patterns.rs
use regex::Regex;

use crate::config::markers::Markers;

/// `Markers` with their regexes compiled. Build once per run.
#[derive(Clone, Debug)]
pub struct Patterns {
    pub markers: Markers,
    pub session_title: Regex,
    pub chair: Regex,
    pub author: Regex,
    pub titles: Vec<Regex>,
}

impl Patterns {
    pub fn compile(markers: Markers) -> Result<Self, regex::Error> {
        let session_title = Regex::new(r#"title="[^"]*">(.*?)</a>"#)?;
        let chair = Regex::new(&format!(
            r#"{} <a href="[^"]*"[^>]*>(.*?)</a></td><td class="r">(.*?)</td>"#,
            regex::escape(&markers.chair)
        ))?;
        let author = Regex::new(&format!(
            r#"<a href="{}\.html#[^"]*"[^>]*>(.*?)</a></td><td class="r">(.*?)</td>"#,
            regex::escape(&markers.author_index)
        ))?;
        let titles = markers
            .title_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { markers, session_title, chair, author, titles })
    }

    /// Raw title text from a row, trying each label pattern in order.
    pub fn presentation_title<'a>(&self, row: &'a str) -> Option<&'a str> {
        self.titles
            .iter()
            .find_map(|re| re.captures(row))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}
