// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use super::markers::Markers;

/// One program page: the key it is filed under and where to get it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySource {
    pub key: String,
    pub url: String,
}

impl DaySource {
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self { key: key.into(), url: url.into() }
    }

    /// Parse `KEY=URL`. A bare URL is keyed by its file stem.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err(s!("empty source"));
        }
        if let Some((key, url)) = s.split_once('=') {
            // '=' inside a query string belongs to the URL
            if !key.contains('/') && !key.trim().is_empty() {
                return Ok(Self::new(key.trim(), url.trim()));
            }
        }
        let stem = s
            .rsplit('/')
            .next()
            .and_then(|last| last.split(['?', '#']).next())
            .map(|name| name.split('.').next().unwrap_or(name))
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| format!("cannot derive a day key from {s:?}"))?;
        Ok(Self::new(stem, s))
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_DAYS
            .iter()
            .map(|(key, page)| Self::new(*key, format!("{PROGRAM_BASE_URL}{page}")))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub sources: Vec<DaySource>,
    pub cache_dir: PathBuf,
    pub out_dir: PathBuf,
    pub markers: Markers,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            sources: DaySource::defaults(),
            cache_dir: PathBuf::from(CACHE_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            markers: Markers::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn aggregate_path(&self) -> PathBuf {
        self.out_dir.join(AGGREGATE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keyed_source() {
        let d = DaySource::parse("tue=https://x.org/p/ICRA24_ContentListWeb_2.html").unwrap();
        assert_eq!(d.key, "tue");
        assert_eq!(d.url, "https://x.org/p/ICRA24_ContentListWeb_2.html");
    }

    #[test]
    fn parse_bare_url_uses_stem() {
        let d = DaySource::parse("https://x.org/p/ICRA24_ContentListWeb_2.html").unwrap();
        assert_eq!(d.key, "ICRA24_ContentListWeb_2");

        let q = DaySource::parse("https://x.org/p/page.html?a=b").unwrap();
        assert_eq!(q.key, "page");
        assert_eq!(q.url, "https://x.org/p/page.html?a=b");
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(DaySource::parse("  ").is_err());
        assert!(DaySource::parse("https://x.org/").is_err());
    }

    #[test]
    fn defaults_cover_every_day() {
        let opts = ScrapeOptions::default();
        assert_eq!(opts.sources.len(), DEFAULT_DAYS.len());
        assert!(opts.sources.iter().all(|d| d.url.starts_with(PROGRAM_BASE_URL)));
        assert!(opts.aggregate_path().ends_with(AGGREGATE_FILE));
    }
}
