// src/core/sanitize.rs
use scraper::Html;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Visible text of a markup snippet: the text nodes of its HTML parse
/// (tags dropped, every named and numeric entity decoded once), with
/// whitespace collapsed. `&nbsp;` decodes to U+00A0 and collapses too.
pub fn clean_text(s: &str) -> String {
    let fragment = Html::parse_fragment(s);
    let text: String = fragment.root_element().text().collect();
    normalize_ws(&text)
}

/// Turn a day key into something safe for a file stem.
pub fn sanitize_file_stem(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut last_us = false;
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("day") } else { out }
}
