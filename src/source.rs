// src/source.rs
//! Program pages, from the local cache or the website.

use std::{fs, path::{Path, PathBuf}};

use crate::config::options::DaySource;
use crate::core::net;
use crate::error::{Error, Result};

/// Cache file for `url`: its last path segment under `cache_dir`.
pub fn cache_path(cache_dir: &Path, url: &str) -> Result<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() || name == "." || name == ".." || name.contains(':') {
        return Err(Error::Url(s!(url)));
    }
    Ok(cache_dir.join(name))
}

/// Read the page from the cache if present; otherwise fetch it and cache it.
pub fn load(source: &DaySource, cache_dir: &Path) -> Result<String> {
    load_with(source, cache_dir, net::http_get)
}

/// `load` with the fetcher passed in.
pub fn load_with<F>(source: &DaySource, cache_dir: &Path, fetch: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<String>,
{
    let path = cache_path(cache_dir, &source.url)?;
    if path.exists() {
        log::debug!("Day {}: cache hit {}", source.key, path.display());
        return fs::read_to_string(&path).map_err(|e| Error::io(&path, e));
    }

    log::info!("Day {}: fetching {}", source.key, source.url);
    let html = fetch(&source.url)?;
    fs::create_dir_all(cache_dir).map_err(|e| Error::io(cache_dir, e))?;
    fs::write(&path, &html).map_err(|e| Error::io(&path, e))?;
    Ok(html)
}
