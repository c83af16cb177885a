// src/core/net.rs
// One blocking GET per program page. The pages are served over HTTPS,
// so this goes through reqwest's blocking client rather than a raw socket.

use crate::error::Error;

const USER_AGENT: &str = concat!("icra_scrape/", env!("CARGO_PKG_VERSION"));

/// GET `url` and return the body as text. Non-success statuses are errors.
pub fn http_get(url: &str) -> Result<String, Error> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    let body = resp.text()?;
    log::debug!("GET {url}: {} bytes", body.len());
    Ok(body)
}
