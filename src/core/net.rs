// src/core/net.rs

// Blocking HTTPS GET. One request per run, so no shared client.

use std::time::Duration;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::config::Source;
use crate::error::{Result, ScrapeError};

pub fn http_get(url: &str) -> Result<String> {
    let http = |source: reqwest::Error| ScrapeError::Http { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()
        .map_err(http)?;

    logd!("GET {url}");
    let resp = client.get(url).send().map_err(http)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
    }
    let body = resp.text().map_err(http)?;
    logd!("fetched {} bytes from {url}", body.len());
    Ok(body)
}

/// Read the page from wherever `source` points.
pub fn load(source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => http_get(url),
        Source::File(path) => {
            logd!("reading {}", path.display());
            std::fs::read_to_string(path).map_err(|source| ScrapeError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    }
}
