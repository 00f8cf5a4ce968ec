// src/core/net.rs
//! Single blocking HTTP GET of the published sheet (`ureq`).

use std::time::Duration;

use crate::config::consts::{MAX_PAGE_BYTES, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .user_agent(USER_AGENT)
            .build(),
    );

    let resp = agent.get(url).call().map_err(|e| match e {
        ureq::Error::StatusCode(status) => ScrapeError::Status { url: url.to_string(), status },
        other => ScrapeError::Http { url: url.to_string(), source: other },
    })?;

    let mut body = resp.into_body();
    let text = body
        .with_config()
        .limit(MAX_PAGE_BYTES)
        .read_to_string()
        .map_err(|source| ScrapeError::Http { url: url.to_string(), source })?;

    tracing::debug!(url, bytes = text.len(), "fetched sheet page");
    Ok(text)
}
