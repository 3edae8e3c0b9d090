//! Helpers shared by the start-up steps.

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Parse the value of the environment variable `name` as a URL.
pub fn parse_url(name: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).with_context(|| format!("Failed to parse {} \"{}\" as a URL.", name, raw))
}

/// The HTTP client shared by every provider and connector.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("jellyhook/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build the HTTP client.")
}
