use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to TMDB or Jellyfin. These never reach the webhook caller; the
/// enrichment layer logs them and carries on with whatever data it has.
#[derive(Debug, Error)]
pub enum MediaDetailsError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{provider} responded with status {status}")]
    Status {
        provider: &'static str,
        status: StatusCode,
    },
    #[error("could not store the poster locally: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
