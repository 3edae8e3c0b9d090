//! The capability every outbound integration implements.

use crate::message::NotificationMessage;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Options shared by every connector for a single delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub send_image: bool,
    pub picture_path: Option<PathBuf>,
}

impl DeliveryOptions {
    pub fn with_image(picture_path: &Path) -> Self {
        DeliveryOptions {
            send_image: true,
            picture_path: Some(picture_path.to_path_buf()),
        }
    }

    /// The image to attach, if one was requested and is available.
    pub fn image(&self) -> Option<&Path> {
        if self.send_image {
            self.picture_path.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("destination responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not read the image to attach: {0}")]
    Io(#[from] std::io::Error),
    #[error("image upload failed: {0}")]
    Upload(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// An outbound integration capable of delivering a [NotificationMessage] to one chat destination.
/// Each implementor owns its wire format.
#[async_trait]
pub trait Connector: Send + Sync {
    /// The name the connector is enabled by in configuration.
    fn name(&self) -> &str;

    /// Deliver the message. Returns the status of the final request on success.
    async fn send(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError>;
}

/// Turn a non-2xx response into a [ConnectorError::Status] carrying the response body.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, ConnectorError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(unreadable body)"));
        Err(ConnectorError::Status { status, body })
    }
}

/// The file name to announce for an attached image.
pub(crate) fn image_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .unwrap_or_else(|| String::from("poster.jpg"))
}

/// Append path segments to a base URL, keeping any path the base already carries.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ConnectorError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
