//! Delivers notifications to a Matrix room through the client-server API, authenticated with an
//! access token.

use crate::connector::{
    endpoint, ensure_success, image_file_name, Connector, ConnectorError, DeliveryOptions,
};
use crate::message::{MessageData, MessageDataBuilder, NotificationMessage};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

const IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct MatrixSettings {
    pub homeserver_url: Url,
    pub access_token: String,
    pub room_id: String,
}

pub struct MatrixConnector {
    http: reqwest::Client,
    settings: MatrixSettings,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    content_uri: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageInfo {
    mimetype: &'static str,
    size: usize,
}

#[derive(Debug, Serialize)]
struct ImageContent<'a> {
    msgtype: &'static str,
    body: &'a str,
    url: &'a str,
    info: ImageInfo,
}

/// Render the notification as a plain text body plus an HTML formatted body.
pub fn format_message(message: &NotificationMessage) -> MessageData {
    let mut builder = MessageDataBuilder::new();
    builder.add_heading(&message.title);
    if let Some(description) = message.description.as_deref() {
        builder.add_preformatted(description);
    }
    for (label, url) in message.labelled_links() {
        builder.add_link(label, url);
    }
    for (label, url) in message.labelled_trailers() {
        builder.add_link(label, url);
    }
    for (label, value) in message.technical_lines() {
        builder.add_key_value(label, &value);
    }

    builder.to_message_data()
}

impl MatrixConnector {
    pub fn new(http: reqwest::Client, settings: MatrixSettings) -> Self {
        MatrixConnector { http, settings }
    }

    /// Upload an image to the homeserver's media repository and return its `mxc://` URI.
    async fn upload_image(&self, name: &str, bytes: Vec<u8>) -> Result<String, ConnectorError> {
        let url = endpoint(&self.settings.homeserver_url, &["_matrix", "media", "v3", "upload"])?;
        let response = self
            .http
            .post(url)
            .query(&[("filename", name)])
            .bearer_auth(&self.settings.access_token)
            .header(reqwest::header::CONTENT_TYPE, IMAGE_MIME_TYPE)
            .body(bytes)
            .send()
            .await?;
        let upload: UploadResponse = ensure_success(response).await?.json().await?;

        upload
            .content_uri
            .ok_or_else(|| ConnectorError::Upload(String::from("no content_uri in the response")))
    }

    /// Send an `m.room.message` event to the configured room.
    async fn send_event<T: Serialize + Sync>(&self, content: &T) -> Result<StatusCode, ConnectorError> {
        let txn_id = Uuid::new_v4().to_string();
        let url = endpoint(&self.settings.homeserver_url, &[
            "_matrix",
            "client",
            "v3",
            "rooms",
            self.settings.room_id.as_str(),
            "send",
            "m.room.message",
            txn_id.as_str(),
        ])?;
        let response = self
            .http
            .put(url)
            .bearer_auth(&self.settings.access_token)
            .json(content)
            .send()
            .await?;

        Ok(ensure_success(response).await?.status())
    }
}

#[async_trait]
impl Connector for MatrixConnector {
    fn name(&self) -> &str {
        "matrix"
    }

    async fn send(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        if let Some(path) = options.image() {
            let name = image_file_name(path);
            let bytes = tokio::fs::read(path).await?;
            let size = bytes.len();
            let content_uri = self.upload_image(&name, bytes).await?;
            debug!(content_uri = %content_uri, "Uploaded poster to the Matrix media repository.");

            let image = ImageContent {
                msgtype: "m.image",
                body: name.as_str(),
                url: content_uri.as_str(),
                info: ImageInfo {
                    mimetype: IMAGE_MIME_TYPE,
                    size,
                },
            };
            self.send_event(&image).await?;
        }

        let message_data = format_message(message);
        let status = self.send_event(&message_data.to_notice()).await?;
        info!(room_id = %self.settings.room_id, "Sent Matrix notice.");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyhook_media_details::MediaLinks;
    use wiremock::matchers::{body_partial_json, header, method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn connector(server: &MockServer) -> MatrixConnector {
        MatrixConnector::new(
            reqwest::Client::new(),
            MatrixSettings {
                homeserver_url: Url::parse(&server.uri()).unwrap(),
                access_token: String::from("token"),
                room_id: String::from("!room:example.org"),
            },
        )
    }

    fn message() -> NotificationMessage {
        NotificationMessage {
            title: String::from("Severance (2022)"),
            description: Some(String::from("Mark leads a team <of> office workers.")),
            media_link: MediaLinks {
                imdb: None,
                tmdb: Some(String::from("https://tmdb.org/tv/95396")),
            },
            trailer: Vec::new(),
            technical_details: None,
        }
    }

    #[test]
    fn format_message_renders_plain_and_html() {
        // Act
        let actual = format_message(&message());

        // Assert
        assert_eq!(
            "# Severance (2022)\n```Mark leads a team <of> office workers.```\n[TMDb](https://tmdb.org/tv/95396)",
            actual.plain
        );
        assert_eq!(
            "<h1>Severance (2022)</h1><pre>Mark leads a team &lt;of&gt; office workers.</pre><br><a href=\"https://tmdb.org/tv/95396\">TMDb</a>",
            actual.html
        );
    }

    #[test]
    fn image_info_carries_only_known_facts() {
        // Arrange
        let info = ImageInfo {
            mimetype: IMAGE_MIME_TYPE,
            size: 3,
        };

        // Act
        let actual = serde_json::to_value(&info).unwrap();

        // Assert
        assert_eq!(serde_json::json!({"mimetype": "image/jpeg", "size": 3}), actual);
    }

    #[tokio::test]
    async fn send_sends_notice_without_image() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_regex(
                r"^/_matrix/client/v3/rooms/!room:example\.org/send/m\.room\.message/.+$",
            ))
            .and(header("authorization", "Bearer token"))
            .and(body_partial_json(serde_json::json!({
                "msgtype": "m.notice",
                "format": "org.matrix.custom.html"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"event_id": "$1"})))
            .expect(1)
            .mount(&server)
            .await;

        // Act
        let actual = connector(&server)
            .send(&message(), &DeliveryOptions::default())
            .await;

        // Assert
        assert_eq!(StatusCode::OK, actual.unwrap());
    }

    #[tokio::test]
    async fn send_uploads_and_sends_image_before_notice() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/_matrix/media/v3/upload"))
            .and(query_param("filename", "poster.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"content_uri": "mxc://example.org/abc"}),
            ))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(body_partial_json(serde_json::json!({
                "msgtype": "m.image",
                "url": "mxc://example.org/abc",
                "info": {"size": 3}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(body_partial_json(serde_json::json!({"msgtype": "m.notice"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let directory = tempfile::tempdir().unwrap();
        let image = directory.path().join("poster.jpg");
        std::fs::write(&image, [1, 2, 3]).unwrap();

        // Act
        let actual = connector(&server)
            .send(&message(), &DeliveryOptions::with_image(&image))
            .await;

        // Assert
        assert!(actual.is_ok());
    }

    #[tokio::test]
    async fn send_fails_given_upload_without_content_uri() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;
        let directory = tempfile::tempdir().unwrap();
        let image = directory.path().join("poster.jpg");
        std::fs::write(&image, [1, 2, 3]).unwrap();

        // Act
        let actual = connector(&server)
            .send(&message(), &DeliveryOptions::with_image(&image))
            .await;

        // Assert
        assert!(matches!(actual, Err(ConnectorError::Upload(_))));
    }
}
