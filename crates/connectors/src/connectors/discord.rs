//! Delivers notifications to a Discord channel through an incoming webhook.

use crate::connector::{ensure_success, image_file_name, Connector, ConnectorError, DeliveryOptions};
use crate::message::NotificationMessage;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::fmt::Write;
use tracing::debug;
use url::Url;

const EMBED_COLOR: u32 = 3447003;
const FOOTER_FORMAT: &str = "%H:%M - %d/%m/%Y";

#[derive(Debug, Clone)]
pub struct DiscordSettings {
    pub webhook_url: Url,
}

pub struct DiscordConnector {
    http: reqwest::Client,
    settings: DiscordSettings,
}

impl DiscordConnector {
    pub fn new(http: reqwest::Client, settings: DiscordSettings) -> Self {
        DiscordConnector { http, settings }
    }
}

/// The embed description: overview, then links, trailers and technical details in Markdown.
fn embed_description(message: &NotificationMessage) -> String {
    let mut description = message.description.clone().unwrap_or_default();
    description.push_str("\n\n");
    for (label, url) in message.labelled_links() {
        writeln!(description, "[{}]({})", label, url).expect("Failed to write String.");
    }
    for (label, url) in message.labelled_trailers() {
        writeln!(description, "[{}]({})", label, url).expect("Failed to write String.");
    }
    for (label, value) in message.technical_lines() {
        writeln!(description, "**{}**: {}", label, value).expect("Failed to write String.");
    }
    description.trim().to_string()
}

/// Build the webhook payload. `image_name` is the file name of an attached image, which the embed
/// refers to with an `attachment://` URL.
fn payload(message: &NotificationMessage, image_name: Option<&str>, footer: &str) -> Value {
    let mut embed = json!({
        "title": message.title,
        "description": embed_description(message),
        "color": EMBED_COLOR,
        "footer": { "text": footer }
    });
    if let Some(name) = image_name {
        embed["image"] = json!({ "url": format!("attachment://{}", name) });
    }

    json!({ "content": "", "embeds": [embed] })
}

#[async_trait]
impl Connector for DiscordConnector {
    fn name(&self) -> &str {
        "discord"
    }

    async fn send(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        let footer = chrono::Local::now().format(FOOTER_FORMAT).to_string();
        let request = match options.image() {
            Some(path) => {
                let name = image_file_name(path);
                let bytes = tokio::fs::read(path).await?;
                let body = payload(message, Some(&name), &footer);
                debug!(image = %name, "Sending Discord embed with an attached image.");
                let form = Form::new().text("payload_json", body.to_string()).part(
                    "file1",
                    Part::bytes(bytes).file_name(name).mime_str("image/jpeg")?,
                );
                self.http
                    .post(self.settings.webhook_url.clone())
                    .multipart(form)
            }
            None => self
                .http
                .post(self.settings.webhook_url.clone())
                .json(&payload(message, None, &footer)),
        };

        let response = ensure_success(request.send().await?).await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyhook_media_details::MediaLinks;
    use wiremock::matchers::{header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> NotificationMessage {
        NotificationMessage {
            title: String::from("Fight Club (1999)"),
            description: Some(String::from("An insomniac office worker...")),
            media_link: MediaLinks {
                imdb: Some(String::from("https://imdb.com/title/tt0137523")),
                tmdb: Some(String::from("https://tmdb.org/movie/550")),
            },
            trailer: vec![String::from("https://youtu.be/abc")],
            technical_details: None,
        }
    }

    #[test]
    fn payload_builds_single_embed_with_links_and_trailer() {
        // Act
        let actual = payload(&message(), None, "20:15 - 01/02/2024");

        // Assert
        let embed = &actual["embeds"][0];
        assert_eq!("Fight Club (1999)", embed["title"]);
        assert_eq!(
            "An insomniac office worker...\n\n[IMDb](https://imdb.com/title/tt0137523)\n[TMDb](https://tmdb.org/movie/550)\n[Trailer](https://youtu.be/abc)",
            embed["description"]
        );
        assert_eq!(3447003, embed["color"]);
        assert_eq!("20:15 - 01/02/2024", embed["footer"]["text"]);
        assert!(embed.get("image").is_none());
    }

    #[test]
    fn payload_references_attached_image() {
        // Act
        let actual = payload(&message(), Some("poster.jpg"), "");

        // Assert
        assert_eq!("attachment://poster.jpg", actual["embeds"][0]["image"]["url"]);
    }

    #[tokio::test]
    async fn send_posts_json_without_image() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/token"))
            .and(header_regex("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        let connector = DiscordConnector::new(
            reqwest::Client::new(),
            DiscordSettings {
                webhook_url: Url::parse(&format!("{}/api/webhooks/1/token", server.uri()))
                    .unwrap(),
            },
        );

        // Act
        let actual = connector.send(&message(), &DeliveryOptions::default()).await;

        // Assert
        assert_eq!(StatusCode::NO_CONTENT, actual.unwrap());
    }

    #[tokio::test]
    async fn send_posts_multipart_given_image() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header_regex("content-type", "multipart/form-data"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let image = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(image.path(), [0xFF, 0xD8]).unwrap();
        let connector = DiscordConnector::new(
            reqwest::Client::new(),
            DiscordSettings {
                webhook_url: Url::parse(&server.uri()).unwrap(),
            },
        );

        // Act
        let actual = connector
            .send(&message(), &DeliveryOptions::with_image(image.path()))
            .await;

        // Assert
        assert!(actual.is_ok());
    }

    #[tokio::test]
    async fn send_returns_status_error_given_rejection() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid Form Body"))
            .mount(&server)
            .await;
        let connector = DiscordConnector::new(
            reqwest::Client::new(),
            DiscordSettings {
                webhook_url: Url::parse(&server.uri()).unwrap(),
            },
        );

        // Act
        let actual = connector.send(&message(), &DeliveryOptions::default()).await;

        // Assert
        match actual {
            Err(ConnectorError::Status { status, body }) => {
                assert_eq!(StatusCode::BAD_REQUEST, status);
                assert_eq!("Invalid Form Body", body);
            }
            other => panic!("Expected a status error, got {:?}", other),
        }
    }
}
