use async_trait::async_trait;
use jellyhook_connectors::{Connector, ConnectorError, DeliveryOptions, NotificationMessage};
use jellyhook_media_details::{JellyfinSettings, MediaDetails, TmdbSettings};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

/// What a [SpyConnector] was asked to send. `image_existed` records whether the attached image
/// was on disk at the time of sending.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub message: NotificationMessage,
    pub options: DeliveryOptions,
    pub image_existed: bool,
}

/// Fake implementation of [Connector] that captures the [NotificationMessage] and
/// [DeliveryOptions] provided to it.
#[derive(Clone)]
pub struct SpyConnector {
    name: &'static str,
    messages: Arc<RwLock<Vec<SentMessage>>>,
}

impl SpyConnector {
    pub fn new(name: &'static str) -> Self {
        SpyConnector {
            name,
            messages: Arc::new(RwLock::new(Vec::<SentMessage>::new())),
        }
    }

    pub async fn sent(&self) -> Vec<SentMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl Connector for SpyConnector {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        let mut messages = self.messages.write().await;
        messages.push(SentMessage {
            message: message.clone(),
            options: options.clone(),
            image_existed: options.image().map(|p| p.exists()).unwrap_or(false),
        });

        Ok(StatusCode::OK)
    }
}

/// Fake [Connector] that always fails.
pub struct FailingConnector;

#[async_trait]
impl Connector for FailingConnector {
    fn name(&self) -> &str {
        "failing"
    }

    async fn send(
        &self,
        _message: &NotificationMessage,
        _options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        Err(ConnectorError::Upload(String::from("destination unavailable")))
    }
}

/// [MediaDetails] pointed at a mock TMDB server (which also serves posters). Jellyfin is left
/// unconfigured unless `jellyfin_url` is given.
pub fn media_details(tmdb_url: &str, jellyfin_url: Option<&str>) -> MediaDetails {
    let base = Url::parse(tmdb_url).unwrap();
    let jellyfin = match jellyfin_url {
        Some(url) => JellyfinSettings {
            url: Some(Url::parse(url).unwrap()),
            api_key: Some(String::from("jellyfin-key")),
            user_id: Some(String::from("user")),
        },
        None => JellyfinSettings::default(),
    };
    MediaDetails::new(
        reqwest::Client::new(),
        TmdbSettings {
            api_key: Some(String::from("tmdb-key")),
            base_url: base.clone(),
            image_base_url: base,
            language: String::from("fr-FR"),
            secondary_language: Some(String::from("en-US")),
        },
        jellyfin,
    )
}
