//! A generic webhook for services without a dedicated connector. It receives the notification as a
//! Markdown `message` form field.

use crate::connector::{endpoint, ensure_success, Connector, ConnectorError, DeliveryOptions};
use crate::message::NotificationMessage;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Write;
use url::Url;

#[derive(Debug, Clone)]
pub struct TemplateSettings {
    pub api_url: Url,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct TemplateConnector {
    http: reqwest::Client,
    settings: TemplateSettings,
}

pub fn format_message(message: &NotificationMessage) -> String {
    let mut text = format!("*{}*\n", message.title);
    if let Some(description) = message.description.as_deref() {
        write!(text, "```{}```", description).expect("Failed to write String.");
    }

    let links = message.labelled_links();
    if !links.is_empty() {
        text.push('\n');
    }
    for (label, url) in links {
        write!(text, "\n[{}]({})", label, url).expect("Failed to write String.");
    }
    for (label, url) in message.labelled_trailers() {
        write!(text, "\n[{}]({})", label, url).expect("Failed to write String.");
    }
    for (label, value) in message.technical_lines() {
        write!(text, "\n**{}**: {}", label, value).expect("Failed to write String.");
    }
    text.trim_end().to_string()
}

impl TemplateConnector {
    pub fn new(http: reqwest::Client, settings: TemplateSettings) -> Self {
        TemplateConnector { http, settings }
    }
}

#[async_trait]
impl Connector for TemplateConnector {
    fn name(&self) -> &str {
        "template"
    }

    async fn send(
        &self,
        message: &NotificationMessage,
        _options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        let url = endpoint(&self.settings.api_url, &["send", "message"])?;
        let text = format_message(message);
        let mut request = self.http.post(url).form(&[("message", text.as_str())]);
        if let Some(key) = self.settings.api_key.as_deref() {
            request = request.bearer_auth(key);
        } else if let Some(username) = self.settings.username.as_deref() {
            request = request.basic_auth(username, self.settings.password.as_deref());
        }

        let response = ensure_success(request.send().await?).await?;
        Ok(response.status())
    }
}
