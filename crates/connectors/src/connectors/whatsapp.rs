//! Delivers notifications to a WhatsApp number through an HTTP bridge using basic auth.

use crate::connector::{
    endpoint, ensure_success, image_file_name, Connector, ConnectorError, DeliveryOptions,
};
use crate::message::NotificationMessage;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{header, StatusCode};
use std::fmt::Write;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct WhatsappSettings {
    pub api_url: Url,
    pub phone: String,
    pub username: String,
    pub password: String,
}

pub struct WhatsappConnector {
    http: reqwest::Client,
    settings: WhatsappSettings,
}

/// WhatsApp flavoured text: a bold title, the overview in a monospace block, then one link per line.
pub fn format_message(message: &NotificationMessage) -> String {
    let mut text = format!("*{}*\n", message.title);
    if let Some(description) = message.description.as_deref() {
        writeln!(text, "```{}```", description).expect("Failed to write String.");
    }
    for (label, url) in message
        .labelled_links()
        .into_iter()
        .chain(message.labelled_trailers())
    {
        writeln!(text, "{}: {}", label, url).expect("Failed to write String.");
    }
    for (label, value) in message.technical_lines() {
        writeln!(text, "*{}*: {}", label, value).expect("Failed to write String.");
    }
    text.trim_end().to_string()
}

impl WhatsappConnector {
    pub fn new(http: reqwest::Client, settings: WhatsappSettings) -> Self {
        WhatsappConnector { http, settings }
    }

    fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .basic_auth(&self.settings.username, Some(&self.settings.password))
            .header(header::ACCEPT, "application/json")
    }
}

#[async_trait]
impl Connector for WhatsappConnector {
    fn name(&self) -> &str {
        "whatsapp"
    }

    async fn send(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> Result<StatusCode, ConnectorError> {
        let text = format_message(message);
        let request = match options.image() {
            Some(path) => {
                let url = endpoint(&self.settings.api_url, &["send", "image"])?;
                let name = image_file_name(path);
                let bytes = tokio::fs::read(path).await?;
                debug!(image = %name, "Sending WhatsApp image with caption.");
                let form = Form::new()
                    .text("phone", self.settings.phone.clone())
                    .text("caption", text)
                    .text("compress", "True")
                    .part(
                        "image",
                        Part::bytes(bytes).file_name(name).mime_str("image/jpeg")?,
                    );
                self.post(url).multipart(form)
            }
            None => {
                let url = endpoint(&self.settings.api_url, &["send", "message"])?;
                self.post(url).form(&[
                    ("phone", self.settings.phone.as_str()),
                    ("message", text.as_str()),
                ])
            }
        };

        let response = ensure_success(request.send().await?).await?;
        Ok(response.status())
    }
}
