//! Jellyfin client used to look up the technical details of a newly added item.

pub(crate) mod models;
mod technical_details;

use crate::jellyfin::models::JellyfinItem;
use crate::MediaDetailsError;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub use technical_details::{analyze_french_version, TechnicalDetails, VideoDetails};

const TOKEN_HEADER: &str = "X-Emby-Token";

/// Settings to configure a [JellyfinClient]. All three values are needed for a lookup.
#[derive(Debug, Clone, Default)]
pub struct JellyfinSettings {
    pub url: Option<Url>,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub struct JellyfinClient {
    http: reqwest::Client,
    settings: Arc<JellyfinSettings>,
}

impl JellyfinClient {
    pub fn new(http: reqwest::Client, settings: JellyfinSettings) -> Self {
        JellyfinClient {
            http,
            settings: Arc::new(settings),
        }
    }

    /// Fetch an item and summarise its streams. Returns [None] when Jellyfin isn't configured,
    /// the request fails, or the item has no usable stream data.
    pub async fn technical_details(&self, item_id: &str) -> Option<TechnicalDetails> {
        let item = match self.get_item(item_id).await {
            Ok(i) => i,
            Err(MediaDetailsError::NotConfigured(p)) => {
                info!("{} is not fully configured; skipping technical details.", p);
                return None;
            }
            Err(e) => {
                warn!(error = %e, item_id, "Failed to fetch the Jellyfin item.");
                return None;
            }
        };

        let details = TechnicalDetails::from_streams(&item.media_streams);
        if details.is_none() {
            debug!(item_id, "Jellyfin item has no usable stream data.");
        }
        details
    }

    async fn get_item(&self, item_id: &str) -> Result<JellyfinItem, MediaDetailsError> {
        let (url, api_key, user_id) = match (
            self.settings.url.as_ref(),
            self.settings.api_key.as_deref(),
            self.settings.user_id.as_deref(),
        ) {
            (Some(u), Some(k), Some(i)) => (u, k, i),
            _ => return Err(MediaDetailsError::NotConfigured("Jellyfin")),
        };

        let mut request_url = url.clone();
        request_url
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(&["Users", user_id, "Items", item_id]);
        debug!(url = %request_url, "Sending Jellyfin request.");

        let response = self
            .http
            .get(request_url)
            .header(TOKEN_HEADER, api_key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MediaDetailsError::Status {
                provider: "Jellyfin",
                status: response.status(),
            });
        }

        Ok(response.json::<JellyfinItem>().await?)
    }
}
