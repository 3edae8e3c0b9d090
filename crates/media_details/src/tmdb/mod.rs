//! TMDB (The Movie Database) client: details with a secondary-language fallback, trailers, IMDb ID
//! resolution and poster downloads.

pub(crate) mod models;
mod trailer;

use crate::tmdb::models::{TmdbDetails, TmdbFindResponse, TmdbVideos};
use crate::{EnrichedMetadata, FindResult, MediaDetailsError, MediaType, Poster};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_TMDB_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_URL: &str = "https://image.tmdb.org/t/p/w342";

/// Settings to configure a [TmdbClient].
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    /// Without a key every lookup is skipped and yields empty data.
    pub api_key: Option<String>,
    pub base_url: Url,
    pub image_base_url: Url,
    pub language: String,
    pub secondary_language: Option<String>,
}

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    settings: Arc<TmdbSettings>,
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, MediaDetailsError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn join(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl TmdbClient {
    pub fn new(http: reqwest::Client, settings: TmdbSettings) -> Self {
        TmdbClient {
            http,
            settings: Arc::new(settings),
        }
    }

    fn languages(&self) -> Vec<&str> {
        let mut languages = vec![self.settings.language.as_str()];
        if let Some(secondary) = self.settings.secondary_language.as_deref() {
            languages.push(secondary);
        }
        languages.into_iter().unique().collect()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<T, MediaDetailsError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(MediaDetailsError::NotConfigured("TMDB"))?;
        let url = endpoint(&self.settings.base_url, segments)?;
        debug!(url = %url, "Sending TMDB request.");

        let response = self
            .http
            .get(url)
            .query(&[("api_key", api_key)])
            .query(params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MediaDetailsError::Status {
                provider: "TMDB",
                status: response.status(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Raw details of a movie or series in one language.
    pub async fn details(
        &self,
        media_type: MediaType,
        id: u64,
        language: &str,
    ) -> Result<TmdbDetails, MediaDetailsError> {
        let id = id.to_string();
        self.get_json(
            &[media_type.as_ref(), id.as_str()],
            &[("language", language)],
        )
        .await
    }

    /// Fetch the metadata of a movie or series.
    ///
    /// The primary language is asked first. If any field comes back empty, the secondary language
    /// is asked too and only the missing fields are taken from it. A failed primary lookup yields
    /// empty metadata; a failed secondary lookup keeps what the primary returned.
    pub async fn fetch_metadata(&self, media_type: MediaType, id: u64) -> EnrichedMetadata {
        let primary = &self.settings.language;
        let mut metadata = match self.details(media_type, id, primary).await {
            Ok(d) => EnrichedMetadata::from(d),
            Err(e) => {
                warn!(error = %e, media_type = %media_type, tmdb_id = id, "Failed to fetch TMDB details.");
                return EnrichedMetadata::default();
            }
        };

        if metadata.is_incomplete() {
            if let Some(secondary) = self
                .settings
                .secondary_language
                .as_deref()
                .filter(|l| *l != primary.as_str())
            {
                debug!(language = secondary, "TMDB details incomplete, asking the secondary language.");
                match self.details(media_type, id, secondary).await {
                    Ok(d) => metadata.fill_missing_from(EnrichedMetadata::from(d)),
                    Err(e) => {
                        warn!(error = %e, language = secondary, "Failed to fetch secondary TMDB details.")
                    }
                }
            }
        }

        metadata.trailer_links = self.trailer_links(media_type, id).await;
        metadata
    }

    /// Search each configured language for a trailer and return their YouTube links, primary
    /// language first. Lookups that fail are skipped.
    pub async fn trailer_links(&self, media_type: MediaType, id: u64) -> Vec<String> {
        let mut links = Vec::new();
        for language in self.languages() {
            match self.search_trailer_key(media_type, id, language).await {
                Ok(Some(key)) => links.push(trailer::youtube_link(&key)),
                Ok(None) => debug!(language, "No trailer found."),
                Err(e) => warn!(error = %e, language, "Failed to search TMDB for a trailer."),
            }
        }

        links.into_iter().unique().collect()
    }

    async fn search_trailer_key(
        &self,
        media_type: MediaType,
        id: u64,
        language: &str,
    ) -> Result<Option<String>, MediaDetailsError> {
        let id = id.to_string();
        let videos: TmdbVideos = self
            .get_json(
                &[media_type.as_ref(), id.as_str(), "videos"],
                &[("language", language)],
            )
            .await?;
        Ok(trailer::find_trailer_key(&videos, language))
    }

    /// Resolve an IMDb ID to its first TMDB match. Failures are logged and treated as no match.
    pub async fn resolve_imdb_id(&self, imdb_id: &str) -> Option<FindResult> {
        let result: Result<TmdbFindResponse, _> = self
            .get_json(
                &["find", imdb_id],
                &[
                    ("external_source", "imdb_id"),
                    ("language", self.settings.language.as_str()),
                ],
            )
            .await;
        match result {
            Ok(r) => {
                let found = r.first_match();
                if found.is_none() {
                    info!(imdb_id, "TMDB has no match for the IMDb ID.");
                }
                found
            }
            Err(e) => {
                warn!(error = %e, imdb_id, "Failed to resolve the IMDb ID through TMDB.");
                None
            }
        }
    }

    /// Download a poster to a temporary file. Failures are logged and yield [None].
    pub async fn download_poster(&self, poster_id: &str) -> Option<Poster> {
        let url = join(&self.settings.image_base_url, poster_id);
        match Poster::download(&self.http, &url).await {
            Ok(p) => {
                debug!(path = %p.path().display(), "Downloaded poster.");
                Some(p)
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to download the poster.");
                None
            }
        }
    }
}
