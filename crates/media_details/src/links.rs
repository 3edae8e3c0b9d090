//! Canonical IMDb and TMDB links for a title.

use crate::MediaType;
use serde::Serialize;

const IMDB_TITLE_URL: &str = "https://imdb.com/title";
const TMDB_URL: &str = "https://tmdb.org";

/// Links to a title on the review site (IMDb) and the metadata provider (TMDB).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<String>,
}

impl MediaLinks {
    /// Build the links for a title from whatever IDs are known.
    ///
    /// The TMDB link comes from `tmdb_id` when present; otherwise from the result of resolving the
    /// IMDb ID through TMDB's `/find` endpoint, if that found anything. The IMDb link never needs
    /// resolving.
    pub fn build(
        media_type: MediaType,
        tmdb_id: Option<u64>,
        imdb_id: Option<&str>,
        resolved: Option<&FindResult>,
    ) -> Self {
        let tmdb = match tmdb_id {
            Some(id) => Some(tmdb_link(media_type, id)),
            None => resolved.map(FindResult::tmdb_link),
        };
        MediaLinks {
            imdb: imdb_id.filter(|i| !i.is_empty()).map(imdb_link),
            tmdb,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imdb.is_none() && self.tmdb.is_none()
    }
}

pub fn imdb_link(imdb_id: &str) -> String {
    format!("{}/{}", IMDB_TITLE_URL, imdb_id)
}

pub fn tmdb_link(media_type: MediaType, id: u64) -> String {
    format!("{}/{}/{}", TMDB_URL, media_type, id)
}

/// The first TMDB match for an IMDb ID. Movie matches take priority over TV series matches, which
/// take priority over TV episode matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindResult {
    Movie(u64),
    Tv(u64),
    TvEpisode(u64),
}

impl FindResult {
    pub fn tmdb_link(&self) -> String {
        match self {
            FindResult::Movie(id) => tmdb_link(MediaType::Movie, *id),
            FindResult::Tv(id) => tmdb_link(MediaType::Tv, *id),
            FindResult::TvEpisode(id) => format!("{}/tv/episode/{}", TMDB_URL, id),
        }
    }

    /// The TMDB ID to fetch details with, provided the match is of the expected `media_type`.
    /// Episode matches never qualify; their ID is not valid for the details endpoints.
    pub fn id_for(&self, media_type: MediaType) -> Option<u64> {
        match (self, media_type) {
            (FindResult::Movie(id), MediaType::Movie) => Some(*id),
            (FindResult::Tv(id), MediaType::Tv) => Some(*id),
            _ => None,
        }
    }
}
