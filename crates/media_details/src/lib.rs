//! Enrichment of library events with data from TMDB (titles, overviews, posters, trailers,
//! canonical links) and Jellyfin (stream technical details).

mod error;
pub mod jellyfin;
pub mod links;
mod media_type;
mod metadata;
mod poster;
pub mod tmdb;

pub use error::MediaDetailsError;
pub use jellyfin::{
    analyze_french_version, JellyfinClient, JellyfinSettings, TechnicalDetails, VideoDetails,
};
pub use links::{FindResult, MediaLinks};
pub use media_type::MediaType;
pub use metadata::{format_title, EnrichedMetadata};
pub use poster::Poster;
pub use tmdb::{TmdbClient, TmdbSettings};

/// The provider clients needed to enrich a single event. Cheap to clone; every clone shares the
/// same HTTP connection pool and settings.
#[derive(Clone)]
pub struct MediaDetails {
    pub tmdb: TmdbClient,
    pub jellyfin: JellyfinClient,
}

impl MediaDetails {
    pub fn new(
        http: reqwest::Client,
        tmdb_settings: TmdbSettings,
        jellyfin_settings: JellyfinSettings,
    ) -> Self {
        MediaDetails {
            tmdb: TmdbClient::new(http.clone(), tmdb_settings),
            jellyfin: JellyfinClient::new(http, jellyfin_settings),
        }
    }
}
