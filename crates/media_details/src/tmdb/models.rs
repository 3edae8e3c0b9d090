//! Models to be used when deserializing TMDB API v3 responses. Only the fields Jellyhook reads
//! are declared.
//! Source: https://developer.themoviedb.org/reference/intro/getting-started

use crate::FindResult;
use serde::Deserialize;

/// `GET /movie/{id}` or `GET /tv/{id}`. Movies name their fields `title`/`release_date`, series
/// use `name`/`first_air_date`.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct TmdbDetails {
    #[serde(alias = "name")]
    pub title: Option<String>,
    #[serde(alias = "first_air_date")]
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct TmdbFindItem {
    pub id: u64,
}

/// `GET /find/{external_id}`
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct TmdbFindResponse {
    #[serde(default)]
    pub movie_results: Vec<TmdbFindItem>,
    #[serde(default)]
    pub tv_results: Vec<TmdbFindItem>,
    #[serde(default)]
    pub tv_episode_results: Vec<TmdbFindItem>,
}

impl TmdbFindResponse {
    pub fn first_match(&self) -> Option<FindResult> {
        if let Some(movie) = self.movie_results.first() {
            Some(FindResult::Movie(movie.id))
        } else if let Some(tv) = self.tv_results.first() {
            Some(FindResult::Tv(tv.id))
        } else {
            self.tv_episode_results
                .first()
                .map(|episode| FindResult::TvEpisode(episode.id))
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct TmdbVideo {
    pub name: Option<String>,
    pub key: Option<String>,
}

/// `GET /{media_type}/{id}/videos`
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct TmdbVideos {
    #[serde(default)]
    pub results: Vec<TmdbVideo>,
}
