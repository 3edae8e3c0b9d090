//! Works out what kind of library change an event describes. The Jellyfin webhook template encodes
//! the kind of TV event as a prefix of the title, e.g. `Season-added: Severance, Saison 2`.

use jellyhook_media_details::MediaType;
use lazy_static::lazy_static;
use regex::Regex;
use strum_macros::{AsRefStr, Display};
use thiserror::Error;

lazy_static! {
    static ref SEASON_ADDED: Regex = Regex::new(r"(?i)Season-added").unwrap();
    static ref EPISODE_ADDED: Regex = Regex::new(r"(?i)Episode-added").unwrap();
    static ref SEASON_NAME: Regex = Regex::new(r"(?i)Season-added:\s*([^,]+)").unwrap();
    static ref SEASON_NUMBER: Regex = Regex::new(r"(?i), Saison\s*([0-9]+)").unwrap();
    static ref EPISODE_TITLE: Regex = Regex::new(r"(?i)Episode-added:\s*(.*)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Season,
    Episode,
    /// Series, documentaries and anything else Jellyfin files under TV.
    Series,
}

impl MediaKind {
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaKind::Movie => MediaType::Movie,
            _ => MediaType::Tv,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Classify an event from its media type and title. Movies are recognized regardless of title.
pub fn classify(media_type: &str, title: &str) -> Result<MediaKind, ClassifyError> {
    match media_type {
        "movie" => Ok(MediaKind::Movie),
        "tv" if SEASON_ADDED.is_match(title) => Ok(MediaKind::Season),
        "tv" if EPISODE_ADDED.is_match(title) => Ok(MediaKind::Episode),
        "tv" => Ok(MediaKind::Series),
        other => Err(ClassifyError::UnsupportedMediaType(String::from(other))),
    }
}

/// `Season-added: Severance, Saison 2` becomes `Severance, Saison 2`.
pub fn season_title(title: &str) -> String {
    let name = match SEASON_NAME.captures(title).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().trim(),
        None => return String::from(title),
    };
    match SEASON_NUMBER.captures(title).and_then(|c| c.get(1)) {
        Some(number) => format!("{}, Saison {}", name, number.as_str()),
        None => String::from(name),
    }
}

/// `Episode-added: Severance S02E01` becomes `Severance S02E01`.
pub fn episode_title(title: &str) -> String {
    EPISODE_TITLE
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| String::from(title))
}
