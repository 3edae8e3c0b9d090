use crate::tmdb::models::TmdbVideos;
use lazy_static::lazy_static;
use regex::Regex;

const YOUTUBE_SHORT_URL: &str = "https://youtu.be";

lazy_static! {
    static ref FRENCH_TRAILER: Regex = Regex::new(r"(?i)bande[-\s]?annonce").unwrap();
    static ref TRAILER: Regex = Regex::new(r"(?i)trailer").unwrap();
}

/// The pattern a video's name must match to count as a trailer in the given language.
fn trailer_pattern(language: &str) -> &'static Regex {
    if language.to_ascii_lowercase().starts_with("fr") {
        &*FRENCH_TRAILER
    } else {
        &*TRAILER
    }
}

/// Find the YouTube key of the first video named like a trailer in `language`.
pub fn find_trailer_key(videos: &TmdbVideos, language: &str) -> Option<String> {
    let pattern = trailer_pattern(language);
    videos
        .results
        .iter()
        .filter(|v| v.name.as_deref().map_or(false, |n| pattern.is_match(n)))
        .find_map(|v| v.key.clone())
}

pub fn youtube_link(key: &str) -> String {
    format!("{}/{}", YOUTUBE_SHORT_URL, key)
}
