use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

/// The TMDB namespace an ID lives in. Also the path segment used in TMDB URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

#[cfg(test)]
mod tests {
    use super::MediaType;
    use std::str::FromStr;

    #[test]
    fn media_type_displays_as_tmdb_path_segment() {
        assert_eq!("movie", MediaType::Movie.to_string());
        assert_eq!("tv", MediaType::Tv.as_ref());
    }

    #[test]
    fn media_type_from_str_rejects_unknown_value() {
        assert_eq!(MediaType::Tv, MediaType::from_str("tv").unwrap());
        assert!(MediaType::from_str("music").is_err());
    }
}
