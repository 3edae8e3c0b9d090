//! Assembles [NotificationMessage]s. Blank values never make it into a message; they are left out.

use jellyhook_connectors::NotificationMessage;
use jellyhook_media_details::{EnrichedMetadata, MediaLinks, TechnicalDetails};

const MAX_TRAILERS: usize = 2;

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A message carrying nothing but a title, plus whatever technical details are known.
pub fn format_title_only(
    title: &str,
    technical_details: Option<TechnicalDetails>,
) -> NotificationMessage {
    NotificationMessage {
        title: title.trim().to_string(),
        technical_details,
        ..Default::default()
    }
}

/// A message with links but no metadata, as sent for episodes.
pub fn format_with_links(
    title: &str,
    media_link: MediaLinks,
    technical_details: Option<TechnicalDetails>,
) -> NotificationMessage {
    NotificationMessage {
        media_link,
        ..format_title_only(title, technical_details)
    }
}

/// A message built from TMDB metadata. `fallback_title` is used when TMDB returned no title.
pub fn format_enriched(
    fallback_title: &str,
    metadata: EnrichedMetadata,
    technical_details: Option<TechnicalDetails>,
) -> NotificationMessage {
    let title = metadata
        .formatted_title()
        .unwrap_or_else(|| fallback_title.trim().to_string());
    let trailer = metadata
        .trailer_links
        .into_iter()
        .filter(|t| !t.trim().is_empty())
        .take(MAX_TRAILERS)
        .collect();

    NotificationMessage {
        title,
        description: non_blank(metadata.overview),
        media_link: MediaLinks {
            imdb: non_blank(metadata.imdb_link),
            tmdb: non_blank(metadata.tmdb_link),
        },
        trailer,
        technical_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_enriched_appends_release_year() {
        // Arrange
        let metadata = EnrichedMetadata {
            title: Some(String::from("Fight Club")),
            overview: Some(String::from("An insomniac office worker...")),
            release_year: Some(String::from("1999")),
            trailer_links: vec![String::from("https://youtu.be/abc")],
            imdb_link: Some(String::from("https://imdb.com/title/tt0137523")),
            tmdb_link: Some(String::from("https://tmdb.org/movie/550")),
            ..Default::default()
        };

        // Act
        let actual = format_enriched("Fight Club", metadata, None);

        // Assert
        assert_eq!("Fight Club (1999)", actual.title);
        assert_eq!(
            Some(String::from("An insomniac office worker...")),
            actual.description
        );
        assert_eq!(
            Some(String::from("https://tmdb.org/movie/550")),
            actual.media_link.tmdb
        );
        assert_eq!(vec![String::from("https://youtu.be/abc")], actual.trailer);
    }

    #[test]
    fn format_enriched_falls_back_to_event_title_given_empty_metadata() {
        // Act
        let actual = format_enriched("Planet Earth ", EnrichedMetadata::default(), None);

        // Assert
        assert_eq!(
            NotificationMessage {
                title: String::from("Planet Earth"),
                ..Default::default()
            },
            actual
        );
    }

    #[test]
    fn format_enriched_omits_blank_values() {
        // Arrange
        let metadata = EnrichedMetadata {
            title: Some(String::from("Dune")),
            overview: Some(String::from("   ")),
            trailer_links: vec![String::new(), String::from("https://youtu.be/a")],
            imdb_link: Some(String::new()),
            ..Default::default()
        };

        // Act
        let actual = format_enriched("Dune", metadata, None);

        // Assert
        assert_eq!(None, actual.description);
        assert!(actual.media_link.is_empty());
        assert_eq!(vec![String::from("https://youtu.be/a")], actual.trailer);
    }

    #[test]
    fn format_with_links_keeps_title_as_given() {
        // Arrange
        let links = MediaLinks {
            imdb: Some(String::from("https://imdb.com/title/tt1")),
            tmdb: None,
        };

        // Act
        let actual = format_with_links("Severance S02E01", links.clone(), None);

        // Assert
        assert_eq!("Severance S02E01", actual.title);
        assert_eq!(links, actual.media_link);
        assert_eq!(None, actual.description);
    }
}
