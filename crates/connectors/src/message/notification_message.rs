use jellyhook_media_details::{MediaLinks, TechnicalDetails};

/// The destination-agnostic notification handed to every connector. Empty values are represented
/// by [None] or an empty list, never by blank strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationMessage {
    pub title: String,
    pub description: Option<String>,
    pub media_link: MediaLinks,
    /// At most two trailer URLs, primary language first.
    pub trailer: Vec<String>,
    pub technical_details: Option<TechnicalDetails>,
}

impl NotificationMessage {
    /// The IMDb/TMDb links that are present, labelled for display.
    pub fn labelled_links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(imdb) = self.media_link.imdb.as_deref() {
            links.push(("IMDb", imdb));
        }
        if let Some(tmdb) = self.media_link.tmdb.as_deref() {
            links.push(("TMDb", tmdb));
        }
        links
    }

    /// The trailer links labelled for display. A lone trailer is just `Trailer`; a pair is the
    /// French trailer followed by the English one.
    pub fn labelled_trailers(&self) -> Vec<(&'static str, &str)> {
        match self.trailer.as_slice() {
            [single] => vec![("Trailer", single.as_str())],
            [french, english, ..] => vec![
                ("Trailer FR", french.as_str()),
                ("Trailer EN", english.as_str()),
            ],
            [] => Vec::new(),
        }
    }

    /// One `(label, value)` line per technical detail present, e.g. `("Video", "2160p HEVC HDR")`.
    pub fn technical_lines(&self) -> Vec<(&'static str, String)> {
        let details = match &self.technical_details {
            Some(d) => d,
            None => return Vec::new(),
        };

        let mut lines = Vec::new();
        if let Some(video) = &details.video {
            let mut value = format!("{} {}", video.resolution, video.codec);
            if video.hdr {
                value.push_str(" HDR");
            }
            lines.push(("Video", value));
        }
        if !details.audio.is_empty() {
            lines.push(("Audio", details.audio.join(", ")));
        }
        if !details.subtitles.is_empty() {
            lines.push(("Subtitles", details.subtitles.join(", ")));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyhook_media_details::VideoDetails;

    #[test]
    fn labelled_trailers_labels_pair_by_language() {
        // Arrange
        let message = NotificationMessage {
            trailer: vec![String::from("https://youtu.be/fr"), String::from("https://youtu.be/en")],
            ..Default::default()
        };

        // Act
        let actual = message.labelled_trailers();

        // Assert
        assert_eq!(
            vec![("Trailer FR", "https://youtu.be/fr"), ("Trailer EN", "https://youtu.be/en")],
            actual
        );
    }

    #[test]
    fn technical_lines_skips_missing_sections() {
        // Arrange
        let message = NotificationMessage {
            technical_details: Some(TechnicalDetails {
                video: Some(VideoDetails {
                    resolution: String::from("1080p"),
                    codec: String::from("H264"),
                    hdr: false,
                }),
                audio: vec![String::from("VFF"), String::from("ENG")],
                subtitles: Vec::new(),
            }),
            ..Default::default()
        };

        // Act
        let actual = message.technical_lines();

        // Assert
        assert_eq!(
            vec![
                ("Video", String::from("1080p H264")),
                ("Audio", String::from("VFF, ENG"))
            ],
            actual
        );
    }
}
