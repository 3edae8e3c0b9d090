use crate::jellyfin::models::MediaStream;
use itertools::Itertools;
use serde::Serialize;

const QUEBEC_FRENCH_MARKERS: [&str; 5] = ["vfq", "fr-ca", "ca", "canadian", "canadien"];
const FRANCE_FRENCH_MARKERS: [&str; 6] = ["vff", "truefrench", "fr-fr", "european", "vfi", "france"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoDetails {
    pub resolution: String,
    pub codec: String,
    /// Only set for HDR streams; SDR is the unlabelled default.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hdr: bool,
}

/// What is inside the file Jellyfin just added: the first video stream plus the languages of its
/// audio and subtitle tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnicalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtitles: Vec<String>,
}

impl TechnicalDetails {
    /// Summarise a list of Jellyfin stream descriptors. Returns [None] when nothing useful was found.
    pub fn from_streams(streams: &[MediaStream]) -> Option<Self> {
        let details = TechnicalDetails {
            video: streams.iter().find(|s| s.is("Video")).map(video_details),
            audio: language_labels(streams, "Audio"),
            subtitles: language_labels(streams, "Subtitle"),
        };

        if details.video.is_none() && details.audio.is_empty() && details.subtitles.is_empty() {
            None
        } else {
            Some(details)
        }
    }
}

fn video_details(stream: &MediaStream) -> VideoDetails {
    VideoDetails {
        resolution: resolution_label(stream.width, stream.height),
        codec: stream
            .codec
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| String::from("N/A")),
        hdr: stream.video_range.as_deref() == Some("HDR"),
    }
}

fn resolution_label(width: Option<u32>, height: Option<u32>) -> String {
    match (width, height) {
        (Some(3840), _) => String::from("2160p"),
        (Some(1920), _) => String::from("1080p"),
        (Some(1280), _) => String::from("720p"),
        (_, Some(h)) => format!("{}p", h),
        _ => String::from("N/A"),
    }
}

fn language_labels(streams: &[MediaStream], stream_type: &str) -> Vec<String> {
    streams
        .iter()
        .filter(|s| s.is(stream_type))
        .map(|s| {
            analyze_french_version(
                s.language.as_deref().unwrap_or_default(),
                s.display_title.as_deref().unwrap_or_default(),
            )
        })
        .filter(|label| !label.is_empty())
        .unique()
        .collect()
}

/// Label a track's language. French tracks are split into Quebec French (`VFQ`), France French
/// (`VFF`) or plain `FR` by looking for markers in the track title; Quebec markers are checked
/// first. Any other language code is returned uppercased.
pub fn analyze_french_version(language: &str, display_title: &str) -> String {
    let code = language.to_ascii_lowercase();
    if code != "fre" && code != "fra" {
        return language.to_uppercase();
    }

    let title = display_title.to_lowercase();
    if QUEBEC_FRENCH_MARKERS.iter().any(|m| title.contains(m)) {
        String::from("VFQ")
    } else if FRANCE_FRENCH_MARKERS.iter().any(|m| title.contains(m)) {
        String::from("VFF")
    } else {
        String::from("FR")
    }
}
