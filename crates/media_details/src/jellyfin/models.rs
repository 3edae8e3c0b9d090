//! Models to be used when deserializing Jellyfin item responses. Only the stream fields Jellyhook
//! inspects are declared.

use serde::Deserialize;

/// `GET /Users/{user_id}/Items/{item_id}`
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct JellyfinItem {
    #[serde(default)]
    pub media_streams: Vec<MediaStream>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct MediaStream {
    /// `Video`, `Audio`, `Subtitle`, ...
    #[serde(rename = "Type")]
    pub stream_type: Option<String>,
    pub codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// `SDR` or `HDR`
    pub video_range: Option<String>,
    /// ISO 639-2 code, e.g. `eng` or `fre`.
    pub language: Option<String>,
    pub display_title: Option<String>,
}

impl MediaStream {
    pub fn is(&self, stream_type: &str) -> bool {
        self.stream_type.as_deref() == Some(stream_type)
    }
}
