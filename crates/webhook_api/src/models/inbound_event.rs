use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The body as posted by the Jellyfin webhook plugin, before validation. The plugin templates
/// every value as a string, so `tmdb` may arrive either as a number or as a numeric string.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct InboundEventBody {
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub imdb: Option<String>,
    pub tmdb: Option<Value>,
    pub item_id: Option<String>,
}

/// A validated library event. Empty IDs are represented by [None].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub media_type: String,
    pub title: String,
    pub imdb_id: Option<String>,
    pub tmdb_id: Option<u64>,
    pub item_id: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InboundEventError {
    #[error("Missing field `{0}`.")]
    MissingField(&'static str),
    #[error("Field `tmdb` is not a numeric ID: {0}")]
    InvalidTmdbId(String),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_tmdb_id(value: Option<Value>) -> Result<Option<u64>, InboundEventError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| InboundEventError::InvalidTmdbId(n.to_string())),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed
                    .parse::<u64>()
                    .map(Some)
                    .map_err(|_| InboundEventError::InvalidTmdbId(s.clone()))
            }
        }
        Some(other) => Err(InboundEventError::InvalidTmdbId(other.to_string())),
    }
}

impl TryFrom<InboundEventBody> for InboundEvent {
    type Error = InboundEventError;

    fn try_from(body: InboundEventBody) -> Result<Self, Self::Error> {
        let media_type = body
            .media_type
            .ok_or(InboundEventError::MissingField("media_type"))?;
        let title = body.title.ok_or(InboundEventError::MissingField("title"))?;

        Ok(InboundEvent {
            media_type: media_type.trim().to_string(),
            title,
            imdb_id: non_empty(body.imdb),
            tmdb_id: parse_tmdb_id(body.tmdb)?,
            item_id: non_empty(body.item_id),
        })
    }
}
