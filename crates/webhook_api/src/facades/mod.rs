//! Services for turning a validated [InboundEvent] into a notification ready to be dispatched to
//! every connector.

mod classifier;
mod message_formatter;
mod movie_facade;
mod tv_facade;

pub use classifier::{classify, episode_title, season_title, ClassifyError, MediaKind};
pub use message_formatter::{format_enriched, format_title_only, format_with_links};

use crate::models::InboundEvent;
use jellyhook_connectors::{DeliveryOptions, NotificationMessage};
use jellyhook_media_details::{
    EnrichedMetadata, MediaDetails, MediaLinks, MediaType, Poster, TechnicalDetails,
};
use tracing::debug;

/// A formatted message plus the poster to attach to it. The poster's file is removed when the
/// [Notification] is dropped.
#[derive(Debug)]
pub struct Notification {
    pub message: NotificationMessage,
    pub poster: Option<Poster>,
}

impl Notification {
    pub fn text_only(message: NotificationMessage) -> Self {
        Notification {
            message,
            poster: None,
        }
    }

    pub fn delivery_options(&self) -> DeliveryOptions {
        match &self.poster {
            Some(p) => DeliveryOptions::with_image(p.path()),
            None => DeliveryOptions::default(),
        }
    }
}

/// Build the notification for an event of the given kind. Provider failures degrade to less
/// detailed notifications and never fail the event.
pub async fn handle_event(
    event: &InboundEvent,
    kind: MediaKind,
    details: &MediaDetails,
) -> Notification {
    debug!(media_kind = %kind, "Processing library event.");
    match kind {
        MediaKind::Movie => movie_facade::handle_movie(event, details).await,
        MediaKind::Season => tv_facade::handle_season(event, details).await,
        MediaKind::Episode => tv_facade::handle_episode(event, details).await,
        MediaKind::Series => tv_facade::handle_series(event, details).await,
    }
}

async fn technical_details(
    event: &InboundEvent,
    details: &MediaDetails,
) -> Option<TechnicalDetails> {
    match event.item_id.as_deref() {
        Some(item_id) => details.jellyfin.technical_details(item_id).await,
        None => None,
    }
}

/// Enrich a movie or series: resolve its TMDB ID if only the IMDb ID is known, fetch metadata,
/// trailers and links, then download the poster.
async fn enrich(
    event: &InboundEvent,
    media_type: MediaType,
    details: &MediaDetails,
) -> Notification {
    let resolved = match (event.tmdb_id, event.imdb_id.as_deref()) {
        (None, Some(imdb_id)) => details.tmdb.resolve_imdb_id(imdb_id).await,
        _ => None,
    };
    let tmdb_id = event
        .tmdb_id
        .or_else(|| resolved.and_then(|r| r.id_for(media_type)));

    let mut metadata = match tmdb_id {
        Some(id) => details.tmdb.fetch_metadata(media_type, id).await,
        None => {
            debug!("No TMDB ID to fetch metadata with.");
            EnrichedMetadata::default()
        }
    };
    let links = MediaLinks::build(
        media_type,
        event.tmdb_id,
        event.imdb_id.as_deref(),
        resolved.as_ref(),
    );
    metadata.imdb_link = links.imdb;
    metadata.tmdb_link = links.tmdb;

    let poster = match metadata.poster_id.as_deref() {
        Some(poster_id) => details.tmdb.download_poster(poster_id).await,
        None => None,
    };
    let technical_details = technical_details(event, details).await;

    Notification {
        message: format_enriched(&event.title, metadata, technical_details),
        poster,
    }
}
