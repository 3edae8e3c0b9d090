//! Processes a movie event into a [Notification].

use crate::facades::{enrich, Notification};
use crate::models::InboundEvent;
use jellyhook_media_details::{MediaDetails, MediaType};
use tracing::info;

pub async fn handle_movie(event: &InboundEvent, details: &MediaDetails) -> Notification {
    info!(
        tmdb_id = ?event.tmdb_id,
        imdb_id = ?event.imdb_id,
        "Received a movie."
    );
    enrich(event, MediaType::Movie, details).await
}
