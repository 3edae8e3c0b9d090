//! Processes TV events (seasons, episodes, series and documentaries) into [Notification]s.

use crate::facades::{
    enrich, episode_title, format_title_only, format_with_links, season_title, technical_details,
    Notification,
};
use crate::models::InboundEvent;
use jellyhook_media_details::{MediaDetails, MediaLinks, MediaType};
use tracing::info;

/// Seasons are announced by name and number only.
pub async fn handle_season(event: &InboundEvent, details: &MediaDetails) -> Notification {
    let title = season_title(&event.title);
    info!(title = %title, "Received a season.");
    let technical_details = technical_details(event, details).await;

    Notification::text_only(format_title_only(&title, technical_details))
}

/// Episodes carry their links but no metadata. The TMDB ID sent with an episode identifies the
/// show, so the TMDB link is always resolved from the IMDb ID.
pub async fn handle_episode(event: &InboundEvent, details: &MediaDetails) -> Notification {
    let title = episode_title(&event.title);
    info!(title = %title, imdb_id = ?event.imdb_id, "Received an episode.");

    let links = match event.imdb_id.as_deref() {
        Some(imdb_id) => {
            let resolved = details.tmdb.resolve_imdb_id(imdb_id).await;
            MediaLinks::build(MediaType::Tv, None, Some(imdb_id), resolved.as_ref())
        }
        None => MediaLinks::default(),
    };
    let technical_details = technical_details(event, details).await;

    Notification::text_only(format_with_links(&title, links, technical_details))
}

/// Series without any ID are announced by title only; otherwise they are enriched like movies.
pub async fn handle_series(event: &InboundEvent, details: &MediaDetails) -> Notification {
    info!(
        tmdb_id = ?event.tmdb_id,
        imdb_id = ?event.imdb_id,
        "Received a series."
    );
    if event.tmdb_id.is_none() && event.imdb_id.is_none() {
        let technical_details = technical_details(event, details).await;
        return Notification::text_only(format_title_only(&event.title, technical_details));
    }

    enrich(event, MediaType::Tv, details).await
}
