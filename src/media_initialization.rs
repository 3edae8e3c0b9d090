use crate::initialization::parse_url;
use anyhow::Result;
use jellyhook_common::environment::{
    get_env_var_or, get_optional_env_var,
    variables::{
        JELLYFIN_API_KEY, JELLYFIN_URL, JELLYFIN_USER_ID, LANGUAGE, SECONDARY_LANGUAGE,
        TMDB_API_KEY, TMDB_IMAGE_URL, TMDB_URL,
    },
};
use jellyhook_media_details::tmdb::{DEFAULT_TMDB_IMAGE_URL, DEFAULT_TMDB_URL};
use jellyhook_media_details::{JellyfinSettings, MediaDetails, TmdbSettings};
use tracing::{info, warn};

const DEFAULT_LANGUAGE: &str = "fr-FR";
const DEFAULT_SECONDARY_LANGUAGE: &str = "en-US";

fn get_tmdb_settings() -> Result<TmdbSettings> {
    let api_key = get_optional_env_var(TMDB_API_KEY);
    if api_key.is_none() {
        warn!(
            "{} is not set; notifications will not be enriched with TMDB metadata.",
            TMDB_API_KEY
        );
    }

    Ok(TmdbSettings {
        api_key,
        base_url: parse_url(TMDB_URL, &get_env_var_or(TMDB_URL, DEFAULT_TMDB_URL))?,
        image_base_url: parse_url(
            TMDB_IMAGE_URL,
            &get_env_var_or(TMDB_IMAGE_URL, DEFAULT_TMDB_IMAGE_URL),
        )?,
        language: get_env_var_or(LANGUAGE, DEFAULT_LANGUAGE),
        secondary_language: Some(get_env_var_or(
            SECONDARY_LANGUAGE,
            DEFAULT_SECONDARY_LANGUAGE,
        )),
    })
}

fn get_jellyfin_settings() -> Result<JellyfinSettings> {
    let url = match get_optional_env_var(JELLYFIN_URL) {
        Some(raw) => Some(parse_url(JELLYFIN_URL, &raw)?),
        None => None,
    };
    let settings = JellyfinSettings {
        url,
        api_key: get_optional_env_var(JELLYFIN_API_KEY),
        user_id: get_optional_env_var(JELLYFIN_USER_ID),
    };
    if settings.url.is_none() || settings.api_key.is_none() || settings.user_id.is_none() {
        info!("Jellyfin is not fully configured; technical details will be left out.");
    }

    Ok(settings)
}

pub fn initialize_media_details(http: &reqwest::Client) -> Result<MediaDetails> {
    Ok(MediaDetails::new(
        http.clone(),
        get_tmdb_settings()?,
        get_jellyfin_settings()?,
    ))
}
