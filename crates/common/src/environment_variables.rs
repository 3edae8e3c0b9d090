//! The list of environment variables used throughout the application.

// Web API environment variables
pub const WEB_ADDRESS: &str = "JELLYHOOK_WEB_ADDRESS";
pub const WEB_PORT: &str = "JELLYHOOK_WEB_PORT";

// Metadata provider (TMDB) environment variables
pub const TMDB_API_KEY: &str = "JELLYHOOK_TMDB_API_KEY";
pub const TMDB_URL: &str = "JELLYHOOK_TMDB_URL";
pub const TMDB_IMAGE_URL: &str = "JELLYHOOK_TMDB_IMAGE_URL";
pub const LANGUAGE: &str = "JELLYHOOK_LANGUAGE";
pub const SECONDARY_LANGUAGE: &str = "JELLYHOOK_LANGUAGE2";

// Media server (Jellyfin) environment variables
pub const JELLYFIN_URL: &str = "JELLYHOOK_JELLYFIN_URL";
pub const JELLYFIN_API_KEY: &str = "JELLYHOOK_JELLYFIN_API_KEY";
pub const JELLYFIN_USER_ID: &str = "JELLYHOOK_JELLYFIN_USER_ID";

// Connector environment variables
pub const CONNECTORS: &str = "JELLYHOOK_CONNECTORS";
pub const DISCORD_WEBHOOK_URL: &str = "JELLYHOOK_DISCORD_WEBHOOK_URL";
pub const MATRIX_URL: &str = "JELLYHOOK_MATRIX_URL";
pub const MATRIX_ACCESS_TOKEN: &str = "JELLYHOOK_MATRIX_ACCESS_TOKEN";
pub const MATRIX_ROOM_ID: &str = "JELLYHOOK_MATRIX_ROOM_ID";
pub const WHATSAPP_API_URL: &str = "JELLYHOOK_WHATSAPP_API_URL";
pub const WHATSAPP_NUMBER: &str = "JELLYHOOK_WHATSAPP_NUMBER";
pub const WHATSAPP_USERNAME: &str = "JELLYHOOK_WHATSAPP_USERNAME";
pub const WHATSAPP_PASSWORD: &str = "JELLYHOOK_WHATSAPP_PASSWORD";
pub const TEMPLATE_API_URL: &str = "JELLYHOOK_TEMPLATE_API_URL";
pub const TEMPLATE_API_KEY: &str = "JELLYHOOK_TEMPLATE_API_KEY";
pub const TEMPLATE_USERNAME: &str = "JELLYHOOK_TEMPLATE_USERNAME";
pub const TEMPLATE_PASSWORD: &str = "JELLYHOOK_TEMPLATE_PASSWORD";

// Miscellaneous
pub const LOG_FILTER: &str = "JELLYHOOK_LOG_FILTER";
pub const LOG_DIRECTORY: &str = "JELLYHOOK_LOG_DIRECTORY";
