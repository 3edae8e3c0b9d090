use crate::initialization::parse_url;
use anyhow::Result;
use jellyhook_common::environment::{
    get_optional_env_var,
    variables::{
        CONNECTORS, DISCORD_WEBHOOK_URL, MATRIX_ACCESS_TOKEN, MATRIX_ROOM_ID, MATRIX_URL,
        TEMPLATE_API_KEY, TEMPLATE_API_URL, TEMPLATE_PASSWORD, TEMPLATE_USERNAME,
        WHATSAPP_API_URL, WHATSAPP_NUMBER, WHATSAPP_PASSWORD, WHATSAPP_USERNAME,
    },
};
use jellyhook_connectors::connectors::{
    DiscordConnector, DiscordSettings, MatrixConnector, MatrixSettings, TemplateConnector,
    TemplateSettings, WhatsappConnector, WhatsappSettings,
};
use jellyhook_connectors::{Connector, ConnectorKind, ConnectorRegistry};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

fn get_discord_settings() -> Result<Option<DiscordSettings>> {
    let webhook_url = match get_optional_env_var(DISCORD_WEBHOOK_URL) {
        Some(u) => parse_url(DISCORD_WEBHOOK_URL, &u)?,
        None => return Ok(None),
    };
    Ok(Some(DiscordSettings { webhook_url }))
}

fn get_matrix_settings() -> Result<Option<MatrixSettings>> {
    let (url, access_token, room_id) = match (
        get_optional_env_var(MATRIX_URL),
        get_optional_env_var(MATRIX_ACCESS_TOKEN),
        get_optional_env_var(MATRIX_ROOM_ID),
    ) {
        (Some(u), Some(t), Some(r)) => (u, t, r),
        _ => return Ok(None),
    };
    Ok(Some(MatrixSettings {
        homeserver_url: parse_url(MATRIX_URL, &url)?,
        access_token,
        room_id,
    }))
}

fn get_whatsapp_settings() -> Result<Option<WhatsappSettings>> {
    let (url, phone, username, password) = match (
        get_optional_env_var(WHATSAPP_API_URL),
        get_optional_env_var(WHATSAPP_NUMBER),
        get_optional_env_var(WHATSAPP_USERNAME),
        get_optional_env_var(WHATSAPP_PASSWORD),
    ) {
        (Some(u), Some(n), Some(user), Some(p)) => (u, n, user, p),
        _ => return Ok(None),
    };
    Ok(Some(WhatsappSettings {
        api_url: parse_url(WHATSAPP_API_URL, &url)?,
        phone,
        username,
        password,
    }))
}

fn get_template_settings() -> Result<Option<TemplateSettings>> {
    let api_url = match get_optional_env_var(TEMPLATE_API_URL) {
        Some(u) => parse_url(TEMPLATE_API_URL, &u)?,
        None => return Ok(None),
    };
    Ok(Some(TemplateSettings {
        api_url,
        api_key: get_optional_env_var(TEMPLATE_API_KEY),
        username: get_optional_env_var(TEMPLATE_USERNAME),
        password: get_optional_env_var(TEMPLATE_PASSWORD),
    }))
}

/// Build the connector of the given kind, or [None] if its settings are incomplete.
fn build_connector(
    kind: ConnectorKind,
    http: &reqwest::Client,
) -> Result<Option<Box<dyn Connector>>> {
    let http = http.clone();
    let connector: Option<Box<dyn Connector>> = match kind {
        ConnectorKind::Discord => get_discord_settings()?
            .map(|s| Box::new(DiscordConnector::new(http, s)) as Box<dyn Connector>),
        ConnectorKind::Matrix => get_matrix_settings()?
            .map(|s| Box::new(MatrixConnector::new(http, s)) as Box<dyn Connector>),
        ConnectorKind::Whatsapp => get_whatsapp_settings()?
            .map(|s| Box::new(WhatsappConnector::new(http, s)) as Box<dyn Connector>),
        ConnectorKind::Template => get_template_settings()?
            .map(|s| Box::new(TemplateConnector::new(http, s)) as Box<dyn Connector>),
    };
    Ok(connector)
}

/// Build the registry of enabled connectors. Without an explicit list every connector that has
/// its settings is enabled.
pub fn initialize_connectors(http: &reqwest::Client) -> Result<ConnectorRegistry> {
    let requested = get_optional_env_var(CONNECTORS);
    let kinds = match requested.as_deref() {
        Some(names) => ConnectorKind::parse_list(names),
        None => ConnectorKind::iter().collect(),
    };

    let mut connectors = Vec::new();
    for kind in kinds {
        match build_connector(kind, http)? {
            Some(c) => {
                info!(connector = %kind, "Enabled connector.");
                connectors.push(c);
            }
            None if requested.is_some() => {
                warn!(connector = %kind, "Connector is enabled but not configured; skipping it.")
            }
            None => debug!(connector = %kind, "Connector is not configured."),
        }
    }

    Ok(ConnectorRegistry::new(connectors))
}
