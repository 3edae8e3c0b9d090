use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use jellyhook_common::environment::variables::{WEB_ADDRESS, WEB_PORT};
use jellyhook_common::environment::{get_env_var, get_env_var_or};
use jellyhook_connectors::ConnectorRegistry;
use jellyhook_media_details::MediaDetails;
use jellyhook_webhook_api::{api_config, JellyhookRootSpan};
use std::str::FromStr;
use tracing::info;
use tracing_actix_web::TracingLogger;

const DEFAULT_ADDRESS: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "7778";

pub fn initialize_web_server(
    media_details: MediaDetails,
    registry: ConnectorRegistry,
) -> Result<Server> {
    let media_details = web::Data::new(media_details);
    let registry = web::Data::new(registry);
    let address = get_env_var_or(WEB_ADDRESS, DEFAULT_ADDRESS);
    let port = get_port()?;

    info!(address = %address, port, "Binding web server.");
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<JellyhookRootSpan>::new())
            .app_data(media_details.clone())
            .app_data(registry.clone())
            .configure(api_config)
    })
    .bind((address.as_str(), port))
    .with_context(|| format!("Failed to bind to {}:{}.", address, port))?
    .run();

    Ok(http_server)
}

fn get_port() -> Result<u16> {
    let value = match get_env_var(WEB_PORT) {
        Ok(v) => v,
        Err(_) => String::from(DEFAULT_PORT),
    };
    parse_port(&value)
}

fn parse_port(value: &str) -> Result<u16> {
    u16::from_str(value).with_context(|| format!("Failed to parse \"{}\" as a valid port.", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_port_accepts_default() {
        assert_eq!(7778, parse_port(DEFAULT_PORT).unwrap());
    }

    #[test]
    fn parse_port_rejects_out_of_range_value() {
        assert!(parse_port("70000").is_err());
    }
}
