mod connector_initialization;
mod initialization;
mod media_initialization;
mod web_initialization;

extern crate dotenv;

use crate::connector_initialization::initialize_connectors;
use crate::initialization::build_http_client;
use crate::media_initialization::initialize_media_details;
use crate::web_initialization::initialize_web_server;
use anyhow::Result;
use dotenv::dotenv;
use jellyhook_common::environment::{
    get_optional_env_var,
    variables::{LOG_DIRECTORY, LOG_FILTER},
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "jellyhook.log";

/// Set up logging, reading filter configuration from the environment variable or defaulting to
/// info logs and above. Logs also go to a daily rolling file when a log directory is set; the
/// returned guard flushes it and must be held until shutdown.
fn initialize_logging() -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (file_layer, guard) = match get_optional_env_var(LOG_DIRECTORY) {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    guard
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _log_guard = initialize_logging();

    info!("Initializing Jellyhook...");
    let http = build_http_client()?;

    info!("Configuring metadata providers...");
    let media_details = initialize_media_details(&http)?;

    info!("Configuring connectors...");
    let registry = initialize_connectors(&http)?;
    if registry.is_empty() {
        warn!("No connector is configured; notifications will not be delivered anywhere.");
    } else {
        info!(connectors = ?registry.names(), "Connectors ready.");
    }

    info!("Starting up web server...");
    let http_server = initialize_web_server(media_details, registry)?;

    info!("Jellyhook started!");
    http_server.await?;

    info!("Shutting Jellyhook down.");
    Ok(())
}
