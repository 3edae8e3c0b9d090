//! Configuration and handling of webhook pushes from Jellyfin.

use crate::facades::{classify, handle_event};
use crate::models::{InboundEvent, InboundEventBody};
use actix_web::{web, Error, HttpResponse};
use anyhow::{Context, Result};
use futures_util::StreamExt;
use jellyhook_connectors::ConnectorRegistry;
use jellyhook_media_details::MediaDetails;
use serde::Serialize;
use std::str;
use tracing::{debug, debug_span, info, warn};
use tracing_actix_web::RootSpan;

pub mod facades;
mod jellyhook_api_error;
mod jellyhook_root_span;
pub mod models;

const MAX_SIZE: usize = 262_144; // Limit max payload size to 256k.
const SUCCESS_MESSAGE: &str = "Data received successfully!";

pub use jellyhook_api_error::JellyhookApiError;
pub use jellyhook_root_span::JellyhookRootSpan;

#[derive(Serialize)]
struct ApiResponse {
    message: &'static str,
}

/// Configure the webhook API endpoint. Expects [MediaDetails] and [ConnectorRegistry] app data.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api").route(web::post().to(index)));
}

fn parse_body(body: &web::BytesMut) -> Result<InboundEventBody> {
    serde_json::from_slice::<InboundEventBody>(body).with_context(|| {
        let span = debug_span!("Parsing Request Body");
        span.in_scope(|| {
            let str_body = str::from_utf8(body).unwrap_or("Could not convert body to string.");
            debug!("Request body: {}", str_body)
        });

        "Encountered an error while parsing webhook request body."
    })
}

async fn index(
    root_span: RootSpan,
    details: web::Data<MediaDetails>,
    registry: web::Data<ConnectorRegistry>,
    mut payload: web::Payload,
) -> Result<HttpResponse, Error> {
    // Essentially copied from: https://actix.rs/docs/request/
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;
        if (body.len() + chunk.len()) > MAX_SIZE {
            return Err(JellyhookApiError::bad_request(
                format!("Body exceeded limit of {} bytes.", MAX_SIZE).as_str(),
            )
            .into());
        }

        body.extend_from_slice(&chunk);
    }

    let body = match parse_body(&body) {
        Ok(b) => b,
        Err(e) => {
            debug!("Encountered error while parsing webhook: {:?}", e);
            return Err(JellyhookApiError::bad_request("Data is not json!").into());
        }
    };
    let event = InboundEvent::try_from(body)
        .map_err(|e| JellyhookApiError::bad_request(&e.to_string()))?;
    root_span.record("media_type", &event.media_type.as_str());

    let kind = classify(&event.media_type, &event.title)
        .map_err(|e| JellyhookApiError::bad_request(&e.to_string()))?;
    root_span.record("media_kind", &kind.as_ref());

    let notification = handle_event(&event, kind, details.get_ref()).await;
    if registry.is_empty() {
        warn!("No connector is enabled; the notification is not sent anywhere.");
    }
    debug!(connectors = ?registry.names(), "Sending notification now.");
    let summary = registry
        .dispatch(&notification.message, &notification.delivery_options())
        .await;
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Dispatched notification."
    );
    // Removes the poster file.
    drop(notification);

    Ok(HttpResponse::Ok().json(ApiResponse {
        message: SUCCESS_MESSAGE,
    }))
}
