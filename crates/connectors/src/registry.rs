//! The set of enabled connectors and the best-effort dispatcher that fans a message out to them.

use crate::connector::{Connector, DeliveryOptions};
use crate::message::NotificationMessage;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{error, info, warn};

/// The connectors that can be enabled by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConnectorKind {
    Discord,
    Matrix,
    Whatsapp,
    Template,
}

impl ConnectorKind {
    /// Parse a comma separated list of connector names. Unknown names are logged and ignored,
    /// duplicates are dropped.
    pub fn parse_list(names: &str) -> Vec<ConnectorKind> {
        let mut kinds = Vec::new();
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match ConnectorKind::from_str(name) {
                Ok(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Ok(_) => {}
                Err(_) => warn!(connector = name, "Ignoring unknown connector."),
            }
        }
        kinds
    }
}

/// Outcome of a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Read-only registry of connectors, built once at startup and shared by every request.
pub struct ConnectorRegistry {
    connectors: Vec<Box<dyn Connector>>,
}

impl ConnectorRegistry {
    pub fn new(connectors: Vec<Box<dyn Connector>>) -> Self {
        ConnectorRegistry { connectors }
    }

    pub fn names(&self) -> Vec<&str> {
        self.connectors.iter().map(|c| c.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Send the message to every connector in registration order. A failing connector is logged
    /// and does not prevent delivery to the others.
    pub async fn dispatch(
        &self,
        message: &NotificationMessage,
        options: &DeliveryOptions,
    ) -> DispatchSummary {
        let mut summary = DispatchSummary::default();
        for connector in &self.connectors {
            match connector.send(message, options).await {
                Ok(status) => {
                    info!(
                        connector = connector.name(),
                        status = status.as_u16(),
                        "Delivered notification."
                    );
                    summary.succeeded += 1;
                }
                Err(e) => {
                    error!(
                        connector = connector.name(),
                        "Failed to deliver notification: {}", e
                    );
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
