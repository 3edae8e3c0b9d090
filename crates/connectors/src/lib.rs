//! Outbound chat integrations. Every connector receives the same [NotificationMessage] and renders
//! it in its destination's format.

mod connector;
pub mod connectors;
pub mod message;
mod registry;

pub use connector::{Connector, ConnectorError, DeliveryOptions};
pub use message::NotificationMessage;
pub use registry::{ConnectorKind, ConnectorRegistry, DispatchSummary};
