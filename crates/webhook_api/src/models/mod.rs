pub mod inbound_event;

pub use inbound_event::{InboundEvent, InboundEventBody, InboundEventError};
