mod discord;
mod matrix;
mod template;
mod whatsapp;

pub use discord::{DiscordConnector, DiscordSettings};
pub use matrix::{MatrixConnector, MatrixSettings};
pub use template::{TemplateConnector, TemplateSettings};
pub use whatsapp::{WhatsappConnector, WhatsappSettings};
