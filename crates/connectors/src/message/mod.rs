mod message_data;
mod message_data_builder;
mod notification_message;

pub use message_data::{MessageData, NoticeContent};
pub use message_data_builder::{escape_html, MessageDataBuilder};
pub use notification_message::NotificationMessage;
