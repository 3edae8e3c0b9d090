//! Plain and rich text renditions of a notification for connectors that send both.

use serde::Serialize;

/// Formatted message data to send via Matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageData {
    /// The plain text version of the message to send to clients that don't support HTML messages.
    pub plain: String,
    /// The HTML (rich text) version of the message to send.
    pub html: String,
}

/// The `m.room.message` content of a Matrix notice carrying [MessageData].
#[derive(Debug, Serialize)]
pub struct NoticeContent<'a> {
    msgtype: &'static str,
    body: &'a str,
    format: &'static str,
    formatted_body: &'a str,
}

impl MessageData {
    pub fn new(plain: &str, html: &str) -> MessageData {
        MessageData {
            plain: String::from(plain),
            html: String::from(html),
        }
    }

    /// Wrap this message in a notice, the message type meant for bots that expect no reply.
    pub fn to_notice(&self) -> NoticeContent<'_> {
        NoticeContent {
            msgtype: "m.notice",
            body: self.plain.as_str(),
            format: "org.matrix.custom.html",
            formatted_body: self.html.as_str(),
        }
    }
}
