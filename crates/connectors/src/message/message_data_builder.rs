//! Utilities for building [MessageData] structs for delivery of Matrix messages.

use crate::message::MessageData;
use std::fmt::Write;

const DEFAULT_PLAIN_BREAK: &str = "\n";
const DEFAULT_HTML_BREAK: &str = "<br>";

/// Escape the characters HTML gives meaning to. Titles and overviews come from TMDB and may
/// contain any of them.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds [MessageData] structs with special formatting. Forward-only.
pub struct MessageDataBuilder {
    plain_parts: String,
    html_parts: String,
}

impl MessageDataBuilder {
    pub fn new() -> Self {
        MessageDataBuilder {
            plain_parts: String::new(),
            html_parts: String::new(),
        }
    }

    /// Adds some character or set of characters that "break" or "separate" message data parts.
    /// For HTML text messages, a line break (`<br>`) after the last part added to the builder.
    /// For plain text messages, the default separator `\n` is added instead.
    pub fn break_character(&mut self) {
        self.plain_parts.push_str(DEFAULT_PLAIN_BREAK);
        self.html_parts.push_str(DEFAULT_HTML_BREAK);
    }

    /// Adds the message title as a top level heading.
    ///
    /// # Examples
    /// Plain: `# title`
    /// Rich: `<h1>title</h1>`
    pub fn add_heading(&mut self, text: &str) {
        write!(self.plain_parts, "# {}{}", text, DEFAULT_PLAIN_BREAK)
            .expect("Failed to write to underlying plain String.");
        write!(self.html_parts, "<h1>{}</h1>", escape_html(text))
            .expect("Failed to write to underlying HTML String.");
    }

    /// Adds a block of preformatted text, such as an overview, followed by a line break.
    ///
    /// # Examples
    /// Plain: ```` ```text``` ````
    /// Rich: `<pre>text</pre>`
    pub fn add_preformatted(&mut self, text: &str) {
        write!(self.plain_parts, "```{}```", text)
            .expect("Failed to write to underlying plain String.");
        write!(self.html_parts, "<pre>{}</pre>", escape_html(text))
            .expect("Failed to write to underlying HTML String.");
        self.break_character();
    }

    /// Adds a labelled link followed by a line break.
    ///
    /// # Examples
    /// Plain: `[label](url)`
    /// Rich: `<a href="url">label</a>`
    pub fn add_link(&mut self, label: &str, url: &str) {
        write!(self.plain_parts, "[{}]({})", label, url)
            .expect("Failed to write to underlying plain String.");
        write!(
            self.html_parts,
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(label)
        )
        .expect("Failed to write to underlying HTML String.");
        self.break_character();
    }

    /// Adds a key-value data pair to the message with a line break (or the default plain text separator).
    ///
    /// # Examples
    /// Plain: `**key**: value`
    /// Rich: `<strong>key</strong>: value`
    pub fn add_key_value(&mut self, key: &str, value: &str) {
        write!(self.plain_parts, "**{}**: {}", key, value)
            .expect("Failed to write to underlying plain String.");
        write!(
            self.html_parts,
            "<strong>{}</strong>: {}",
            escape_html(key),
            escape_html(value)
        )
        .expect("Failed to write to underlying HTML String.");
        self.break_character();
    }

    /// Copy the contents of this builder to a new [MessageData].
    ///
    /// Note that:
    ///  * Preceding and trailing whitespace is trimmed.
    ///  * Trailing "break characters" (as inserted by [Self::break_character()]) are trimmed.
    pub fn to_message_data(&self) -> MessageData {
        let plain = self
            .plain_parts
            .trim_end_matches(DEFAULT_PLAIN_BREAK)
            .trim();
        let html = self.html_parts.trim_end_matches(DEFAULT_HTML_BREAK).trim();

        MessageData::new(plain, html)
    }
}

impl Default for MessageDataBuilder {
    fn default() -> Self {
        MessageDataBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::message::message_data_builder::{escape_html, MessageDataBuilder};

    #[test]
    pub fn key_value_returns_result_without_trailing_break_character_given_single_use() {
        // Arrange
        let expected_plain = "**Test**: Of KeyValue";
        let expected_html = "<strong>Test</strong>: Of KeyValue";
        let mut builder = MessageDataBuilder::new();
        builder.add_key_value("Test", "Of KeyValue");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected_plain, actual.plain);
        assert_eq!(expected_html, actual.html);
    }

    #[test]
    pub fn key_value_returns_result_with_separating_break_character_given_multiple_uses() {
        // Arrange
        let expected_plain = "**Test**: Of KeyValue\n**Test2**: Of KeyValue2";
        let expected_html =
            "<strong>Test</strong>: Of KeyValue<br><strong>Test2</strong>: Of KeyValue2";
        let mut builder = MessageDataBuilder::new();
        builder.add_key_value("Test", "Of KeyValue");
        builder.add_key_value("Test2", "Of KeyValue2");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected_plain, actual.plain);
        assert_eq!(expected_html, actual.html);
    }

    #[test]
    pub fn add_heading_inserts_expected() {
        // Arrange
        let expected_plain = "# Test 123\n```Overview```\n[IMDb](https://imdb.com/title/tt1)";
        let expected_html = "<h1>Test 123</h1><pre>Overview</pre><br><a href=\"https://imdb.com/title/tt1\">IMDb</a>";
        let mut builder = MessageDataBuilder::new();
        builder.add_heading("Test 123");
        builder.add_preformatted("Overview");
        builder.add_link("IMDb", "https://imdb.com/title/tt1");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!(expected_plain, actual.plain);
        assert_eq!(expected_html, actual.html);
    }

    #[test]
    pub fn add_heading_escapes_html_only_in_rich_text() {
        // Arrange
        let mut builder = MessageDataBuilder::new();
        builder.add_heading("Tom & Jerry <3");

        // Act
        let actual = builder.to_message_data();

        // Assert
        assert_eq!("# Tom & Jerry <3", actual.plain);
        assert_eq!("<h1>Tom &amp; Jerry &lt;3</h1>", actual.html);
    }

    #[test]
    pub fn escape_html_leaves_plain_text_alone() {
        assert_eq!("Fight Club (1999)", escape_html("Fight Club (1999)"));
    }
}
