//! The platform-neutral presentation card.

use chrono::{DateTime, Utc};
use derive_getters::Getters;

/// The bot's accent color.
pub const GREEN: u32 = 0x00FF00;

/// Accent color for Wynncraft cards.
pub const WYNNCRAFT_GREEN: u32 = 0xA4EC66;

/// One titled field on a card.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CardField {
    /// Field heading.
    name: String,
    /// Field body.
    value: String,
    /// Whether the field may share a row with its neighbors.
    inline: bool,
}

/// Binary attachment shipped alongside a card (e.g. a decoded favicon).
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CardAttachment {
    /// Attachment filename.
    filename: String,
    /// Raw bytes.
    bytes: Vec<u8>,
}

impl CardAttachment {
    /// Create an attachment.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// A presentation card: title, fields, thumbnail, footer, timestamp.
///
/// Built up with chained setters and rendered by the bot crate into the
/// host platform's embed type. Every element is optional except the color.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct Card {
    /// Card title.
    title: Option<String>,
    /// URL the title links to.
    url: Option<String>,
    /// Body text above the fields.
    description: Option<String>,
    /// Accent color.
    color: u32,
    /// Titled fields in display order.
    fields: Vec<CardField>,
    /// Thumbnail image URL.
    thumbnail: Option<String>,
    /// Author line shown above the title.
    author: Option<String>,
    /// URL the author line links to.
    author_url: Option<String>,
    /// Icon shown next to the author line.
    author_icon: Option<String>,
    /// Footer text.
    footer_text: Option<String>,
    /// Footer icon URL.
    footer_icon: Option<String>,
    /// Footer timestamp.
    timestamp: Option<DateTime<Utc>>,
    /// Attachment shipped with the card.
    attachment: Option<CardAttachment>,
}

impl Card {
    /// Create an empty card with the default accent color.
    pub fn new() -> Self {
        Self {
            title: None,
            url: None,
            description: None,
            color: GREEN,
            fields: Vec::new(),
            thumbnail: None,
            author: None,
            author_url: None,
            author_icon: None,
            footer_text: None,
            footer_icon: None,
            timestamp: None,
            attachment: None,
        }
    }

    /// Set the title.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title URL.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the description.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the accent color.
    pub fn colored(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Append a field.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Append a field only when `value` is present.
    pub fn maybe_field(
        self,
        name: impl Into<String>,
        value: Option<String>,
        inline: bool,
    ) -> Self {
        match value {
            Some(value) => self.field(name, value, inline),
            None => self,
        }
    }

    /// Set the thumbnail URL.
    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Set the author line.
    pub fn authored(
        mut self,
        name: impl Into<String>,
        url: Option<String>,
        icon: Option<String>,
    ) -> Self {
        self.author = Some(name.into());
        self.author_url = url;
        self.author_icon = icon;
        self
    }

    /// Set the footer.
    pub fn footer(mut self, text: impl Into<String>, icon: Option<String>) -> Self {
        self.footer_text = Some(text.into());
        self.footer_icon = icon;
        self
    }

    /// Set the footer timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Attach bytes to ship with the card.
    pub fn attach(mut self, attachment: CardAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
