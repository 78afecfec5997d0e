//! [`Reply`] to Serenity message rendering.

use crate::Reply;
use netherite_format::Card;
use serenity::builder::{
    CreateAttachment, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage,
};
use serenity::model::Timestamp;

fn render_card(card: &Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(*card.color());
    if let Some(title) = card.title() {
        embed = embed.title(title.clone());
    }
    if let Some(url) = card.url() {
        embed = embed.url(url.clone());
    }
    if let Some(description) = card.description() {
        embed = embed.description(description.clone());
    }
    for field in card.fields() {
        embed = embed.field(field.name().clone(), field.value().clone(), *field.inline());
    }
    if let Some(thumbnail) = card.thumbnail() {
        embed = embed.thumbnail(thumbnail.clone());
    }
    if let Some(author) = card.author() {
        let mut line = CreateEmbedAuthor::new(author.clone());
        if let Some(url) = card.author_url() {
            line = line.url(url.clone());
        }
        if let Some(icon) = card.author_icon() {
            line = line.icon_url(icon.clone());
        }
        embed = embed.author(line);
    }
    if let Some(text) = card.footer_text() {
        let mut footer = CreateEmbedFooter::new(text.clone());
        if let Some(icon) = card.footer_icon() {
            footer = footer.icon_url(icon.clone());
        }
        embed = embed.footer(footer);
    }
    if let Some(timestamp) = card.timestamp() {
        let stamp = Timestamp::from_unix_timestamp(timestamp.timestamp())
            .unwrap_or_else(|_| Timestamp::now());
        embed = embed.timestamp(stamp);
    }
    embed
}

/// Turn a reply into a sendable message.
pub fn render(reply: &Reply) -> CreateMessage {
    match reply {
        Reply::Text(text) => CreateMessage::new().content(text.clone()),
        Reply::Card(card) => {
            let mut message = CreateMessage::new().embed(render_card(card));
            if let Some(attachment) = card.attachment() {
                message = message.add_file(CreateAttachment::bytes(
                    attachment.bytes().clone(),
                    attachment.filename().clone(),
                ));
            }
            message
        }
    }
}
