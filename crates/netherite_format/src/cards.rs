//! Card builders for fetched records.
//!
//! Each function is a pure `record -> Card` mapping. Optional source fields
//! that are absent simply produce no card field.

use crate::card::{Card, CardAttachment, WYNNCRAFT_GREEN};
use crate::text::{bold, inline};
use base64::Engine;
use chrono::{DateTime, Utc};
use netherite_fetch::{
    BedrockServerStatus, GameSales, JavaServerStatus, MinecraftProfile, MojiraIssue, NameChange,
    ServiceHealth, WikiArticle, WynncraftStats,
};
use tracing::warn;

const WIKIMEDIA_ICON: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/5/53\
/Wikimedia-logo.png/600px-Wikimedia-logo.png";
const WYNNCRAFT_ICON: &str = "https://cdn.wynncraft.com/img/wynn.png";
const WIKI_EXTRACT_LIMIT: usize = 1500;

/// Render an integer with thousands separators.
fn commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn change_date(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(when) => when.format("%b %d, %Y").to_string(),
        None => "unknown date".to_string(),
    }
}

fn name_history_lines(names: &[NameChange]) -> Option<String> {
    let first = names.first()?;
    let mut lines = Vec::with_capacity(names.len());
    for (index, change) in names.iter().enumerate().skip(1).rev() {
        let date = change
            .changed_to_at
            .map(change_date)
            .unwrap_or_else(|| "unknown date".to_string());
        lines.push(format!(
            "{} {} - {}",
            bold(&format!("{}.", index + 1)),
            inline(&change.name),
            date
        ));
    }
    lines.push(format!(
        "{} {} - First Username",
        bold("1."),
        inline(&first.name)
    ));
    Some(lines.join("\n"))
}

/// Profile card: UUIDs, skin link, and name history.
pub fn profile_card(profile: &MinecraftProfile, names: &[NameChange]) -> Card {
    let uuids = format!(
        "Short UUID: {}\nLong UUID: {}",
        inline(&profile.id),
        inline(&profile.long_id())
    );
    let changes = names.len().saturating_sub(1);

    Card::new()
        .titled(format!("Minecraft profile for {}", profile.name))
        .field("UUIDs", uuids, false)
        .field(
            "Textures",
            format!("Skin: [Open Skin]({})", profile.skin_url()),
            true,
        )
        .field(
            "Information",
            format!("Username Changes: {}", inline(&changes.to_string())),
            true,
        )
        .maybe_field("Name History", name_history_lines(names), false)
        .thumbnail_url(profile.skin_url())
}

fn favicon_attachment(favicon: &str) -> Option<CardAttachment> {
    // Favicons arrive as `data:image/png;base64,<payload>`.
    let payload = favicon.split_once(',').map(|(_, p)| p).unwrap_or(favicon);
    match base64::engine::general_purpose::STANDARD.decode(payload.trim()) {
        Ok(bytes) => Some(CardAttachment::new("favicon.png", bytes)),
        Err(e) => {
            warn!(error = %e, "Favicon failed to decode, omitting thumbnail");
            None
        }
    }
}

/// Java edition server status card.
pub fn java_server_card(address: &str, status: &JavaServerStatus) -> Card {
    let mut card = Card::new()
        .titled(format!("Java Server: {address}"))
        .maybe_field("Description", status.description.clone(), true)
        .field(
            "Players",
            format!(
                "Online: {} \nMaximum: {}",
                inline(&commas(status.players.online)),
                inline(&commas(status.players.max))
            ),
            true,
        );

    if let Some(sample) = &status.players.sample {
        if !sample.is_empty() {
            let names: Vec<String> = sample.iter().map(|p| p.name.clone()).collect();
            card = card.field("Players Online", names.join("\n"), false);
        }
    }

    if let Some(version) = &status.version {
        card = card.field(
            "Version",
            format!(
                "Java Edition \nRunning: {} \nProtocol: {}",
                inline(&version.name),
                inline(&version.protocol.to_string())
            ),
            false,
        );
    }

    if let Some(favicon) = &status.favicon {
        if let Some(attachment) = favicon_attachment(favicon) {
            card = card
                .thumbnail_url(format!("attachment://{}", attachment.filename()))
                .attach(attachment);
        }
    }

    card
}

/// Bedrock edition server status card.
pub fn bedrock_server_card(address: &str, status: &BedrockServerStatus) -> Card {
    let mut card = Card::new()
        .titled(format!("Bedrock Server: {address}"))
        .maybe_field("Description", status.motd.clone(), true)
        .field(
            "Players",
            format!(
                "Online: {} \nMaximum: {}",
                inline(&commas(status.players.online)),
                inline(&commas(status.players.max))
            ),
            true,
        );

    let mut version_lines = vec!["Bedrock Edition".to_string()];
    if let Some(software) = &status.software {
        version_lines.push(format!("Running: {}", inline(&software.version)));
    }
    if let Some(map) = &status.map {
        version_lines.push(format!("Map: {}", inline(map)));
    }
    card = card.field("Version", version_lines.join(" \n"), true);

    if let Some(names) = &status.players.names {
        if !names.is_empty() {
            card = card.field("Players Online", names[..names.len().min(10)].join("\n"), false);
        }
    }

    card
}

/// Mojang service health card, with sales totals when available.
pub fn service_status_card(health: &ServiceHealth, sales: Option<&GameSales>) -> Card {
    let mut card = Card::new().titled("Minecraft Service Status");

    if let Some(sales) = sales {
        card = card.field(
            "Minecraft Game Sales",
            format!(
                "Total Sales: {} Last 24 Hours: {}",
                bold(&commas(sales.total)),
                bold(&commas(sales.last24h))
            ),
            true,
        );
    }

    let mut services = String::new();
    for (service, color) in &health.0 {
        if color == "green" {
            services.push_str(&format!(
                ":green_heart: - {service}: {} \n",
                bold("This service is healthy.")
            ));
        } else {
            services.push_str(&format!(
                ":heart: - {service}: {} \n",
                bold("This service is offline.")
            ));
        }
    }
    if !services.is_empty() {
        card = card.field("Minecraft Services:", services, false);
    }

    card
}

/// Mojira bug report card.
pub fn bug_card(issue: &MojiraIssue) -> Card {
    let fields = &issue.fields;

    let info = format!(
        "Version: {}\nReporter: {}\nCreated: {}\nVotes: {}\nUpdates: {}\nWatchers: {}",
        fields.project.name,
        fields.creator.display_name,
        fields.created,
        fields.votes.votes,
        fields.updated,
        fields.watches.watch_count
    );

    let mut details = format!(
        "Type: {}\nStatus: {}\n",
        fields.issuetype.name, fields.status.name
    );
    if let Some(resolution) = &fields.resolution {
        details.push_str(&format!("Resolution: {}\n", resolution.name));
    }
    if !fields.versions.is_empty() {
        let affected: Vec<String> = fields.versions.iter().map(|v| v.name.clone()).collect();
        details.push_str(&format!("Affected: {}\n", affected.join(", ")));
    }
    if let Some(first_fix) = fields.fix_versions.first() {
        details.push_str(&format!(
            "Fixed Version: {} + {}\n",
            first_fix.name,
            fields.fix_versions.len()
        ));
    }

    Card::new()
        .authored(
            format!("{} - {}", fields.project.name, fields.summary),
            Some(issue.browse_url()),
            None,
        )
        .maybe_field(
            "Description",
            fields.description.clone().filter(|d| !d.is_empty()),
            false,
        )
        .field("Information", info, true)
        .field("Details", details, true)
}

/// Minecraft wiki article card, extract truncated with a read-more link.
pub fn wiki_card(article: &WikiArticle) -> Card {
    let cleaned = article.extract.trim().replace('\n', "\n\n");
    let description = if cleaned.chars().count() > WIKI_EXTRACT_LIMIT {
        let truncated: String = cleaned.chars().take(WIKI_EXTRACT_LIMIT).collect();
        format!(
            "{}... [(read more)]({})",
            truncated.trim_end(),
            article.url()
        )
    } else {
        cleaned
    };

    Card::new()
        .titled(format!("Minecraft Gamepedia: {}", article.title))
        .link(article.url())
        .described(format!("\u{2063}\n{description}\n\u{2063}"))
        .footer(
            "Information provided by Wikimedia",
            Some(WIKIMEDIA_ICON.to_string()),
        )
}

/// Wynncraft class statistics card.
pub fn wynncraft_card(stats: &WynncraftStats, skin_url: Option<String>) -> Card {
    let mut card = Card::new()
        .colored(WYNNCRAFT_GREEN)
        .authored(
            format!("WynnCraft information for {}", stats.username),
            Some(stats.profile_url()),
            Some(WYNNCRAFT_ICON.to_string()),
        );

    if let Some(url) = skin_url {
        card = card.thumbnail_url(url);
    }

    for character in stats.characters.values() {
        let mut lines = vec![
            format!("Class Name: {}", inline(&character.class)),
            format!("Class Level: {}", inline(&character.level.to_string())),
        ];
        if let Some(deaths) = character.deaths {
            lines.push(format!("Class Deaths: {}", inline(&deaths.to_string())));
        }
        card = card.field(character.class.clone(), lines.join("\n"), true);
    }

    card
}
