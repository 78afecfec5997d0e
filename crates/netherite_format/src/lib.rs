//! Presentation formatting for Netherite.
//!
//! Everything in this crate is a pure function from fetched records (or user
//! text) to values: no I/O, no external calls. The central type is [`Card`],
//! a platform-neutral embed model that the bot crate renders into Discord
//! embeds. Card builders omit a field entirely when the corresponding source
//! field is absent rather than failing.
//!
//! The rest is cosmetic text machinery: Discord markdown helpers, humanized
//! durations and lists, the standard galactic alphabet, villager speech, and
//! the redstone arithmetic helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card;
mod cards;
mod fun;
mod galactic;
mod redstone;
mod text;

pub use card::{Card, CardAttachment, CardField, GREEN, WYNNCRAFT_GREEN};
pub use cards::{
    bedrock_server_card, bug_card, java_server_card, profile_card, service_status_card,
    wiki_card, wynncraft_card,
};
pub use fun::{play_rps, villager_speech, Gesture, RpsOutcome};
pub use galactic::{enchant, unenchant};
pub use redstone::{
    comparator_strength, items_for_strength, seconds_to_ticks, storage_report, ticks_to_seconds,
    StorageReport,
};
pub use text::{
    bold, box_text, error, escape, humanize_list, humanize_timedelta, info, inline, italics,
    question, strikethrough, underline, warning,
};
